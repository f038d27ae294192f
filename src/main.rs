use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use arcade_snake::config::{Theme, CELL_SIZE_PX, DEFAULT_CANVAS_PX};
use arcade_snake::game::{GamePhase, GameState, TickOutcome};
use arcade_snake::grid::Board;
use arcade_snake::input::{GameInput, InputHandler};
use arcade_snake::renderer;
use arcade_snake::terminal_runtime::TerminalSession;
use arcade_snake::theme::resolve_theme;

/// How long one frame waits for input; doubles as the frame sleep.
const FRAME_POLL_TIMEOUT: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "arcade-snake", version, about = "Grid-based arcade Snake in the terminal")]
struct Cli {
    /// Canvas width in pixels; the board is the largest cell-aligned fit.
    #[arg(long, default_value_t = DEFAULT_CANVAS_PX)]
    canvas_width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_PX)]
    canvas_height: u32,

    /// Cell edge length in pixels.
    #[arg(long, default_value_t = CELL_SIZE_PX)]
    cell_size: u32,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Built-in theme name (canvas, ocean, neon) or path to a JSON theme file.
    #[arg(long, default_value = "canvas")]
    theme: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.cell_size == 0 {
        eprintln!("cell size must be positive");
        return ExitCode::FAILURE;
    }

    let theme = match resolve_theme(&cli.theme) {
        Ok(theme) => theme,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let board = Board::from_pixels(cli.canvas_width, cli.canvas_height, cli.cell_size);
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    };
    let mut state = match state {
        Ok(state) => state,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut state, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// The external scheduler: renders each frame, routes input, and invokes
/// `tick` whenever the current interval has elapsed. Retime signals from
/// the engine restart the timer at the new cadence.
fn run(state: &mut GameState, theme: &Theme) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let mut paused = false;
    let mut tick_interval = Duration::from_millis(state.interval_ms());
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state, theme, paused))?;

        if let Some(game_input) = input.poll_input(FRAME_POLL_TIMEOUT)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => state.request_direction(direction),
                GameInput::Pause => {
                    // Pausing stops this loop from ticking; game state
                    // is not touched.
                    if state.phase() == GamePhase::Running {
                        paused = !paused;
                    }
                }
                GameInput::Confirm => match state.phase() {
                    GamePhase::Idle => {
                        state.start();
                        last_tick = Instant::now();
                    }
                    GamePhase::GameOver | GamePhase::BoardFull => {
                        state.reset();
                        state.start();
                        paused = false;
                        tick_interval = Duration::from_millis(state.interval_ms());
                        last_tick = Instant::now();
                    }
                    GamePhase::Running => {}
                },
            }
        }

        let ticking = state.phase() == GamePhase::Running && !paused;
        if ticking && last_tick.elapsed() >= tick_interval {
            if let TickOutcome::Advanced {
                new_interval_ms: Some(interval_ms),
                ..
            } = state.tick()
            {
                tick_interval = Duration::from_millis(interval_ms);
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::{
    APPLES_PER_SPEED_STEP, INITIAL_SNAKE_LENGTH, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
    POINTS_PER_APPLE, SPEED_STEP_MS,
};
use crate::food;
use crate::grid::{Board, Cell};
use crate::input::{Direction, DirectionController};
use crate::snake::Snake;

/// Direction both controller fields start with.
const START_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    /// Constructed or reset, waiting for an explicit start.
    Idle,
    Running,
    /// Terminal; only `reset` leaves it.
    GameOver,
    /// Terminal win: the snake covers every cell.
    BoardFull,
}

/// What killed the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Read-only state emitted once per tick for rendering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Body cells, head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
}

/// Result of advancing the engine by one tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// The engine was not running; nothing changed.
    Skipped,
    /// Normal step. When the speed ramp fired, `new_interval_ms` tells
    /// the scheduler to restart its timer at the new cadence; the
    /// engine never owns a timer handle.
    Advanced {
        snapshot: Snapshot,
        new_interval_ms: Option<u64>,
    },
    /// Fatal collision; the engine is now in `GameOver`.
    Fatal {
        reason: DeathReason,
        final_score: u32,
    },
    /// No free cell remains for food; the engine is now in `BoardFull`.
    BoardFull { final_score: u32 },
}

/// Configuration rejected at setup time, before any tick can run.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SetupError {
    #[error("board has no cells ({cols}x{rows}); the canvas is smaller than one cell")]
    EmptyBoard { cols: u16, rows: u16 },
    #[error("board {cols}x{rows} cannot fit the starting snake and a food cell")]
    BoardTooSmall { cols: u16, rows: u16 },
}

/// Complete mutable game state for one session, advanced by `tick`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub apples_eaten: u32,
    pub tick_count: u64,
    pub controller: DirectionController,
    board: Board,
    phase: GamePhase,
    death_reason: Option<DeathReason>,
    interval_ms: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a validated idle game on `board` with an OS-seeded RNG.
    pub fn new(board: Board) -> Result<Self, SetupError> {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    pub fn new_with_seed(board: Board, seed: u64) -> Result<Self, SetupError> {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, mut rng: StdRng) -> Result<Self, SetupError> {
        let snake = starting_snake(board)?;
        let food = food::place(&mut rng, board, &snake)
            .expect("validated board must have a free cell for food");

        Ok(Self {
            snake,
            food,
            score: 0,
            apples_eaten: 0,
            tick_count: 0,
            controller: DirectionController::new(START_DIRECTION),
            board,
            phase: GamePhase::Idle,
            death_reason: None,
            interval_ms: INITIAL_TICK_INTERVAL_MS,
            rng,
        })
    }

    /// Moves Idle to Running. Any other phase is left untouched; leaving
    /// a terminal phase requires `reset`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
    }

    /// Records an external direction request between ticks.
    ///
    /// Exact reversals of the committed direction are dropped inside the
    /// controller; everything else overwrites the pending request.
    pub fn request_direction(&mut self, direction: Direction) {
        self.controller.request(direction);
    }

    /// Advances the simulation by one discrete step.
    ///
    /// Commit direction, move, collide-check, consume-food-or-shrink,
    /// retime. Wall collision is checked before self collision, and the
    /// self check scans the full body including the not-yet-dropped
    /// tail.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        let direction = self.controller.commit();
        let new_head = self.snake.peek_move(direction);
        self.snake.grow_head(new_head);

        if !self.board.contains(new_head) {
            return self.die(DeathReason::WallCollision);
        }
        if self.snake.head_overlaps_body() {
            return self.die(DeathReason::SelfCollision);
        }

        let mut new_interval_ms = None;
        if new_head == self.food {
            self.score += POINTS_PER_APPLE;
            self.apples_eaten += 1;

            if self.apples_eaten % APPLES_PER_SPEED_STEP == 0
                && self.interval_ms > MIN_TICK_INTERVAL_MS
            {
                self.interval_ms = MIN_TICK_INTERVAL_MS.max(self.interval_ms - SPEED_STEP_MS);
                new_interval_ms = Some(self.interval_ms);
            }

            // Tail stays on: net growth of exactly one cell per apple.
            match food::place(&mut self.rng, self.board, &self.snake) {
                Some(cell) => self.food = cell,
                None => {
                    self.phase = GamePhase::BoardFull;
                    return TickOutcome::BoardFull {
                        final_score: self.score,
                    };
                }
            }
        } else {
            self.snake.drop_tail();
        }

        TickOutcome::Advanced {
            snapshot: self.snapshot(),
            new_interval_ms,
        }
    }

    /// Reinitializes every field for a fresh game, reusing the RNG
    /// stream. The engine returns to Idle and waits for `start`.
    pub fn reset(&mut self) {
        self.snake = starting_snake(self.board).expect("board was validated at construction");
        self.food = food::place(&mut self.rng, self.board, &self.snake)
            .expect("validated board must have a free cell for food");
        self.score = 0;
        self.apples_eaten = 0;
        self.tick_count = 0;
        self.controller = DirectionController::new(START_DIRECTION);
        self.phase = GamePhase::Idle;
        self.death_reason = None;
        self.interval_ms = INITIAL_TICK_INTERVAL_MS;
    }

    /// Builds the render boundary value from current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
        }
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the direction applied during the current tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.controller.committed()
    }

    /// Current tick cadence in milliseconds. The scheduler reads this at
    /// startup; afterwards changes arrive via `TickOutcome::Advanced`.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    fn die(&mut self, reason: DeathReason) -> TickOutcome {
        self.phase = GamePhase::GameOver;
        self.death_reason = Some(reason);
        TickOutcome::Fatal {
            reason,
            final_score: self.score,
        }
    }
}

/// Builds the centered starting snake, validating the board fits it.
fn starting_snake(board: Board) -> Result<Snake, SetupError> {
    if board.cols == 0 || board.rows == 0 {
        return Err(SetupError::EmptyBoard {
            cols: board.cols,
            rows: board.rows,
        });
    }

    let snake = Snake::new(board.center(), START_DIRECTION, INITIAL_SNAKE_LENGTH);
    let fits = snake.segments().all(|segment| board.contains(*segment));
    if !fits || board.total_cells() <= snake.len() {
        return Err(SetupError::BoardTooSmall {
            cols: board.cols,
            rows: board.rows,
        });
    }

    Ok(snake)
}

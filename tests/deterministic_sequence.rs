use arcade_snake::game::{DeathReason, GamePhase, GameState, TickOutcome};
use arcade_snake::grid::{Board, Cell};
use arcade_snake::input::Direction;
use arcade_snake::snake::Snake;

#[test]
fn stepwise_food_collection_then_wall_collision() {
    let mut state = GameState::new_with_seed(Board { cols: 6, rows: 4 }, 42).expect("valid board");
    state.start();
    state.snake = Snake::new(Cell { x: 2, y: 1 }, Direction::Right, 3);
    state.food = Cell { x: 3, y: 1 };

    assert!(matches!(state.tick(), TickOutcome::Advanced { .. }));
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Cell { x: 3, y: 1 });

    // Park the food away from the snake's path.
    state.food = Cell { x: 0, y: 3 };

    state.request_direction(Direction::Up);
    assert!(matches!(state.tick(), TickOutcome::Advanced { .. }));
    assert_eq!(state.snake.head(), Cell { x: 3, y: 0 });
    assert_eq!(state.snake.len(), 4);

    let outcome = state.tick();
    assert_eq!(
        outcome,
        TickOutcome::Fatal {
            reason: DeathReason::WallCollision,
            final_score: 10,
        }
    );
    assert_eq!(state.phase(), GamePhase::GameOver);
}

#[test]
fn speed_ramp_reaches_the_floor_and_stays_there() {
    // 1200px canvas at 20px cells: a 60x60 board, head starting at x=30.
    let board = Board::from_pixels(1200, 1200, 20);
    assert_eq!(board, Board { cols: 60, rows: 60 });

    let mut state = GameState::new_with_seed(board, 5).expect("valid board");
    state.start();

    // Feed the snake one apple per tick by parking the food directly in
    // its path, recording every retime signal the scheduler would see.
    let mut signals = Vec::new();
    for _ in 0..27 {
        state.food = state.snake.peek_move(Direction::Right);
        match state.tick() {
            TickOutcome::Advanced {
                new_interval_ms, ..
            } => signals.push(new_interval_ms),
            other => panic!("expected Advanced, got {other:?}"),
        }
    }

    assert_eq!(state.apples_eaten, 27);
    assert_eq!(state.score, 270);
    assert_eq!(state.snake.len(), 30);

    // One signal per third apple, stepping 140..=70, then silence once
    // the floor is reached.
    assert_eq!(signals[2], Some(140));
    assert_eq!(signals[5], Some(130));
    assert_eq!(signals[8], Some(120));
    assert_eq!(signals[11], Some(110));
    assert_eq!(signals[14], Some(100));
    assert_eq!(signals[17], Some(90));
    assert_eq!(signals[20], Some(80));
    assert_eq!(signals[23], Some(70));
    assert_eq!(signals[26], None);
    assert_eq!(signals.iter().filter(|signal| signal.is_some()).count(), 8);
    assert_eq!(state.interval_ms(), 70);
}

#[test]
fn same_tick_double_turn_is_accepted_and_can_bite_the_neck() {
    // committed=Right: Up becomes pending, then Left is checked against
    // Right (not Up) and wins. The snake turns straight into its own
    // neck; with a dropped request it would have moved Up harmlessly.
    let mut state = GameState::new_with_seed(Board { cols: 30, rows: 30 }, 9).expect("valid board");
    state.start();
    state.snake = Snake::new(Cell { x: 5, y: 5 }, Direction::Right, 3);
    state.food = Cell { x: 0, y: 0 };

    state.request_direction(Direction::Up);
    state.request_direction(Direction::Left);

    let outcome = state.tick();
    assert_eq!(
        outcome,
        TickOutcome::Fatal {
            reason: DeathReason::SelfCollision,
            final_score: 0,
        }
    );
}

#[test]
fn seeded_runs_are_fully_reproducible() {
    let board = Board { cols: 20, rows: 20 };
    let mut first = GameState::new_with_seed(board, 1234).expect("valid board");
    let mut second = GameState::new_with_seed(board, 1234).expect("valid board");
    first.start();
    second.start();

    for _ in 0..40 {
        let a = first.tick();
        let b = second.tick();
        assert_eq!(a, b);
        if first.phase() != GamePhase::Running {
            break;
        }
    }
}

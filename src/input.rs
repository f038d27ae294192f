use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEvent, MouseEventKind};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Buffers the latest requested direction against the committed one.
///
/// `request` compares against the *committed* direction, never the
/// pending one. Two rapid requests inside one tick can therefore queue a
/// turn that looks like a reversal of the first request (committed=Right,
/// request Up then Left leaves Left pending). That matches the source
/// behavior and stays.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionController {
    committed: Direction,
    pending: Direction,
}

impl DirectionController {
    /// Creates a controller with both directions set to `start`.
    #[must_use]
    pub fn new(start: Direction) -> Self {
        Self {
            committed: start,
            pending: start,
        }
    }

    /// Records a direction request; exact reversals of the committed
    /// direction are silently dropped.
    pub fn request(&mut self, direction: Direction) {
        if direction == self.committed.opposite() {
            return;
        }
        self.pending = direction;
    }

    /// Applies the pending direction. Called once per tick.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    /// Returns the direction applied during the current tick.
    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Returns the most recent still-unapplied request.
    #[must_use]
    pub fn pending(&self) -> Direction {
        self.pending
    }
}

/// High-level input events consumed by the scheduler loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
}

/// Decodes a drag gesture into a direction.
///
/// The larger-magnitude axis wins; horizontal only on a strict majority
/// (`|dx| > |dy|`). A zero drag decodes to nothing.
#[must_use]
pub fn direction_from_swipe(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        Some(if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if dy > 0 {
        Some(Direction::Down)
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Maps a key code to a game input. Pure so it is testable headless.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char(' ') => Some(GameInput::Pause),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Polls crossterm events and turns them into game inputs.
///
/// Mouse press/release pairs act as swipes so the game is playable by
/// dragging across the play area, mirroring touch controls.
#[derive(Debug, Default)]
pub struct InputHandler {
    swipe_origin: Option<(i32, i32)>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `timeout` for one event and maps it.
    ///
    /// Returns `Ok(None)` when no event arrived or the event carries no
    /// game meaning.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
            Event::Mouse(mouse) => Ok(self.map_mouse(mouse)),
            _ => Ok(None),
        }
    }

    fn map_mouse(&mut self, mouse: MouseEvent) -> Option<GameInput> {
        let position = (i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(_) => {
                self.swipe_origin = Some(position);
                None
            }
            MouseEventKind::Up(_) => {
                let (origin_x, origin_y) = self.swipe_origin.take()?;
                direction_from_swipe(position.0 - origin_x, position.1 - origin_y)
                    .map(GameInput::Direction)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{direction_from_swipe, map_key, Direction, DirectionController, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_request_is_dropped() {
        let mut controller = DirectionController::new(Direction::Right);

        controller.request(Direction::Left);

        assert_eq!(controller.commit(), Direction::Right);
    }

    #[test]
    fn perpendicular_request_is_committed() {
        let mut controller = DirectionController::new(Direction::Right);

        controller.request(Direction::Up);

        assert_eq!(controller.commit(), Direction::Up);
        assert_eq!(controller.committed(), Direction::Up);
    }

    #[test]
    fn double_turn_within_one_tick_checks_committed_not_pending() {
        // committed=Right; Up becomes pending, then Left is compared
        // against Right (not Up) and overwrites the pending value.
        let mut controller = DirectionController::new(Direction::Right);

        controller.request(Direction::Up);
        controller.request(Direction::Left);
        assert_eq!(controller.pending(), Direction::Left);

        assert_eq!(controller.commit(), Direction::Left);
    }

    #[test]
    fn reversal_is_legal_again_after_commit_turns_the_snake() {
        let mut controller = DirectionController::new(Direction::Right);

        controller.request(Direction::Up);
        controller.commit();

        // Down is now a reversal of Up, Left no longer one of Right.
        controller.request(Direction::Down);
        assert_eq!(controller.pending(), Direction::Up);
        controller.request(Direction::Left);
        assert_eq!(controller.commit(), Direction::Left);
    }

    #[test]
    fn swipe_horizontal_wins_only_on_strict_majority() {
        assert_eq!(direction_from_swipe(10, 3), Some(Direction::Right));
        assert_eq!(direction_from_swipe(-10, 3), Some(Direction::Left));
        assert_eq!(direction_from_swipe(3, 10), Some(Direction::Down));
        assert_eq!(direction_from_swipe(3, -10), Some(Direction::Up));
        // Tie goes to the vertical axis.
        assert_eq!(direction_from_swipe(5, 5), Some(Direction::Down));
        assert_eq!(direction_from_swipe(5, -5), Some(Direction::Up));
    }

    #[test]
    fn zero_drag_decodes_to_nothing() {
        assert_eq!(direction_from_swipe(0, 0), None);
    }

    #[test]
    fn keys_map_to_directions_and_controls() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Char('a')),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameInput::Pause));
        assert_eq!(map_key(KeyCode::Enter), Some(GameInput::Confirm));
        assert_eq!(map_key(KeyCode::Esc), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}

use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::Direction;

/// Ordered sequence of occupied cells, head at the front.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a snake of `length` segments with the body extending
    /// opposite the direction of travel.
    #[must_use]
    pub fn new(head: Cell, facing: Direction, length: usize) -> Self {
        debug_assert!(length >= 1);

        let tailward = facing.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.step(tailward);
        }

        Self { body }
    }

    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the head translated one grid step in `direction`.
    #[must_use]
    pub fn peek_move(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Prepends a new head. Every tick does this unconditionally before
    /// deciding whether the tail also comes off.
    pub fn grow_head(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
    }

    /// Removes the last segment, producing the illusion of forward
    /// movement at constant length. Skipped on the tick food was eaten.
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    ///
    /// The scan covers the full body including a tail that has not been
    /// dropped yet, so moving onto the cell the tail is about to vacate
    /// still counts as a hit.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;
    use crate::input::Direction;

    use super::Snake;

    #[test]
    fn new_snake_extends_opposite_the_facing_direction() {
        let snake = Snake::new(Cell { x: 5, y: 5 }, Direction::Right, 3);

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Cell { x: 5, y: 5 },
                Cell { x: 4, y: 5 },
                Cell { x: 3, y: 5 },
            ]
        );
    }

    #[test]
    fn grow_then_drop_moves_without_changing_length() {
        let mut snake = Snake::new(Cell { x: 5, y: 5 }, Direction::Right, 3);

        let next = snake.peek_move(Direction::Right);
        snake.grow_head(next);
        snake.drop_tail();

        assert_eq!(snake.head(), Cell { x: 6, y: 5 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.contains(Cell { x: 3, y: 5 }));
    }

    #[test]
    fn grow_without_drop_keeps_the_old_tail() {
        let mut snake = Snake::new(Cell { x: 5, y: 5 }, Direction::Right, 3);

        snake.grow_head(Cell { x: 6, y: 5 });

        assert_eq!(snake.len(), 4);
        assert!(snake.contains(Cell { x: 3, y: 5 }));
    }

    #[test]
    fn head_overlap_counts_the_undropped_tail() {
        // Head moved onto the tail cell before the tail came off.
        let snake = Snake::from_segments(vec![
            Cell { x: 1, y: 0 },
            Cell { x: 1, y: 1 },
            Cell { x: 0, y: 1 },
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
        ]);

        assert!(snake.head_overlaps_body());
    }

    #[test]
    fn head_alone_never_overlaps_itself() {
        let snake = Snake::new(Cell { x: 2, y: 2 }, Direction::Up, 1);
        assert!(!snake.head_overlaps_body());
    }
}

use rand::Rng;

use crate::grid::{Board, Cell};
use crate::snake::Snake;

/// Draws uniformly random cells until one is free of the snake.
///
/// Returns `None` when the snake covers the whole board; the caller
/// treats that as the win condition. The rejection loop is guaranteed to
/// terminate for any board with at least one free cell.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Option<Cell> {
    if snake.len() >= board.total_cells() {
        return None;
    }

    loop {
        let cell = Cell {
            x: rng.gen_range(0..i32::from(board.cols)),
            y: rng.gen_range(0..i32::from(board.rows)),
        };
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::{Board, Cell};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::place;

    #[test]
    fn food_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board { cols: 8, rows: 6 };
        let snake = Snake::from_segments(vec![
            Cell { x: 2, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 0, y: 0 },
        ]);

        for _ in 0..200 {
            let cell = place(&mut rng, board, &snake).expect("board has free cells");
            assert!(board.contains(cell));
            assert!(!snake.contains(cell));
        }
    }

    #[test]
    fn full_board_returns_none_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board { cols: 2, rows: 2 };
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 1, y: 1 },
            Cell { x: 0, y: 1 },
        ]);

        assert_eq!(place(&mut rng, board, &snake), None);
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(99);
        let board = Board { cols: 2, rows: 2 };
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 1, y: 1 },
        ]);

        assert_eq!(
            place(&mut rng, board, &snake),
            Some(Cell { x: 0, y: 1 })
        );
    }

    #[test]
    fn same_seed_yields_the_same_sequence() {
        let board = Board { cols: 12, rows: 9 };
        let snake = Snake::new(Cell { x: 6, y: 4 }, Direction::Right, 3);

        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                place(&mut first, board, &snake),
                place(&mut second, board, &snake)
            );
        }
    }
}

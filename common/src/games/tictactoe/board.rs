use super::error::BoardError;
use super::types::{Cell, Position};

pub const BOARD_SIZE: usize = 3;

/// Fixed-size grid of cells, indexed as `cells[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE, BOARD_SIZE)
    }
}

impl Board {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Empty; width]; height],
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn from_values(rows: &[[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::default();
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                board.cells[y][x] = match value {
                    1 => Cell::PlayerOne,
                    -1 => Cell::PlayerTwo,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn position(&self, x: isize, y: isize) -> Result<Position, BoardError> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Position::new(x as usize, y as usize))
    }

    pub fn get(&self, x: isize, y: isize) -> Result<Cell, BoardError> {
        let pos = self.position(x, y)?;
        Ok(self.cells[pos.y][pos.x])
    }

    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> Result<(), BoardError> {
        let pos = self.position(x, y)?;
        self.cells[pos.y][pos.x] = cell;
        Ok(())
    }

    /// Unchecked read for callers that iterate within `width`/`height`.
    pub(crate) fn at(&self, pos: Position) -> Cell {
        self.cells[pos.y][pos.x]
    }

    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_then_get_returns_written_value_for_every_cell() {
        let mut board = Board::default();
        for y in 0..3 {
            for x in 0..3 {
                for cell in [Cell::PlayerOne, Cell::PlayerTwo, Cell::Empty] {
                    board.set(x, y, cell).unwrap();
                    assert_eq!(board.get(x, y).unwrap(), cell);
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reports_error_and_leaves_board_unchanged() {
        let mut board = Board::from_values(&[[1, 0, -1], [0, 1, 0], [-1, 0, 0]]);
        let snapshot = board.clone();

        for (x, y) in [(3, 0), (0, 3), (3, 3), (-1, 0), (0, -1), (-1, -1), (100, 1)] {
            assert!(matches!(board.get(x, y), Err(BoardError::OutOfBounds { .. })));
            assert!(matches!(
                board.set(x, y, Cell::PlayerTwo),
                Err(BoardError::OutOfBounds { .. })
            ));
        }

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_one_past_the_end_is_rejected() {
        let board = Board::default();
        assert!(board.get(2, 2).is_ok());
        assert!(board.get(3, 2).is_err());
        assert!(board.get(2, 3).is_err());
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut board = Board::from_values(&[[1, 1, -1], [-1, -1, 1], [1, -1, 1]]);
        assert!(board.is_full());

        board.clear();

        assert_eq!(board, Board::default());
        assert_eq!(board.width(), 3);
    }
}

use super::Seat;
use crate::error::GameError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Smallest dimension on which four in a row is possible.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Seat),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn seat(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(seat) => Some(seat),
        }
    }
}

/// Occupancy grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(GameError::InvalidDimension { height, width });
        }
        let invalid = GameError::InvalidDimension { height, width };
        let cell_count = height.checked_mul(width).ok_or(invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count).map_err(|_| invalid)?;
        cells.resize(cell_count, Cell::Empty);

        Ok(Board {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Get the cell at a specific position
    pub fn occupant_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Bounds-checked lookup taking signed coordinates; anything off the
    /// board is `None`.
    pub(crate) fn get(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Find the bottommost empty row in a column, or `None` when the column
    /// is full
    pub fn lowest_open_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_empty()))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, GameError> {
        Ok(self.lowest_open_row(col)?.is_none())
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| self.cells[self.index(0, col)].is_empty())
            .collect()
    }

    /// Mark a cell as occupied by `seat`. The target must be empty and must
    /// rest on the bottom edge or on an occupied cell.
    pub fn place(&mut self, row: usize, col: usize, seat: Seat) -> Result<(), GameError> {
        self.check_bounds(row, col)?;

        let idx = self.index(row, col);
        let floating = row + 1 < self.height && self.cells[self.index(row + 1, col)].is_empty();
        if !self.cells[idx].is_empty() || floating {
            return Err(GameError::IllegalWrite { row, column: col });
        }

        self.cells[idx] = Cell::Occupied(seat);
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn check_column(&self, col: usize) -> Result<(), GameError> {
        if col >= self.width {
            return Err(GameError::OutOfRange {
                index: col,
                limit: self.width,
            });
        }
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GameError> {
        if row >= self.height {
            return Err(GameError::OutOfRange {
                index: row,
                limit: self.height,
            });
        }
        self.check_column(col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![Cell::Empty; DEFAULT_HEIGHT * DEFAULT_WIDTH],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_piece(board: &mut Board, col: usize, seat: Seat) -> usize {
        let row = board.lowest_open_row(col).unwrap().unwrap();
        board.place(row, col, seat).unwrap();
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.height(), 6);
        assert_eq!(board.width(), 7);
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.occupant_at(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(2, 2),
            Err(GameError::InvalidDimension {
                height: 2,
                width: 2
            })
        );
        assert!(Board::new(3, 7).is_err());
        assert!(Board::new(6, 3).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert_eq!(
            Board::new(usize::MAX / 2, 4),
            Err(GameError::InvalidDimension {
                height: usize::MAX / 2,
                width: 4
            })
        );
        assert!(Board::new(4, usize::MAX).is_err());
    }

    #[test]
    fn test_pieces_stack_from_the_bottom() {
        let mut board = Board::default();

        let row = drop_piece(&mut board, 3, Seat::First);
        assert_eq!(row, 5);
        assert_eq!(board.occupant_at(5, 3).unwrap(), Cell::Occupied(Seat::First));

        let row = drop_piece(&mut board, 3, Seat::Second);
        assert_eq!(row, 4);
        assert_eq!(board.occupant_at(4, 3).unwrap(), Cell::Occupied(Seat::Second));
    }

    #[test]
    fn test_column_full_after_height_drops() {
        for (height, width) in [(4, 4), (6, 7), (9, 5)] {
            let mut board = Board::new(height, width).unwrap();
            for col in 0..width {
                for _ in 0..height {
                    drop_piece(&mut board, col, Seat::First);
                }
                assert_eq!(board.lowest_open_row(col).unwrap(), None);
                assert!(board.is_column_full(col).unwrap());
            }
        }
    }

    #[test]
    fn test_out_of_range_column() {
        let board = Board::default();
        assert_eq!(
            board.lowest_open_row(7),
            Err(GameError::OutOfRange { index: 7, limit: 7 })
        );
        assert!(board.occupant_at(0, 7).is_err());
        assert!(board.occupant_at(6, 0).is_err());
    }

    #[test]
    fn test_place_into_occupied_cell_is_illegal() {
        let mut board = Board::default();
        drop_piece(&mut board, 0, Seat::First);
        assert_eq!(
            board.place(5, 0, Seat::Second),
            Err(GameError::IllegalWrite { row: 5, column: 0 })
        );
        assert_eq!(board.occupant_at(5, 0).unwrap(), Cell::Occupied(Seat::First));
    }

    #[test]
    fn test_place_floating_piece_is_illegal() {
        let mut board = Board::default();
        assert_eq!(
            board.place(2, 4, Seat::First),
            Err(GameError::IllegalWrite { row: 2, column: 4 })
        );
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 5).unwrap();
        for col in 0..5 {
            for _ in 0..4 {
                drop_piece(&mut board, col, Seat::Second);
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.occupied_count(), board.cell_count());
    }

    #[test]
    fn test_legal_columns_skip_full_ones() {
        let mut board = Board::new(4, 4).unwrap();
        for _ in 0..4 {
            drop_piece(&mut board, 1, Seat::First);
        }
        assert_eq!(board.legal_columns(), vec![0, 2, 3]);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut board = Board::new(5, 9).unwrap();
        drop_piece(&mut board, 8, Seat::First);
        board.clear();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!((board.height(), board.width()), (5, 9));
        assert_eq!(board.lowest_open_row(8).unwrap(), Some(4));
    }

    #[test]
    fn test_signed_get_is_bounds_checked() {
        let board = Board::default();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
        assert_eq!(board.get(5, 6), Some(Cell::Empty));
    }
}

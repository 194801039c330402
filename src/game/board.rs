use super::Player;
use crate::error::MoveError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `height` x `width` grid of cells, stored row-major.
///
/// Row 0 is the top and row `height - 1` the bottom; pieces settle at the
/// lowest empty row of their column, so occupied cells in a column are always
/// a contiguous run ending at the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, or `None` when it is off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cell(row, col).unwrap_or(Cell::Empty)
    }

    /// Lowest empty row in `col`, or `None` if the column is full or off the board.
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty())
    }

    /// Put `player`'s piece at (row, col). The cell must be empty.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        match self.cell(row, col) {
            None => Err(MoveError::OutOfBounds { row, column: col }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied { row, column: col }),
            Some(Cell::Empty) => {
                self.cells[row * self.width + col] = player.to_cell();
                Ok(())
            }
        }
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_landing_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        let row = self
            .find_landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.place(row, col, player)?;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Build a board from text rows, top row first: `.` empty, `X` player one, `O` player two.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut board = Board::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "ragged row {row}");
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.place(row, col, Player::One).unwrap(),
                    'O' => board.place(row, col, Player::Two).unwrap(),
                    '.' => {}
                    other => panic!("unexpected cell {other:?}"),
                }
            }
        }
        board
    }

    /// Left/right mirror image of this board.
    #[cfg(test)]
    pub(crate) fn mirrored(&self) -> Self {
        let mut board = Board::new(self.width, self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                if let Cell::Occupied(player) = self.get(row, col) {
                    board.place(row, self.width - 1 - col, player).unwrap();
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..DEFAULT_HEIGHT {
            for col in 0..DEFAULT_WIDTH {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_landing_row_fills_bottom_up() {
        let mut board = Board::new(4, 5);
        assert_eq!(board.find_landing_row(2), Some(4));

        for expected in (0..5).rev() {
            let row = board.find_landing_row(2).unwrap();
            assert_eq!(row, expected);
            board.place(row, 2, Player::One).unwrap();
        }

        assert_eq!(board.find_landing_row(2), None);
        assert!(board.is_column_full(2));
    }

    #[test]
    fn test_landing_row_does_not_mutate() {
        let board = Board::default();
        let before = board.clone();
        let _ = board.find_landing_row(3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_landing_row_out_of_range() {
        let board = Board::default();
        assert_eq!(board.find_landing_row(7), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Occupied(Player::One));

        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..DEFAULT_HEIGHT {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::default();
        board.place(5, 1, Player::One).unwrap();

        assert_eq!(
            board.place(5, 1, Player::Two),
            Err(MoveError::CellOccupied { row: 5, column: 1 })
        );
        assert_eq!(board.get(5, 1), Cell::Occupied(Player::One));
        assert_eq!(
            board.place(6, 0, Player::Two),
            Err(MoveError::OutOfBounds { row: 6, column: 0 })
        );
        assert_eq!(board.cell(6, 0), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..DEFAULT_WIDTH {
            for _ in 0..DEFAULT_HEIGHT {
                assert!(!board.is_full());
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), 42);
    }

    #[test]
    fn test_gravity_invariant_under_random_play() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let width = rng.random_range(1..=9);
            let height = rng.random_range(1..=8);
            let mut board = Board::new(width, height);
            let mut player = Player::One;

            for _ in 0..rng.random_range(0..=width * height) {
                let col = rng.random_range(0..width);
                if board.drop_piece(col, player).is_ok() {
                    player = player.other();
                }

                for col in 0..width {
                    let first_occupied = (0..height).find(|&row| !board.get(row, col).is_empty());
                    if let Some(top) = first_occupied {
                        assert!(
                            (top..height).all(|row| !board.get(row, col).is_empty()),
                            "gap below row {top} in column {col}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_rows_and_mirror() {
        let board = Board::from_rows(&["...", "X.O"]);
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.get(1, 0), Cell::Occupied(Player::One));

        let mirrored = board.mirrored();
        assert_eq!(mirrored.get(1, 0), Cell::Occupied(Player::Two));
        assert_eq!(mirrored.get(1, 2), Cell::Occupied(Player::One));
        assert_eq!(mirrored.mirrored(), board);
    }
}

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::PlaceError;

use super::mark::Mark;

/// Side length of the board.
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

// The 8 canonical winning lines: 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[(usize, usize); GRID_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The 3x3 playing grid.
///
/// Each cell holds `Option<Mark>`, where `None` means the cell is empty.
/// The board is owned by the caller (the surrounding game loop) and mutated
/// in place; the search layer only ever mutates a scratch clone.
///
/// Win detection is a pure function of the current grid contents, recomputed
/// on demand over the 8 canonical lines. There is no incremental tracking;
/// at this board size a full scan is cheaper than keeping counters honest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; GRID_SIZE]; GRID_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "XX./OO./..." (row-major, '/' between rows, '.' for empty)
        let mut s = String::with_capacity(CELL_COUNT + GRID_SIZE - 1);
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                s.push('/');
            }
            for cell in cells {
                s.push(cell.map_or('.', Mark::as_char));
            }
        }
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != GRID_SIZE {
            return Err(serde::de::Error::custom(format!(
                "expected {} '/'-separated rows, got {}",
                GRID_SIZE,
                rows.len()
            )));
        }

        let mut board = Self::EMPTY;
        for (row, row_str) in rows.iter().enumerate() {
            let cells: Vec<char> = row_str.chars().collect();
            if cells.len() != GRID_SIZE {
                return Err(serde::de::Error::custom(format!(
                    "expected {} cells in row {row}, got {}",
                    GRID_SIZE,
                    cells.len()
                )));
            }
            for (col, ch) in cells.iter().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Some(Mark::X),
                    'O' => Some(Mark::O),
                    '.' => None,
                    _ => {
                        return Err(serde::de::Error::custom(format!(
                            "invalid cell character {ch:?} at ({row}, {col})"
                        )));
                    }
                };
            }
        }
        Ok(board)
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[None; GRID_SIZE]; GRID_SIZE],
    };

    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Sets every cell back to empty.
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Returns the mark at the given cell, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    /// Checks whether a cell holds no mark.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Places `mark` at the given cell.
    ///
    /// Rejects out-of-range coordinates and occupied cells; a rejected
    /// placement leaves the board unchanged.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), PlaceError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PlaceError::OutOfBounds { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(PlaceError::CellOccupied { row, col });
        }
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Retracts whatever mark is at the given cell, restoring it to empty.
    ///
    /// The search layer uses this to undo trial placements.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    /// Checks whether no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Checks whether any of the 8 winning lines is uniformly `mark`.
    #[must_use]
    pub fn has_won(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.cells[row][col] == Some(mark)))
    }

    /// Returns the winning mark, if either mark has completed a line.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|&mark| self.has_won(mark))
    }

    /// Checks whether the round can continue: a win for either mark or a
    /// full board is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Returns the coordinates of all empty cells in row-major order
    /// (row 0 to 2, then column 0 to 2 within each row).
    ///
    /// The ordering is part of the contract: move selection resolves ties
    /// by first cell in this order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut cells = ArrayVec::new();
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                if cell.is_none() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// 'X' and 'O' place the corresponding mark, '.' leaves the cell empty;
    /// all other characters are ignored. Rows are specified top to bottom.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert_eq!(
            lines.len(),
            GRID_SIZE,
            "expected {GRID_SIZE} rows, got {}",
            lines.len()
        );

        let mut board = Self::EMPTY;
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line
                .chars()
                .filter(|c| matches!(c, 'X' | 'O' | '.'))
                .collect();
            assert_eq!(
                chars.len(),
                GRID_SIZE,
                "each row must have exactly {GRID_SIZE} cells, got {} at row {row}",
                chars.len()
            );
            for (col, &ch) in chars.iter().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Some(Mark::X),
                    'O' => Some(Mark::O),
                    _ => None,
                };
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                assert!(board.is_cell_empty(row, col));
            }
        }
        assert!(!board.is_full());
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::new();
        board.place(1, 2, Mark::X).unwrap();
        assert_eq!(board.cell(1, 2), Some(Mark::X));
        assert!(!board.is_cell_empty(1, 2));
        assert!(board.is_cell_empty(2, 1));
    }

    #[test]
    fn test_place_out_of_bounds_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Mark::X),
            Err(PlaceError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, Mark::X),
            Err(PlaceError::OutOfBounds { row: 0, col: 7 })
        );
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        assert_eq!(
            board.place(0, 0, Mark::O),
            Err(PlaceError::CellOccupied { row: 0, col: 0 })
        );
        // The rejected placement must not overwrite the cell
        assert_eq!(board.cell(0, 0), Some(Mark::X));
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        board.place(2, 2, Mark::O).unwrap();
        board.clear(2, 2);
        assert!(board.is_cell_empty(2, 2));
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::from_ascii(
            r"
            XO.
            .X.
            ..O
            ",
        );
        board.reset();
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_ascii(
            r"
            X..
            X..
            X..
            ",
        );
        assert!(board.has_won(Mark::X));
        assert!(!board.has_won(Mark::O));
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_ascii(
            r"
            ...
            OOO
            ...
            ",
        );
        assert!(board.has_won(Mark::O));
        assert_eq!(board.winner(), Some(Mark::O));
    }

    #[test]
    fn test_diagonal_wins() {
        let main_diagonal = Board::from_ascii(
            r"
            X..
            .X.
            ..X
            ",
        );
        assert!(main_diagonal.has_won(Mark::X));

        let anti_diagonal = Board::from_ascii(
            r"
            ..O
            .O.
            O..
            ",
        );
        assert!(anti_diagonal.has_won(Mark::O));
    }

    #[test]
    fn test_no_win_on_broken_line() {
        let board = Board::from_ascii(
            r"
            XXO
            OXX
            XOO
            ",
        );
        assert!(!board.has_won(Mark::X));
        assert!(!board.has_won(Mark::O));
        assert_eq!(board.winner(), None);
        // Full board with no winner is a draw, still terminal
        assert!(board.is_full());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_win_is_exclusive_in_reachable_positions() {
        // Reached by alternating play: X wins on row 0 before O can finish
        let board = Board::from_ascii(
            r"
            XXX
            OO.
            ...
            ",
        );
        assert!(board.has_won(Mark::X));
        assert!(!board.has_won(Mark::O));
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let board = Board::from_ascii(
            r"
            X.O
            ...
            .X.
            ",
        );
        let cells: Vec<_> = board.empty_cells().into_iter().collect();
        assert_eq!(cells, [(0, 1), (1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_is_full_transitions() {
        let mut board = Board::from_ascii(
            r"
            XOX
            OXO
            OX.
            ",
        );
        assert!(!board.is_full());
        board.place(2, 2, Mark::X).unwrap();
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_ascii(
            r"
            XX.
            OO.
            ...
            ",
        );
        let serialized = serde_json::to_string(&board).unwrap();
        assert_eq!(serialized, "\"XX./OO./...\"");

        let deserialized: Board = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, board);
    }

    #[test]
    fn test_board_deserialization_rejects_malformed_input() {
        assert!(serde_json::from_str::<Board>("\"XX./OO.\"").is_err());
        assert!(serde_json::from_str::<Board>("\"XXXX/OO./...\"").is_err());
        assert!(serde_json::from_str::<Board>("\"XX?/OO./...\"").is_err());
    }
}

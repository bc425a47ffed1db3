use std::fmt;

use super::player::Player;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column visiting order: center first, then alternating outward.
pub const CENTER_OUT: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn glyph(self) -> char {
        self.owner().map_or('.', Player::glyph)
    }
}

/// A 6x7 gravity board. Row 0 is the top, row 5 is the bottom.
///
/// `Board` is `Copy`: every placement produces a new value and leaves the
/// original untouched, so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Parse a board from six rows of glyphs, top row first.
    ///
    /// `.` is empty, `X` is Red and `O` is Yellow. The result must satisfy
    /// gravity: no piece may sit above an empty cell.
    pub fn from_rows(rows: &[&str; ROWS]) -> Result<Self, BoardParseError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != COLS {
                return Err(BoardParseError::RowLength {
                    row,
                    len: glyphs.len(),
                    expected: COLS,
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                cells[row][col] = match glyph {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Red,
                    'O' | 'o' => Cell::Yellow,
                    _ => return Err(BoardParseError::UnknownGlyph { glyph, row, col }),
                };
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if cells[row][col] != Cell::Empty && cells[row + 1][col] == Cell::Empty {
                    return Err(BoardParseError::Floating { row, col });
                }
            }
        }

        Ok(Board { cells })
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on, or `None` if the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece for `player` into `col`.
    ///
    /// Returns the new board and the row where the piece landed; `self` is
    /// never modified.
    pub fn drop_piece(&self, col: usize, player: Player) -> Result<(Board, usize), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        Ok((self.with_piece(row, col, player), row))
    }

    /// Copy of the board with `(row, col)` set to `player`.
    ///
    /// Callers must pass the landing row of `col`; the move generator is the
    /// only producer of such coordinates.
    pub(crate) fn with_piece(&self, row: usize, col: usize, player: Player) -> Board {
        debug_assert_eq!(self.landing_row(col), Some(row));
        let mut next = *self;
        next.cells[row][col] = player.to_cell();
        next
    }

    /// Columns that can still take a piece, in center-out order.
    pub fn legal_columns(&self) -> Vec<usize> {
        CENTER_OUT
            .iter()
            .copied()
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of empty cells left.
    pub fn empty_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row][col].glyph())?;
            }
            writeln!(f)?;
        }
        write!(f, "1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.get(row, col) != Cell::Empty {
                    assert_ne!(
                        board.get(row + 1, col),
                        Cell::Empty,
                        "floating piece at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.empty_cells(), ROWS * COLS);
    }

    #[test]
    fn test_drop_piece() {
        let board = Board::new();

        let (board, row) = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        let (board, row) = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_piece_does_not_mutate_input() {
        let (original, _) = Board::new().drop_piece(2, Player::Red).unwrap();
        let snapshot = original;
        let (next, _) = original.drop_piece(2, Player::Yellow).unwrap();
        assert_eq!(original, snapshot);
        assert_ne!(original, next);
    }

    #[test]
    fn test_drop_changes_exactly_one_cell() {
        let (before, _) = Board::new().drop_piece(4, Player::Red).unwrap();
        let (after, row) = before.drop_piece(4, Player::Yellow).unwrap();
        let mut changed = 0;
        for r in 0..ROWS {
            for c in 0..COLS {
                if before.get(r, c) != after.get(r, c) {
                    changed += 1;
                    assert_eq!((r, c), (row, 4));
                    assert_eq!(before.get(r, c), Cell::Empty);
                }
            }
        }
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_gravity_holds_for_dropped_boards() {
        let mut board = Board::new();
        let sequence = [3, 3, 2, 4, 4, 4, 0, 6, 6, 1, 3, 5, 5, 5, 5];
        for (i, &col) in sequence.iter().enumerate() {
            let player = if i % 2 == 0 { Player::Red } else { Player::Yellow };
            board = board.drop_piece(col, player).unwrap().0;
            assert_gravity(&board);
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board = board.drop_piece(0, Player::Red).unwrap().0;
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert!(!board.legal_columns().contains(&0));
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn(7))
        );
    }

    #[test]
    fn test_legal_columns_center_out() {
        assert_eq!(Board::new().legal_columns(), vec![3, 2, 4, 1, 5, 0, 6]);

        let mut board = Board::new();
        for _ in 0..ROWS {
            board = board.drop_piece(3, Player::Red).unwrap().0;
            board = board.drop_piece(5, Player::Yellow).unwrap().0;
        }
        assert_eq!(board.legal_columns(), vec![2, 4, 1, 0, 6]);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board = board.drop_piece(col, Player::Red).unwrap().0;
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.empty_cells(), 0);
    }

    #[test]
    fn test_from_rows_and_display() {
        let board = Board::from_rows(&[
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . O . . .",
            "X X . X O . .",
        ])
        .unwrap();
        assert_eq!(board.get(5, 0), Cell::Red);
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.empty_cells(), 37);

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[5], "X X . X O . .");
        assert_eq!(lines[6], "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let err = Board::from_rows(&[
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . X . . . .",
            ". . . . . . .",
        ])
        .unwrap_err();
        assert_eq!(err, BoardParseError::Floating { row: 4, col: 2 });
    }

    #[test]
    fn test_from_rows_rejects_bad_rows() {
        let err = Board::from_rows(&[
            ". . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
        ])
        .unwrap_err();
        assert!(matches!(err, BoardParseError::RowLength { row: 0, len: 6, .. }));

        let err = Board::from_rows(&[
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . Z . . .",
        ])
        .unwrap_err();
        assert!(matches!(err, BoardParseError::UnknownGlyph { glyph: 'Z', .. }));
    }
}

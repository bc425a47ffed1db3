use super::board::{Board, CENTER_OUT};
use super::player::Player;

/// A legal placement: the column chosen and the row gravity resolves it to.
///
/// Only [`MoveGen`] builds moves, so every `Move` lands on top of its column.
///
/// ```compile_fail
/// use minimax_connect_four::game::{Move, Player};
/// let floating = Move { row: 0, column: 0, player: Player::Red };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    row: usize,
    column: usize,
    player: Player,
}

impl Move {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// New board with this move applied. The input board is left unchanged.
    pub fn apply(&self, board: &Board) -> Board {
        board.with_piece(self.row, self.column, self.player)
    }
}

/// Lazy center-out enumeration of legal moves for one player.
pub struct MoveGen<'a> {
    board: &'a Board,
    player: Player,
    next: usize,
}

impl<'a> MoveGen<'a> {
    pub fn new(board: &'a Board, player: Player) -> Self {
        MoveGen {
            board,
            player,
            next: 0,
        }
    }
}

impl Iterator for MoveGen<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while self.next < CENTER_OUT.len() {
            let column = CENTER_OUT[self.next];
            self.next += 1;
            if let Some(row) = self.board.landing_row(column) {
                return Some(Move {
                    row,
                    column,
                    player: self.player,
                });
            }
        }
        None
    }
}

/// Legal moves for `player` on `board`, center column first.
pub fn generate(board: &Board, player: Player) -> MoveGen<'_> {
    MoveGen::new(board, player)
}

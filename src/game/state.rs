use super::lines::has_four;
use super::{Board, Player, COLS, ROWS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with `first` to move.
    pub fn initial(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pieces placed so far.
    pub fn move_count(&self) -> usize {
        ROWS * COLS - self.board.empty_cells()
    }

    /// Legal columns in center-out order; empty once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (board, _row) = self.board.drop_piece(column, self.current_player)?;

        let outcome = if has_four(&board, self.current_player) {
            Some(GameOutcome::Winner(self.current_player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(Player::Red);
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![3, 2, 4, 1, 5, 0, 6]);
        assert_eq!(state.move_count(), 0);

        let state = GameState::initial(Player::Yellow);
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial(Player::Red);
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        assert_eq!(new_state.move_count(), 1);
        // Original untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial(Player::Red);

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial(Player::Red);
        for _ in 0..ROWS {
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn(9)));
    }

    #[test]
    fn test_draw() {
        // Columns filled in pairs so no four ever forms:
        // pattern per column from bottom: alternating, shifted every two columns.
        let mut state = GameState::initial(Player::Red);
        let order = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6, 6,
        ];

        for &col in &order {
            assert!(!state.is_terminal(), "game ended early at {}", state.move_count());
            state = state.apply_move(col).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}

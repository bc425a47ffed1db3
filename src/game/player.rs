use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Yellow];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Stable index for per-player tables.
    pub fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Yellow => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }

    /// Board glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Player::Red => 'X',
            Player::Yellow => 'O',
        }
    }
}

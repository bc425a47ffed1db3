//! Aligned-run detection over every 4-cell window of the board.
//!
//! A window is four consecutive positions along one of four directions. It
//! counts as a four when all cells share one owner, and as a three when
//! exactly three share an owner and the last cell is empty. Whether that empty
//! cell is playable right now is not checked.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Number of cells in a line.
pub const LINE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step between consecutive cells.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::Diagonal => 2,
            Direction::AntiDiagonal => 3,
        }
    }
}

/// Which kind of run to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLength {
    /// Three of one owner plus an empty cell.
    Three,
    /// Four of one owner.
    Four,
}

/// Per-player, per-direction run counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounts {
    counts: [[u32; 4]; 2],
}

impl RunCounts {
    pub fn count(&self, player: Player, direction: Direction) -> u32 {
        self.counts[player.index()][direction.index()]
    }

    pub fn total(&self, player: Player) -> u32 {
        self.counts[player.index()].iter().sum()
    }

    pub fn has_any(&self, player: Player) -> bool {
        self.total(player) > 0
    }

    fn record(&mut self, player: Player, direction: Direction) {
        self.counts[player.index()][direction.index()] += 1;
    }
}

/// The four cells starting at `(row, col)` along `direction`, or `None` if
/// the window leaves the board.
fn window(board: &Board, row: usize, col: usize, direction: Direction) -> Option<[Cell; LINE_LEN]> {
    let (dr, dc) = direction.step();
    let last_row = row as isize + dr * (LINE_LEN as isize - 1);
    let last_col = col as isize + dc * (LINE_LEN as isize - 1);
    if !(0..ROWS as isize).contains(&last_row) || !(0..COLS as isize).contains(&last_col) {
        return None;
    }

    let mut cells = [Cell::Empty; LINE_LEN];
    for (i, cell) in cells.iter_mut().enumerate() {
        let r = (row as isize + dr * i as isize) as usize;
        let c = (col as isize + dc * i as isize) as usize;
        *cell = board.get(r, c);
    }
    Some(cells)
}

/// Owner of the run held by `cells`, if it matches `length`.
fn classify(cells: &[Cell; LINE_LEN], length: RunLength) -> Option<Player> {
    let mut red = 0;
    let mut yellow = 0;
    let mut empty = 0;
    for cell in cells {
        match cell {
            Cell::Red => red += 1,
            Cell::Yellow => yellow += 1,
            Cell::Empty => empty += 1,
        }
    }

    match length {
        RunLength::Four if red == 4 => Some(Player::Red),
        RunLength::Four if yellow == 4 => Some(Player::Yellow),
        RunLength::Three if red == 3 && empty == 1 => Some(Player::Red),
        RunLength::Three if yellow == 3 && empty == 1 => Some(Player::Yellow),
        _ => None,
    }
}

/// Count every window matching `length`, split by owner and direction.
pub fn find_runs(board: &Board, length: RunLength) -> RunCounts {
    let mut counts = RunCounts::default();
    for row in 0..ROWS {
        for col in 0..COLS {
            for direction in Direction::ALL {
                if let Some(cells) = window(board, row, col, direction) {
                    if let Some(owner) = classify(&cells, length) {
                        counts.record(owner, direction);
                    }
                }
            }
        }
    }
    counts
}

/// Whether `player` holds four in a row anywhere on the board.
pub fn has_four(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    (0..ROWS).any(|row| {
        (0..COLS).any(|col| {
            board.get(row, col) == target
                && Direction::ALL.iter().any(|&direction| {
                    window(board, row, col, direction)
                        .is_some_and(|cells| cells.iter().all(|&c| c == target))
                })
        })
    })
}

/// The player holding four in a row, checking Red before Yellow.
pub fn winner(board: &Board) -> Option<Player> {
    Player::ALL.into_iter().find(|&p| has_four(board, p))
}

//! Static position scoring used at the search horizon.
//!
//! Scores are always computed *for* a named player. A decided position scores
//! exactly [`WIN_SCORE`] or [`LOSS_SCORE`]; anything else is a heuristic
//! estimate kept strictly inside that range so search bounds stay valid.

use crate::game::{find_runs, has_four, Board, Player, RunLength, COLS, ROWS};

/// Score of a position the evaluated player has won.
pub const WIN_SCORE: i32 = 100;

/// Score of a position the evaluated player has lost.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Largest magnitude a heuristic estimate may reach.
pub const HEURISTIC_LIMIT: i32 = WIN_SCORE - 1;

/// Points per open three-of-four pattern.
pub const DEFAULT_THREAT_WEIGHT: i32 = 5;

/// Positional value of each cell, row 0 at the top.
pub const CELL_WEIGHTS: [[i32; COLS]; ROWS] = [
    [1, 1, 2, 3, 2, 1, 1],
    [1, 2, 3, 4, 3, 2, 1],
    [1, 2, 4, 6, 4, 2, 1],
    [1, 3, 5, 7, 5, 3, 1],
    [1, 3, 5, 8, 5, 3, 1],
    [1, 3, 6, 9, 6, 3, 1],
];

/// Trait for estimating a non-terminal board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Open threes plus center-weighted occupancy.
///
/// `threat_weight * (own threes - opponent threes) + sum of CELL_WEIGHTS over own cells`.
#[derive(Debug, Clone)]
pub struct ThreatHeuristic {
    threat_weight: i32,
    cell_weights: [[i32; COLS]; ROWS],
}

impl ThreatHeuristic {
    pub fn new(threat_weight: i32) -> Self {
        ThreatHeuristic {
            threat_weight,
            cell_weights: CELL_WEIGHTS,
        }
    }

    pub fn with_cell_weights(threat_weight: i32, cell_weights: [[i32; COLS]; ROWS]) -> Self {
        ThreatHeuristic {
            threat_weight,
            cell_weights,
        }
    }
}

impl Default for ThreatHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_THREAT_WEIGHT)
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let threes = find_runs(board, RunLength::Three);
        let own = threes.total(player) as i32;
        let opp = threes.total(player.other()) as i32;
        let mut score = self.threat_weight.saturating_mul(own - opp);

        let own_cell = player.to_cell();
        for row in 0..ROWS {
            for col in 0..COLS {
                if board.get(row, col) == own_cell {
                    score = score.saturating_add(self.cell_weights[row][col]);
                }
            }
        }

        score
    }
}

/// Terminal check first, heuristic second.
pub struct Evaluator {
    heuristic: Box<dyn Heuristic>,
}

impl Evaluator {
    pub fn new(threat_weight: i32) -> Self {
        Evaluator {
            heuristic: Box::new(ThreatHeuristic::new(threat_weight)),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Evaluator { heuristic }
    }

    /// `Some(WIN_SCORE)` / `Some(LOSS_SCORE)` when the position is already
    /// decided for `for_player`. Both sides are checked, own win first.
    pub fn decisive(board: &Board, for_player: Player) -> Option<i32> {
        if has_four(board, for_player) {
            Some(WIN_SCORE)
        } else if has_four(board, for_player.other()) {
            Some(LOSS_SCORE)
        } else {
            None
        }
    }

    /// Score `board` for `for_player`.
    pub fn score(&self, board: &Board, for_player: Player) -> i32 {
        if let Some(decided) = Self::decisive(board, for_player) {
            return decided;
        }
        self.heuristic
            .evaluate(board, for_player)
            .clamp(-HEURISTIC_LIMIT, HEURISTIC_LIMIT)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_THREAT_WEIGHT)
    }
}

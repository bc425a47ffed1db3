//! Depth-limited game-tree search and the agent that drives it.
//!
//! Two strategies share one recursive shape:
//!
//! - **Minimax** visits every node down to the depth bound.
//! - **Alpha-beta** carries `(alpha, beta)` bounds and stops expanding a node
//!   once its value can no longer change the parent's choice.
//!
//! At every node the checks run in this order: depth exhausted (static
//! score), position already decided (±[`WIN_SCORE`]), then expansion over the
//! center-out move list with the mover alternating each ply. Both strategies
//! return the same value at the root; alpha-beta only does less work.

use log::{debug, info};

use super::agent::Agent;
use super::eval::{Evaluator, WIN_SCORE};
use crate::config::SearchConfig;
use crate::error::AgentError;
use crate::game::{generate, Board, Player};

/// Lower bound handed to the first alpha-beta call.
pub const ROOT_ALPHA: i32 = -2 * WIN_SCORE;

/// Upper bound handed to the first alpha-beta call.
pub const ROOT_BETA: i32 = 2 * WIN_SCORE;

/// Seed for a node's running best; one past the largest real score.
const UNBEATEN: i32 = WIN_SCORE + 1;

/// Default depth cap for plain minimax.
pub const MINIMAX_DEPTH: usize = 4;

/// Default depth cap for alpha-beta.
pub const ALPHA_BETA_DEPTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "Minimax",
            Strategy::AlphaBeta => "AlphaBeta",
        }
    }

    pub fn default_depth_cap(self) -> usize {
        match self {
            Strategy::Minimax => MINIMAX_DEPTH,
            Strategy::AlphaBeta => ALPHA_BETA_DEPTH,
        }
    }
}

/// Work counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Nodes scored without expanding: horizon, decided or full board
    pub leaves: u64,
    /// Early returns on a bound
    pub cutoffs: u64,
}

pub struct SearchEngine {
    strategy: Strategy,
    evaluator: Evaluator,
}

impl SearchEngine {
    pub fn new(strategy: Strategy, evaluator: Evaluator) -> Self {
        SearchEngine {
            strategy,
            evaluator,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Value of `board` for `perspective` with `mover` to act and `depth`
    /// plies left, using this engine's strategy.
    pub fn search(
        &self,
        board: &Board,
        perspective: Player,
        mover: Player,
        depth: usize,
        stats: &mut SearchStats,
    ) -> i32 {
        match self.strategy {
            Strategy::Minimax => self.minimax(board, perspective, mover, depth, stats),
            Strategy::AlphaBeta => self.alpha_beta(
                board,
                perspective,
                mover,
                depth,
                ROOT_ALPHA,
                ROOT_BETA,
                stats,
            ),
        }
    }

    /// Shared base cases. `Some` ends the recursion at this node.
    fn settle(
        &self,
        board: &Board,
        perspective: Player,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Option<i32> {
        stats.nodes += 1;
        if depth == 0 {
            stats.leaves += 1;
            return Some(self.evaluator.score(board, perspective));
        }
        if let Some(decided) = Evaluator::decisive(board, perspective) {
            stats.leaves += 1;
            return Some(decided);
        }
        if board.is_full() {
            // Drawn with depth to spare: score it as a horizon.
            stats.leaves += 1;
            return Some(self.evaluator.score(board, perspective));
        }
        None
    }

    pub fn minimax(
        &self,
        board: &Board,
        perspective: Player,
        mover: Player,
        depth: usize,
        stats: &mut SearchStats,
    ) -> i32 {
        if let Some(value) = self.settle(board, perspective, depth, stats) {
            return value;
        }

        let maximizing = mover == perspective;
        let mut best = if maximizing { -UNBEATEN } else { UNBEATEN };

        for mv in generate(board, mover) {
            let child = mv.apply(board);
            let value = self.minimax(&child, perspective, mover.other(), depth - 1, stats);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &self,
        board: &Board,
        perspective: Player,
        mover: Player,
        depth: usize,
        alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        if let Some(value) = self.settle(board, perspective, depth, stats) {
            return value;
        }

        if mover == perspective {
            let mut best = -UNBEATEN;
            for mv in generate(board, mover) {
                let child = mv.apply(board);
                let value =
                    self.alpha_beta(&child, perspective, mover.other(), depth - 1, best, beta, stats);
                best = best.max(value);
                if best >= beta {
                    stats.cutoffs += 1;
                    return best;
                }
            }
            best
        } else {
            let mut best = UNBEATEN;
            for mv in generate(board, mover) {
                let child = mv.apply(board);
                let value =
                    self.alpha_beta(&child, perspective, mover.other(), depth - 1, alpha, best, stats);
                best = best.min(value);
                if best <= alpha {
                    stats.cutoffs += 1;
                    return best;
                }
            }
            best
        }
    }
}

/// Outcome of a root search, with the score of every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub column: usize,
    pub score: i32,
    pub depth: usize,
    /// `(column, score)` in the order the columns were searched.
    pub candidates: Vec<(usize, i32)>,
    pub stats: SearchStats,
}

/// Agent that scores every first move with a [`SearchEngine`] and plays the best.
pub struct SearchAgent {
    engine: SearchEngine,
    depth_cap: usize,
}

impl SearchAgent {
    pub fn new(engine: SearchEngine, depth_cap: usize) -> Self {
        SearchAgent { engine, depth_cap }
    }

    /// Minimax with the default evaluator.
    pub fn minimax(depth_cap: usize) -> Self {
        Self::new(
            SearchEngine::new(Strategy::Minimax, Evaluator::default()),
            depth_cap,
        )
    }

    /// Alpha-beta with the default evaluator.
    pub fn alpha_beta(depth_cap: usize) -> Self {
        Self::new(
            SearchEngine::new(Strategy::AlphaBeta, Evaluator::default()),
            depth_cap,
        )
    }

    pub fn from_config(strategy: Strategy, config: &SearchConfig) -> Self {
        let depth_cap = match strategy {
            Strategy::Minimax => config.minimax_depth,
            Strategy::AlphaBeta => config.alpha_beta_depth,
        };
        Self::new(
            SearchEngine::new(strategy, Evaluator::new(config.threat_weight)),
            depth_cap,
        )
    }

    pub fn depth_cap(&self) -> usize {
        self.depth_cap
    }

    /// Search depth below the first ply: the cap, or fewer near the end of the game.
    pub fn depth_for(&self, board: &Board) -> usize {
        self.depth_cap.min(board.empty_cells())
    }

    /// Score every legal first move for `active` and pick the best.
    ///
    /// Ties keep the earliest candidate in center-out order.
    pub fn analyze(&self, board: &Board, active: Player) -> Result<Analysis, AgentError> {
        let depth = self.depth_for(board);
        let mut stats = SearchStats::default();
        let mut candidates = Vec::new();
        let mut best: Option<(usize, i32)> = None;

        for mv in generate(board, active) {
            let child = mv.apply(board);
            let value = self
                .engine
                .search(&child, active, active.other(), depth, &mut stats);
            debug!(
                "{} {}: column {} scores {}",
                self.engine.strategy().name(),
                active.name(),
                mv.column() + 1,
                value
            );
            candidates.push((mv.column(), value));
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((mv.column(), value));
            }
        }

        let (column, score) = best.ok_or(AgentError::NoLegalMove)?;
        info!(
            "{} plays column {} for {} (score {}, depth {}, {} nodes, {} cutoffs)",
            self.engine.strategy().name(),
            column + 1,
            active.name(),
            score,
            depth,
            stats.nodes,
            stats.cutoffs
        );

        Ok(Analysis {
            column,
            score,
            depth,
            candidates,
            stats,
        })
    }
}

impl Agent for SearchAgent {
    fn choose_move(&mut self, board: &Board, active: Player) -> Result<usize, AgentError> {
        self.analyze(board, active).map(|analysis| analysis.column)
    }

    fn name(&self) -> &str {
        self.engine.strategy().name()
    }
}

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::AgentError;
use crate::game::{Board, Player};

/// An agent that selects uniformly at random from legal columns.
///
/// The RNG is supplied by the caller so games can be replayed from a seed.
pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomAgent { rng }
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn choose_move(&mut self, board: &Board, _active: Player) -> Result<usize, AgentError> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return Err(AgentError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

use crate::config::SearchConfig;
use crate::error::AgentError;
use crate::game::{Board, Player};

use super::human::HumanAgent;
use super::random::RandomAgent;
use super::search::{SearchAgent, Strategy};

/// Universal interface for everything that can pick a column.
pub trait Agent {
    /// Choose a column for `active` on `board`.
    ///
    /// The returned column has at least one empty cell. Fails with
    /// [`AgentError::NoLegalMove`] when the board is full.
    fn choose_move(&mut self, board: &Board, active: Player) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which agent drives one side of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Human,
    Random,
    Minimax,
    AlphaBeta,
}

impl AgentKind {
    /// Build a boxed agent of this kind.
    ///
    /// `seed` only affects the random agent; without one it draws from the OS.
    pub fn build(self, search: &SearchConfig, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Human => Box::new(HumanAgent::stdio()),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::new()),
            },
            AgentKind::Minimax => Box::new(SearchAgent::from_config(Strategy::Minimax, search)),
            AgentKind::AlphaBeta => {
                Box::new(SearchAgent::from_config(Strategy::AlphaBeta, search))
            }
        }
    }

    /// Whether this kind needs a person at the keyboard.
    pub fn is_interactive(self) -> bool {
        matches!(self, AgentKind::Human)
    }
}

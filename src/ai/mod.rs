mod agent;
pub mod eval;
mod human;
mod random;
pub mod search;

pub use agent::{Agent, AgentKind};
pub use eval::{Evaluator, Heuristic, ThreatHeuristic, LOSS_SCORE, WIN_SCORE};
pub use human::HumanAgent;
pub use random::RandomAgent;
pub use search::{Analysis, SearchAgent, SearchEngine, SearchStats, Strategy};

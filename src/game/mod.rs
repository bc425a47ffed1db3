//! Core Connect Four game logic: board representation, player types, line
//! detection, move generation, and game state machine with immutable
//! transitions.

mod board;
pub mod lines;
pub mod moves;
mod player;
mod state;

pub use board::{Board, Cell, CENTER_OUT, COLS, ROWS};
pub use lines::{find_runs, has_four, winner, Direction, RunCounts, RunLength};
pub use moves::{generate, Move, MoveGen};
pub use player::Player;
pub use state::{GameOutcome, GameState};

//! # Minimax Connect Four
//!
//! Connect Four with automated players driven by depth-limited game-tree
//! search. Minimax and alpha-beta pruned minimax share one static evaluator
//! and one center-out move generator; human and random players sit behind the
//! same [`ai::Agent`] interface.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, line detection, move generation, game state
//! - [`ai`] — Agent trait, evaluator, search engine, human and random agents
//! - [`arena`] — Game loop between two agents and multi-game series
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;

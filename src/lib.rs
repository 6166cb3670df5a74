//! quadline: four-in-a-line on a 4x4 grid with pluggable players
//!
//! This crate provides:
//! - An immutable 4x4 game-state model with construction-time validation
//! - Minimax search with alpha-beta pruning and a sabotage (anti-minimax)
//!   variant that hunts for traps instead of wins
//! - Pluggable players: console human, random, minimax, sabotage
//! - A thin console frontend for interactive play

pub mod console;
pub mod engine;
pub mod error;
pub mod logic;
pub mod players;
pub mod search;

pub use error::{Error, Result};
pub use logic::{Cell, GameState, Grid, Mark, Move};
pub use search::{find_best_move, find_worst_move};

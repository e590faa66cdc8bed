//! Kalah rules.
//!
//! `Kalah` owns a board and the turn and is the only type that mutates
//! them:
//! - Selection checks
//! - Sowing and turn resolution
//! - End-of-game sweep and winner
//!
//! It is deterministic and does no locking; callers sharing a game
//! across threads go through a `GameRepository`.

pub mod engine;

pub use engine::{GamePhase, GameResult, Kalah, PitList, TurnOutcome};

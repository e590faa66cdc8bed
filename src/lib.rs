//! # kalah
//!
//! A six-pit, two-store Kalah engine and an in-memory game repository.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: Only `rules::Kalah` changes a board. Sowing,
//!    turn resolution, and the end-of-game sweep all go through it.
//!
//! 2. **Explicit Players**: `Player::One` / `Player::Two` carry their own
//!    pit ranges and store indices. No boolean turn flags.
//!
//! 3. **Injected Storage**: Hosts hold a `GameRepository`, not a global.
//!    The in-memory implementation serializes moves per game.
//!
//! ## Modules
//!
//! - `core`: Players, board geometry, sowing walk, configuration
//! - `rules`: The board engine and game results
//! - `repository`: Game ids, views, and the concurrent repository
//! - `error`: Error types
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod repository;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, GameConfig, Player, PlayerMap, Status};

pub use crate::error::{MoveError, RepositoryError, SnapshotError};

pub use crate::repository::{GameId, GameRepository, GameView, InMemoryRepository, MoveReport};

pub use crate::rules::{GamePhase, GameResult, Kalah, TurnOutcome};

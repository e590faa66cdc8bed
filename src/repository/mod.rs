//! Game repository: maps game ids to engines.
//!
//! A transport layer talks to games only through `GameRepository`:
//! - `create` allocates an id and a fresh engine
//! - `apply_move` sows from a 1-based pit number and reports the result
//! - `status` projects a game for display
//!
//! Implementations must serialize moves per game and allow `create` and
//! lookups from many threads at once.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::core::Status;
use crate::error::RepositoryError;
use crate::rules::GameResult;

pub use memory::InMemoryRepository;

/// Opaque game identifier assigned by a repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External representation of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub id: GameId,
    /// Display handle, `{base_url}/{id}`.
    pub uri: String,
    /// Pit number (1-14) to seed count.
    pub status: Status,
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The game as it stands after the move.
    pub game: GameView,
    /// True once the move emptied a side and the board was swept.
    pub game_over: bool,
    /// Final result, present only when `game_over` is set.
    pub winner: Option<GameResult>,
}

/// Store of live games, injected into whatever serves them.
pub trait GameRepository: Send + Sync {
    /// Start a new game and return its initial view.
    fn create(&self) -> GameView;

    /// Play `pit` (1-based, as supplied by the caller) in game `id`.
    ///
    /// Fails with `NotFound` for an unknown id and `InvalidMove` for a
    /// pit the current player cannot sow; both leave the game unchanged.
    fn apply_move(&self, id: GameId, pit: i64) -> Result<MoveReport, RepositoryError>;

    /// Current view of game `id`.
    fn status(&self, id: GameId) -> Result<GameView, RepositoryError>;
}

//! Error types for the engine and the game repository.

use crate::repository::GameId;

/// Errors returned when a move cannot be applied.
///
/// A rejected move never changes the board or the turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit index {0} is not a valid selection")]
    InvalidSelection(isize),

    #[error("pit {0} does not exist")]
    NoSuchPit(i64),

    #[error("game is over")]
    GameOver,
}

/// Errors returned by a [`GameRepository`](crate::repository::GameRepository).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("game {0} not found")]
    NotFound(GameId),

    #[error("invalid move in game {id}: pit {pit}")]
    InvalidMove {
        id: GameId,
        pit: i64,
        #[source]
        source: MoveError,
    },
}

/// Errors from encoding or decoding an engine snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),

    #[error("snapshot board is inconsistent: {0}")]
    Inconsistent(String),
}

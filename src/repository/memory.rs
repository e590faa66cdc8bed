//! In-memory game repository.
//!
//! Games live in a sharded concurrent map. Each entry is an
//! `Arc<Mutex<Kalah>>`: the map shard is held only long enough to clone
//! the handle, and the per-game mutex serializes moves on that game
//! without blocking other games.

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::FxHasher;
use tracing::{debug, info, warn};

use super::{GameId, GameRepository, GameView, MoveReport};
use crate::core::{GameConfig, MAX_SEEDS_PER_PIT, PIT_COUNT};
use crate::error::{MoveError, RepositoryError};
use crate::rules::Kalah;

type GameHandle = Arc<Mutex<Kalah>>;

/// Process-local repository backed by `DashMap`.
///
/// Ids are allocated from 0 upward by an atomic counter.
pub struct InMemoryRepository {
    config: GameConfig,
    next_id: AtomicU64,
    games: DashMap<GameId, GameHandle, BuildHasherDefault<FxHasher>>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    ///
    /// Panics if the configured seed count is 0 or above
    /// `MAX_SEEDS_PER_PIT`, so a bad config fails here rather than mid-game.
    pub fn new(config: GameConfig) -> Self {
        assert!(
            (1..=MAX_SEEDS_PER_PIT).contains(&config.seeds_per_pit),
            "seeds_per_pit must be between 1 and {}",
            MAX_SEEDS_PER_PIT
        );
        Self {
            config,
            next_id: AtomicU64::new(0),
            games: DashMap::with_hasher(BuildHasherDefault::default()),
        }
    }

    /// Configuration applied to new games.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of games currently held.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True if no games are held.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Check if a game exists.
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    /// Drop a game. Returns false if it did not exist.
    pub fn remove(&self, id: GameId) -> bool {
        let removed = self.games.remove(&id).is_some();
        if removed {
            debug!(game = %id, "removed game");
        }
        removed
    }

    /// Run `f` with exclusive access to game `id`.
    pub fn with_game<R>(&self, id: GameId, f: impl FnOnce(&mut Kalah) -> R) -> Result<R, RepositoryError> {
        let handle = self.handle(id)?;
        let mut game = handle.lock();
        Ok(f(&mut game))
    }

    fn handle(&self, id: GameId) -> Result<GameHandle, RepositoryError> {
        // Clone out of the shard so its lock is released before the game lock is taken.
        let handle = self.games.get(&id).map(|entry| Arc::clone(entry.value()));
        handle.ok_or_else(|| {
            warn!(game = %id, "game not found");
            RepositoryError::NotFound(id)
        })
    }

    fn view(&self, id: GameId, game: &Kalah) -> GameView {
        GameView {
            id,
            uri: self.config.display_handle(id),
            status: game.status(),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameRepository for InMemoryRepository {
    fn create(&self) -> GameView {
        let id = GameId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let game = Kalah::with_config(&self.config);
        let view = self.view(id, &game);
        self.games.insert(id, Arc::new(Mutex::new(game)));

        info!(game = %id, seeds_per_pit = self.config.seeds_per_pit, "created game");
        view
    }

    fn apply_move(&self, id: GameId, pit: i64) -> Result<MoveReport, RepositoryError> {
        let handle = self.handle(id)?;
        let mut game = handle.lock();

        let Some(selection) = pit
            .checked_sub(1)
            .and_then(|index| isize::try_from(index).ok())
            .filter(|index| (0..PIT_COUNT as isize).contains(index))
        else {
            return Err(rejected(id, pit, &game, MoveError::NoSuchPit(pit)));
        };
        if !game.is_valid_selection(selection) {
            let source = if game.is_over() {
                MoveError::GameOver
            } else {
                MoveError::InvalidSelection(selection)
            };
            return Err(rejected(id, pit, &game, source));
        }

        let outcome = game
            .take_turn(selection.unsigned_abs())
            .map_err(|source| RepositoryError::InvalidMove { id, pit, source })?;
        debug!(
            game = %id,
            player = %outcome.player,
            pit,
            last_pit = outcome.last_pit,
            extra_turn = outcome.extra_turn,
            "applied move"
        );

        let game_over = game.check_game_over();
        let winner = game_over.then(|| game.calculate_winner());
        if let Some(result) = winner {
            info!(game = %id, %result, "game over");
        }

        Ok(MoveReport {
            game: self.view(id, &game),
            game_over,
            winner,
        })
    }

    fn status(&self, id: GameId) -> Result<GameView, RepositoryError> {
        let handle = self.handle(id)?;
        let game = handle.lock();
        Ok(self.view(id, &game))
    }
}

fn rejected(id: GameId, pit: i64, game: &Kalah, source: MoveError) -> RepositoryError {
    warn!(game = %id, pit, player = %game.turn(), error = %source, "rejected move");
    RepositoryError::InvalidMove { id, pit, source }
}

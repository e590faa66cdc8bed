//! Core game types: players, board geometry, configuration.
//!
//! Nothing here knows whose turn it is; turn order and game phases live
//! in `rules`.

pub mod player;
pub mod board;
pub mod config;

pub use player::{Player, PlayerMap};
pub use board::{
    is_store, next_slot, Board, Status, DEFAULT_SEEDS_PER_PIT, MAX_SEEDS_PER_PIT, PITS_PER_SIDE, PIT_COUNT,
    PLAYER_ONE_STORE, PLAYER_TWO_STORE,
};
pub use config::{GameConfig, DEFAULT_BASE_URL};

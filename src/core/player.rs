//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Explicit two-variant identity. Each player owns six sowing pits and
//! one store; the geometry helpers here are the only place that maps a
//! player to board indices.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::board::{PITS_PER_SIDE, PLAYER_ONE_STORE, PLAYER_TWO_STORE};

/// One of the two players.
///
/// `One` owns pits 0-5 and the store at index 6, `Two` owns pits 7-12
/// and the store at index 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number as shown to users.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Slot index into per-player storage (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::One => PLAYER_ONE_STORE,
            Player::Two => PLAYER_TWO_STORE,
        }
    }

    /// Board indices of this player's six sowing pits.
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        let start = self.store() - PITS_PER_SIDE;
        start..self.store()
    }

    /// Check if `index` is one of this player's sowing pits.
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pits().contains(&index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use kalah::core::{Player, PlayerMap};
///
/// let mut totals: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// totals[Player::Two] += 5;
///
/// assert_eq!(totals[Player::One], 0);
/// assert_eq!(totals[Player::Two], 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

//! Board geometry and seed movement.
//!
//! ## Layout
//!
//! Fourteen slots walked anti-clockwise:
//! - `0..6`: Player 1's sowing pits
//! - `6`: Player 1's store
//! - `7..13`: Player 2's sowing pits
//! - `13`: Player 2's store
//!
//! Sowing is a walk over this ring that skips exactly one slot, the
//! sower's opponent store. Every other slot, including the sower's own
//! store, receives one seed per step.
//!
//! Seeds are only ever moved between slots, so `Board::total` is constant
//! for the lifetime of a game.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};

/// Number of slots on the board (12 pits + 2 stores).
pub const PIT_COUNT: usize = 14;

/// Number of sowing pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;

/// Board index of Player 1's store.
pub const PLAYER_ONE_STORE: usize = 6;

/// Board index of Player 2's store.
pub const PLAYER_TWO_STORE: usize = 13;

/// Seeds placed in every sowing pit of a standard game.
pub const DEFAULT_SEEDS_PER_PIT: u32 = 6;

/// Largest starting seed count whose board total still fits in a `u32`.
pub const MAX_SEEDS_PER_PIT: u32 = u32::MAX / (2 * PITS_PER_SIDE as u32);

/// The slot after `index` in a walk sown by `sower`.
///
/// Wraps from 13 back to 0 and passes over the opponent's store without
/// stopping on it.
///
/// ```
/// use kalah::core::{next_slot, Player};
///
/// assert_eq!(next_slot(5, Player::One), 6);
/// assert_eq!(next_slot(12, Player::One), 0);
/// assert_eq!(next_slot(12, Player::Two), 13);
/// assert_eq!(next_slot(5, Player::Two), 7);
/// ```
#[must_use]
pub const fn next_slot(index: usize, sower: Player) -> usize {
    let next = (index + 1) % PIT_COUNT;
    if next == sower.opponent().store() {
        (next + 1) % PIT_COUNT
    } else {
        next
    }
}

/// Check if `index` is one of the two stores.
#[must_use]
pub const fn is_store(index: usize) -> bool {
    index == PLAYER_ONE_STORE || index == PLAYER_TWO_STORE
}

/// The fourteen-slot pit array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u32; PIT_COUNT],
}

impl Board {
    /// Create a board with `seeds_per_pit` in every sowing pit and empty stores.
    #[must_use]
    pub fn new(seeds_per_pit: u32) -> Self {
        assert!(
            seeds_per_pit <= MAX_SEEDS_PER_PIT,
            "At most {} seeds per pit supported",
            MAX_SEEDS_PER_PIT
        );
        let mut pits = [seeds_per_pit; PIT_COUNT];
        pits[PLAYER_ONE_STORE] = 0;
        pits[PLAYER_TWO_STORE] = 0;
        Self { pits }
    }

    /// Create a board from raw slot contents.
    ///
    /// Used to set up positions directly (tests, snapshots).
    #[must_use]
    pub const fn from_pits(pits: [u32; PIT_COUNT]) -> Self {
        Self { pits }
    }

    /// Raw slot contents, indexed 0-13.
    #[must_use]
    pub const fn pits(&self) -> &[u32; PIT_COUNT] {
        &self.pits
    }

    /// Seeds in slot `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    /// Seeds in a player's store.
    #[must_use]
    pub const fn store(&self, player: Player) -> u32 {
        self.pits[player.store()]
    }

    /// Seeds remaining across a player's six sowing pits.
    #[must_use]
    pub fn side_total(&self, player: Player) -> u32 {
        self.pits[player.pits()].iter().sum()
    }

    /// Seeds on the whole board, stores included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Empty slot `from` and sow its seeds on behalf of `sower`.
    ///
    /// Returns the index of the slot that received the last seed, or
    /// `from` itself when it held no seeds.
    pub fn sow(&mut self, from: usize, sower: Player) -> usize {
        let seeds = std::mem::take(&mut self.pits[from]);
        let mut slot = from;
        for _ in 0..seeds {
            slot = next_slot(slot, sower);
            self.pits[slot] += 1;
        }
        slot
    }

    /// Move every seed left in the sowing pits into its owner's store.
    ///
    /// Returns how many seeds each player's store gained.
    pub fn sweep(&mut self) -> PlayerMap<u32> {
        let mut gained = PlayerMap::default();
        for player in Player::ALL {
            let remaining = self.side_total(player);
            for index in player.pits() {
                self.pits[index] = 0;
            }
            self.pits[player.store()] += remaining;
            gained[player] = remaining;
        }
        gained
    }

    /// Project the board into 1-based pit numbering.
    #[must_use]
    pub fn status(&self) -> Status {
        Status(
            (1u8..)
                .zip(self.pits.iter().copied())
                .collect(),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SEEDS_PER_PIT)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Player 2's row reads right to left, as seen from Player 1's side.
        write!(f, "    ")?;
        for index in Player::Two.pits().rev() {
            write!(f, "{:>3}", self.pits[index])?;
        }
        writeln!(f)?;
        write!(f, "{:>3}", self.pits[PLAYER_TWO_STORE])?;
        write!(f, "{:>1$}", "", 3 * PITS_PER_SIDE + 1)?;
        writeln!(f, "{:>3}", self.pits[PLAYER_ONE_STORE])?;
        write!(f, "    ")?;
        for index in Player::One.pits() {
            write!(f, "{:>3}", self.pits[index])?;
        }
        Ok(())
    }
}

/// Pit number (1-14) to seed count.
///
/// Serializes as an object keyed by pit number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(BTreeMap<u8, u32>);

impl Status {
    /// Seeds in pit `number` (1-based).
    #[must_use]
    pub fn get(&self, number: u8) -> Option<u32> {
        self.0.get(&number).copied()
    }

    /// Iterate over (pit number, seeds) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0.iter().map(|(&number, &seeds)| (number, seeds))
    }

    /// Number of entries (always 14 for a projected board).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

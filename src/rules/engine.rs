//! The Kalah board engine.
//!
//! Owns the board and the turn, and applies the rules:
//! - Which pits the current player may sow from
//! - Sowing and the extra-turn rule
//! - End-of-game detection and the final sweep
//! - Winner determination

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{is_store, Board, GameConfig, Player, Status, PIT_COUNT, PITS_PER_SIDE};
use crate::error::{MoveError, SnapshotError};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Both stores hold the same number of seeds.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Winning player number, 0 for a draw.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            GameResult::Winner(p) => p.number(),
            GameResult::Draw => 0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    InProgress,
    /// Terminal. Entered when `check_game_over` sweeps the board.
    Over,
}

/// What a single sowing did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The player who sowed.
    pub player: Player,
    /// Board index of the pit that was emptied.
    pub pit: usize,
    /// Board index that received the last seed.
    pub last_pit: usize,
    /// True if the last seed landed in the sower's own store.
    pub extra_turn: bool,
}

/// Legal pit indices for one player (at most six).
pub type PitList = SmallVec<[usize; PITS_PER_SIDE]>;

/// Six-pit Kalah engine.
///
/// ## Example
///
/// ```
/// use kalah::core::Player;
/// use kalah::rules::Kalah;
///
/// let mut game = Kalah::new();
/// assert!(game.is_valid_selection(0));
///
/// // Six seeds from the first pit end in Player 1's store
/// let outcome = game.take_turn(0).unwrap();
/// assert!(outcome.extra_turn);
/// assert_eq!(game.turn(), Player::One);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kalah {
    board: Board,
    turn: Player,
    phase: GamePhase,
}

impl Kalah {
    /// Standard game: six seeds per pit, Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::default(), Player::One)
    }

    /// Fresh game using the configured seed count.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        Self::from_board(Board::new(config.seeds_per_pit), Player::One)
    }

    /// Game resumed from an arbitrary position.
    ///
    /// The phase starts as `InProgress`; call `check_game_over` to
    /// finalize a position that already has an empty side.
    #[must_use]
    pub fn from_board(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            phase: GamePhase::InProgress,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True once the end-of-game sweep has run.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Check whether the current player may sow from `pit_index` (0-based).
    ///
    /// False for out-of-range indices, stores, empty pits, and the
    /// opponent's pits. Never mutates.
    #[must_use]
    pub fn is_valid_selection(&self, pit_index: isize) -> bool {
        let Ok(index) = usize::try_from(pit_index) else {
            return false;
        };
        if index >= PIT_COUNT || is_store(index) {
            return false;
        }
        self.board.pits()[index] > 0 && self.turn.owns_pit(index)
    }

    /// All pits the current player may sow from.
    #[must_use]
    pub fn legal_moves(&self) -> PitList {
        self.turn
            .pits()
            .filter(|&index| self.board.pits()[index] > 0)
            .collect()
    }

    /// Sow from `pit_index` (0-based) for the current player.
    ///
    /// The selection is checked first; a rejected selection leaves the
    /// game untouched. If the last seed lands in the sower's own store
    /// the same player moves again, otherwise the turn passes.
    pub fn take_turn(&mut self, pit_index: usize) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let selection = isize::try_from(pit_index).unwrap_or(isize::MAX);
        if !self.is_valid_selection(selection) {
            return Err(MoveError::InvalidSelection(selection));
        }

        let player = self.turn;
        let last_pit = self.board.sow(pit_index, player);
        let extra_turn = last_pit == player.store();
        if !extra_turn {
            self.turn = player.opponent();
        }

        Ok(TurnOutcome {
            player,
            pit: pit_index,
            last_pit,
            extra_turn,
        })
    }

    /// Board projected into 1-based pit numbers.
    #[must_use]
    pub fn status(&self) -> Status {
        self.board.status()
    }

    /// Check whether either side has run out of seeds.
    ///
    /// When it has, every remaining seed is swept into its owner's store
    /// and the game moves to `GamePhase::Over`. Repeated calls keep
    /// returning true without changing the board.
    pub fn check_game_over(&mut self) -> bool {
        let over = Player::ALL
            .into_iter()
            .any(|player| self.board.side_total(player) == 0);
        if over && !self.is_over() {
            self.board.sweep();
            self.phase = GamePhase::Over;
        }
        over
    }

    /// Compare the two stores.
    ///
    /// Only final after `check_game_over` has returned true; before that
    /// it compares the stores as they stand.
    #[must_use]
    pub fn calculate_winner(&self) -> GameResult {
        let one = self.board.store(Player::One);
        let two = self.board.store(Player::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Encode the engine as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Restore an engine from `to_bytes` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let game: Self = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        if game.is_over() && Player::ALL.into_iter().any(|p| game.board.side_total(p) > 0) {
            return Err(SnapshotError::Inconsistent(
                "finished game still has seeds in sowing pits".to_string(),
            ));
        }
        Ok(game)
    }
}

impl Default for Kalah {
    fn default() -> Self {
        Self::new()
    }
}

//! Game configuration.
//!
//! Board geometry is fixed (six pits per side, two stores). What a host
//! may configure is the starting seed count and the base URL that
//! prefixes each game's display handle.

use serde::{Deserialize, Serialize};

use super::board::{DEFAULT_SEEDS_PER_PIT, MAX_SEEDS_PER_PIT};

/// Base URL used for display handles when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/games";

/// Configuration shared by every game a repository creates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seeds placed in each sowing pit at the start of a game.
    pub seeds_per_pit: u32,

    /// Prefix of each game's display handle (`{base_url}/{id}`).
    pub base_url: String,
}

impl GameConfig {
    /// Create the standard six-seed configuration.
    pub fn new() -> Self {
        Self {
            seeds_per_pit: DEFAULT_SEEDS_PER_PIT,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the starting seeds per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        assert!(seeds > 0, "Must start with at least 1 seed per pit");
        assert!(
            seeds <= MAX_SEEDS_PER_PIT,
            "At most {} seeds per pit supported",
            MAX_SEEDS_PER_PIT
        );
        self.seeds_per_pit = seeds;
        self
    }

    /// Set the display handle prefix.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Display handle for the game with the given id.
    #[must_use]
    pub fn display_handle(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seeds_per_pit, 6);
        assert_eq!(config.base_url, "http://localhost:8080/games");
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_seeds_per_pit(4)
            .with_base_url("https://kalah.example/games/");

        assert_eq!(config.seeds_per_pit, 4);
        assert_eq!(config.display_handle(7), "https://kalah.example/games/7");
    }

    #[test]
    fn test_display_handle() {
        let config = GameConfig::default();
        assert_eq!(config.display_handle(0), "http://localhost:8080/games/0");
    }

    #[test]
    fn test_config_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"seeds_per_pit": 3}"#).unwrap();
        assert_eq!(config.seeds_per_pit, 3);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[should_panic(expected = "Must start with at least 1 seed per pit")]
    fn test_config_zero_seeds() {
        let _ = GameConfig::new().with_seeds_per_pit(0);
    }

    #[test]
    fn test_config_largest_seed_count() {
        let config = GameConfig::new().with_seeds_per_pit(MAX_SEEDS_PER_PIT);
        assert_eq!(config.seeds_per_pit, MAX_SEEDS_PER_PIT);
    }

    #[test]
    #[should_panic(expected = "seeds per pit supported")]
    fn test_config_seed_total_overflow() {
        let _ = GameConfig::new().with_seeds_per_pit(1 << 30);
    }
}

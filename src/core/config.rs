//! Game configuration.
//!
//! The defaults describe the standard game: a 7×7 board, 15 HP per
//! player, sequences of four or more, a ten-entry damage log, X first.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    pub board_size: usize,

    /// HP each player starts with. Also the HP ceiling.
    pub starting_hp: u32,

    /// Shortest run of same-mark cells that deals damage.
    pub min_sequence_len: usize,

    /// Damage log capacity; older events are evicted.
    pub damage_log_capacity: usize,

    /// Who moves first.
    pub first_player: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 7,
            starting_hp: 15,
            min_sequence_len: 4,
            damage_log_capacity: 10,
            first_player: Mark::X,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_hp(mut self, hp: u32) -> Self {
        self.starting_hp = hp;
        self
    }

    #[must_use]
    pub fn with_min_sequence_len(mut self, len: usize) -> Self {
        self.min_sequence_len = len;
        self
    }

    #[must_use]
    pub fn with_damage_log_capacity(mut self, capacity: usize) -> Self {
        self.damage_log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, mark: Mark) -> Self {
        self.first_player = mark;
        self
    }

    /// Panics if any field is out of range.
    pub fn validate(&self) {
        assert!(self.board_size > 0, "Board size must be at least 1");
        assert!(self.starting_hp > 0, "Starting HP must be at least 1");
        assert!(self.min_sequence_len > 0, "Minimum sequence length must be at least 1");
        assert!(self.damage_log_capacity > 0, "Damage log capacity must be at least 1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.board_size, 7);
        assert_eq!(config.starting_hp, 15);
        assert_eq!(config.min_sequence_len, 4);
        assert_eq!(config.damage_log_capacity, 10);
        assert_eq!(config.first_player, Mark::X);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_board_size(9)
            .with_starting_hp(20)
            .with_first_player(Mark::O);

        assert_eq!(config.board_size, 9);
        assert_eq!(config.starting_hp, 20);
        assert_eq!(config.first_player, Mark::O);
        assert_eq!(config.min_sequence_len, 4);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_starting_hp(30);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Starting HP must be at least 1")]
    fn test_zero_hp_rejected() {
        GameConfig::default().with_starting_hp(0).validate();
    }
}

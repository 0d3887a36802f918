//! Game state snapshot.
//!
//! ## GameState
//!
//! Everything a renderer needs:
//! - Board contents
//! - Whose turn it is
//! - HP per mark, clamped to `[0, max_hp]`
//! - Whether the game is over
//! - The bounded damage log
//!
//! The engine owns the live state and hands out clones. The damage log
//! is an `im` persistent structure, so cloning is cheap.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::mark::{Mark, MarkMap};
use crate::combat::{DamageEvent, DamageLog};

/// Coarse HP bucket for health bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HpLevel {
    /// Above two thirds.
    Healthy,
    /// Above one third, at most two thirds.
    Low,
    /// At most one third.
    Critical,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    hp: MarkMap<u32>,
    max_hp: u32,
    game_over: bool,
    damage_log: DamageLog,
    move_count: u32,
}

impl GameState {
    /// Create a fresh state for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_player: config.first_player,
            hp: MarkMap::with_value(config.starting_hp),
            max_hp: config.starting_hp,
            game_over: false,
            damage_log: DamageLog::new(config.damage_log_capacity),
            move_count: 0,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move, or the final mover once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    #[must_use]
    pub fn hp(&self, mark: Mark) -> u32 {
        self.hp[mark]
    }

    #[must_use]
    pub fn hp_map(&self) -> MarkMap<u32> {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn damage_log(&self) -> &DamageLog {
        &self.damage_log
    }

    /// Number of marks placed so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Remaining HP as a fraction of the maximum.
    #[must_use]
    pub fn hp_fraction(&self, mark: Mark) -> f64 {
        f64::from(self.hp[mark]) / f64::from(self.max_hp)
    }

    #[must_use]
    pub fn hp_level(&self, mark: Mark) -> HpLevel {
        let percent = self.hp_fraction(mark) * 100.0;
        if percent <= 33.0 {
            HpLevel::Critical
        } else if percent <= 66.0 {
            HpLevel::Low
        } else {
            HpLevel::Healthy
        }
    }

    // === Mutation (engine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn record_move(&mut self) -> u32 {
        self.move_count += 1;
        self.move_count
    }

    /// Subtract damage, flooring at zero. Returns the new HP.
    pub(crate) fn apply_damage(&mut self, mark: Mark, damage: u32) -> u32 {
        let hp = &mut self.hp[mark];
        *hp = hp.saturating_sub(damage);
        *hp
    }

    pub(crate) fn record_damage(&mut self, event: DamageEvent) {
        self.damage_log.record(event);
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn finish(&mut self) {
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.board().size(), 7);
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.hp(Mark::X), 15);
        assert_eq!(state.hp(Mark::O), 15);
        assert!(!state.is_game_over());
        assert!(state.damage_log().is_empty());
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_apply_damage_floors_at_zero() {
        let mut state = GameState::new(&GameConfig::default());

        assert_eq!(state.apply_damage(Mark::O, 4), 11);
        assert_eq!(state.apply_damage(Mark::O, 20), 0);
        assert_eq!(state.hp(Mark::X), 15);
    }

    #[test]
    fn test_hp_levels() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.hp_level(Mark::X), HpLevel::Healthy);

        state.apply_damage(Mark::X, 5); // 10/15
        assert_eq!(state.hp_level(Mark::X), HpLevel::Healthy);

        state.apply_damage(Mark::X, 1); // 9/15 = 60%
        assert_eq!(state.hp_level(Mark::X), HpLevel::Low);

        state.apply_damage(Mark::X, 5); // 4/15
        assert_eq!(state.hp_level(Mark::X), HpLevel::Critical);
    }

    #[test]
    fn test_pass_turn() {
        let mut state = GameState::new(&GameConfig::default());
        state.pass_turn();
        assert_eq!(state.current_player(), Mark::O);
        state.pass_turn();
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new(&GameConfig::default());
        state.board_mut().place(Position::new(1, 1), Mark::X);
        state.record_move();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

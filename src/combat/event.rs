//! Damage events.
//!
//! One event is recorded per move that completes at least one sequence,
//! regardless of how many sequences that move completed.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// A single resolved strike. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEvent {
    attacker: Mark,
    defender: Mark,
    damage: u32,
    sequence_count: usize,
    turn: u32,
    timestamp: SystemTime,
}

impl DamageEvent {
    /// Create an event stamped with the current time.
    ///
    /// The defender is always the attacker's opponent.
    #[must_use]
    pub fn new(attacker: Mark, damage: u32, sequence_count: usize, turn: u32) -> Self {
        Self::at(attacker, damage, sequence_count, turn, SystemTime::now())
    }

    /// Create an event with an explicit timestamp.
    #[must_use]
    pub fn at(
        attacker: Mark,
        damage: u32,
        sequence_count: usize,
        turn: u32,
        timestamp: SystemTime,
    ) -> Self {
        debug_assert!(sequence_count >= 1, "A damage event needs at least one sequence");

        Self {
            attacker,
            defender: attacker.opponent(),
            damage,
            sequence_count,
            turn,
            timestamp,
        }
    }

    #[must_use]
    pub fn attacker(&self) -> Mark {
        self.attacker
    }

    #[must_use]
    pub fn defender(&self) -> Mark {
        self.defender
    }

    /// Total damage: the summed length of every sequence completed.
    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }

    #[must_use]
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// Move number (1-based) that produced this event.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

impl std::fmt::Display for DamageEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {} dealt {} damage to Player {}",
            self.attacker, self.damage, self.defender
        )?;
        if self.sequence_count > 1 {
            write!(f, " ({} sequences)", self.sequence_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defender_is_opponent() {
        let event = DamageEvent::new(Mark::O, 4, 1, 8);

        assert_eq!(event.attacker(), Mark::O);
        assert_eq!(event.defender(), Mark::X);
        assert_eq!(event.turn(), 8);
    }

    #[test]
    fn test_display_single_sequence() {
        let event = DamageEvent::new(Mark::X, 5, 1, 9);
        assert_eq!(event.to_string(), "Player X dealt 5 damage to Player O");
    }

    #[test]
    fn test_display_multiple_sequences() {
        let event = DamageEvent::new(Mark::X, 8, 2, 9);
        assert_eq!(
            event.to_string(),
            "Player X dealt 8 damage to Player O (2 sequences)"
        );
    }

    #[test]
    fn test_serialization() {
        let event = DamageEvent::at(Mark::O, 4, 1, 2, SystemTime::UNIX_EPOCH);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DamageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}

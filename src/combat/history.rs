//! Bounded, most-recent-first damage history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::DamageEvent;

/// Most-recent-first list of damage events with a fixed capacity.
///
/// Backed by `im::Vector` so state snapshots share structure with the
/// live log.
///
/// ## Example
///
/// ```
/// use tactical_tictactoe::combat::{DamageEvent, DamageLog};
/// use tactical_tictactoe::core::Mark;
///
/// let mut log = DamageLog::new(2);
/// log.record(DamageEvent::new(Mark::X, 4, 1, 7));
/// log.record(DamageEvent::new(Mark::O, 5, 1, 8));
/// log.record(DamageEvent::new(Mark::X, 8, 2, 9));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().map(|e| e.damage()), Some(8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDamageLog")]
pub struct DamageLog {
    capacity: usize,
    entries: Vector<DamageEvent>,
}

/// Unchecked wire form; validated into a `DamageLog` on deserialize.
#[derive(Deserialize)]
struct RawDamageLog {
    capacity: usize,
    entries: Vector<DamageEvent>,
}

impl TryFrom<RawDamageLog> for DamageLog {
    type Error = String;

    fn try_from(raw: RawDamageLog) -> Result<Self, Self::Error> {
        if raw.capacity == 0 {
            return Err("damage log capacity must be at least 1".to_string());
        }
        if raw.entries.len() > raw.capacity {
            return Err(format!(
                "damage log holds {} entries but capacity is {}",
                raw.entries.len(),
                raw.capacity
            ));
        }
        Ok(Self {
            capacity: raw.capacity,
            entries: raw.entries,
        })
    }
}

impl DamageLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Damage log capacity must be at least 1");

        Self {
            capacity,
            entries: Vector::new(),
        }
    }

    /// Push an event to the front, evicting from the tail past capacity.
    pub fn record(&mut self, event: DamageEvent) {
        self.entries.push_front(event);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest event.
    #[must_use]
    pub fn latest(&self) -> Option<&DamageEvent> {
        self.entries.front()
    }

    /// Event at `index`, where 0 is the newest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DamageEvent> {
        self.entries.get(index)
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &DamageEvent> {
        self.entries.iter()
    }
}

impl std::fmt::Display for DamageLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No damage dealt yet");
        }
        for event in &self.entries {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

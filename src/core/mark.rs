//! Player marks and per-mark data storage.
//!
//! ## Mark
//!
//! The two players, `X` and `O`. A mark doubles as the value stored in an
//! occupied board cell.
//!
//! ## MarkMap
//!
//! Fixed two-slot storage indexed by `Mark` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player identity and cell occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Slot index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    /// Single-character symbol used on the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parse a mark from its symbol (case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "X" | "x" => Some(Mark::X),
            "O" | "o" => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-mark data storage.
///
/// ## Example
///
/// ```
/// use tactical_tictactoe::core::{Mark, MarkMap};
///
/// let mut hp: MarkMap<u32> = MarkMap::with_value(15);
/// hp[Mark::O] -= 4;
///
/// assert_eq!(hp[Mark::X], 15);
/// assert_eq!(hp[Mark::O], 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create a new MarkMap with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            data: [factory(Mark::X), factory(Mark::O)],
        }
    }

    /// Create a new MarkMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a mark's data.
    #[must_use]
    pub fn get(&self, mark: Mark) -> &T {
        &self.data[mark.index()]
    }

    /// Get a mutable reference to a mark's data.
    pub fn get_mut(&mut self, mark: Mark) -> &mut T {
        &mut self.data[mark.index()]
    }

    /// Iterate over (Mark, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for MarkMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        self.get(mark)
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        self.get_mut(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_mark_symbols() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(Mark::from_symbol("o"), Some(Mark::O));
        assert_eq!(Mark::from_symbol("Z"), None);
    }

    #[test]
    fn test_mark_map_new() {
        let map = MarkMap::new(|m| m.index() * 10);

        assert_eq!(map[Mark::X], 0);
        assert_eq!(map[Mark::O], 10);
    }

    #[test]
    fn test_mark_map_mutation() {
        let mut map: MarkMap<u32> = MarkMap::with_value(15);
        map[Mark::O] = 3;

        assert_eq!(map[Mark::X], 15);
        assert_eq!(map[Mark::O], 3);
    }

    #[test]
    fn test_mark_map_iter() {
        let map: MarkMap<u32> = MarkMap::new(|m| m.index() as u32);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Mark::X, &0), (Mark::O, &1)]);
    }

    #[test]
    fn test_mark_map_serialization() {
        let map: MarkMap<u32> = MarkMap::new(|m| m.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: MarkMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}

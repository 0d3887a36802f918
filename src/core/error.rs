//! Move rejection errors.
//!
//! `InvalidMove` is the only failure the engine reports; configuration
//! mistakes are caught by assertions instead.

use thiserror::Error;

use super::mark::Mark;

/// A rejected `place_mark` request. Rejection never changes game state.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("position ({row}, {col}) is already marked by {mark}")]
    Occupied { row: usize, col: usize, mark: Mark },

    #[error("game is over")]
    GameOver,
}

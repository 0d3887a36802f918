//! Core engine types: marks, board, configuration, state, errors.
//!
//! These are the building blocks the rules engine operates on. Nothing
//! here knows about sequences or damage resolution.

pub mod mark;
pub mod board;
pub mod config;
pub mod error;
pub mod state;

pub use mark::{Mark, MarkMap};
pub use board::{Board, Position};
pub use config::GameConfig;
pub use error::InvalidMove;
pub use state::{GameState, HpLevel};

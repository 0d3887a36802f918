//! # tactical-tictactoe
//!
//! Two-player tic-tac-toe on a 7×7 board with hit points.
//!
//! ## Rules
//!
//! Players alternate placing marks. A placement that completes a run of
//! four or more same-mark cells (horizontal, vertical, or either diagonal)
//! deals damage to the opponent equal to the run length. Runs on several
//! axes through the same cell add up. Each player starts with 15 HP; the
//! game ends when either reaches zero.
//!
//! ## Architecture
//!
//! - **Pure engine**: `GameEngine::place_mark` returns a `MoveResult`
//!   value. Rendering, highlighting and timers belong to the caller.
//!
//! - **Silent rejection**: Invalid moves never change state; the reason
//!   is reported in the result instead of raised.
//!
//! - **Cheap snapshots**: The damage log uses `im-rs`, so cloning the
//!   state for a renderer is inexpensive.
//!
//! ## Modules
//!
//! - `core`: Marks, board, configuration, state, errors
//! - `sequences`: Axis walking and sequence detection
//! - `combat`: Damage events and the bounded damage log
//! - `rules`: The game engine and move results
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod sequences;
pub mod combat;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Mark, MarkMap, Board, Position,
    GameConfig, GameState, HpLevel, InvalidMove,
};

pub use crate::sequences::{Axis, Sequence, sequences_through};

pub use crate::combat::{DamageEvent, DamageLog};

pub use crate::rules::{GameEngine, GameResult, MoveReport, MoveResult};

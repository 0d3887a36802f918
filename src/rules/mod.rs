//! Game rules: the engine that applies moves and resolves damage.
//!
//! `GameEngine` is the only owner of a live `GameState`. Callers feed it
//! coordinates and get back a `MoveResult` value to render; the engine
//! never calls out to a presentation layer.

pub mod engine;

pub use engine::{GameEngine, GameResult, MoveReport, MoveResult, Sequences};

//! Combat layer: damage events and their bounded history.
//!
//! Damage itself is resolved by the engine; this module only describes
//! what happened.

pub mod event;
pub mod history;

pub use event::DamageEvent;
pub use history::DamageLog;

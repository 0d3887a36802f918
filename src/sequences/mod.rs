//! Line (sequence) detection.
//!
//! A sequence is a contiguous run of same-mark cells along one of four
//! axes, found through the most recently placed cell. Its length is the
//! damage it deals.

pub mod axis;
pub mod detect;

pub use axis::Axis;
pub use detect::{run_through, sequences_through, Cells, Sequence};

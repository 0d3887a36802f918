//! Sequence detection through a freshly placed cell.
//!
//! ## Algorithm
//!
//! For each axis, walk backward from the anchor collecting contiguous
//! cells of the anchor's mark, then forward the same way. The run is
//! backward cells (farthest first), the anchor, then forward cells.
//! A run of at least `min_len` cells is a sequence.
//!
//! Each axis yields at most one sequence, so no cross-axis deduplication
//! is needed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::axis::Axis;
use crate::core::{Board, Mark, Position};

/// Cells along one run. Inline capacity covers a full 7-wide line.
pub type Cells = SmallVec<[Position; 8]>;

/// A qualifying run of same-mark cells through an anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    axis: Axis,
    mark: Mark,
    anchor: Position,
    cells: Cells,
}

impl Sequence {
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The placed cell this sequence was found through.
    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Cells in order along the axis.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; sequences contain at least the anchor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Damage this sequence contributes (its length).
    #[must_use]
    pub fn damage(&self) -> u32 {
        self.cells.len() as u32
    }
}

/// Collect the full run along `axis` through `anchor`.
///
/// Returns an empty run if the anchor itself is unmarked.
#[must_use]
pub fn run_through(board: &Board, anchor: Position, axis: Axis) -> Cells {
    let Some(mark) = board.get(anchor) else {
        return Cells::new();
    };
    let (dr, dc) = axis.delta();
    let size = board.size();

    let mut backward = Cells::new();
    let mut cursor = anchor.offset(-dr, -dc, size);
    while let Some(pos) = cursor.filter(|&p| board.get(p) == Some(mark)) {
        backward.push(pos);
        cursor = pos.offset(-dr, -dc, size);
    }

    let mut run: Cells = backward.into_iter().rev().collect();
    run.push(anchor);

    let mut cursor = anchor.offset(dr, dc, size);
    while let Some(pos) = cursor.filter(|&p| board.get(p) == Some(mark)) {
        run.push(pos);
        cursor = pos.offset(dr, dc, size);
    }

    run
}

/// All sequences of at least `min_len` cells through `anchor`, one per
/// qualifying axis, in `Axis::ALL` order.
#[must_use]
pub fn sequences_through(board: &Board, anchor: Position, min_len: usize) -> SmallVec<[Sequence; 4]> {
    let Some(mark) = board.get(anchor) else {
        return SmallVec::new();
    };

    Axis::ALL
        .into_iter()
        .filter_map(|axis| {
            let cells = run_through(board, anchor, axis);
            (cells.len() >= min_len).then(|| Sequence {
                axis,
                mark,
                anchor,
                cells,
            })
        })
        .collect()
}

//! Square board of write-once cells.
//!
//! Cells are stored row-major. A cell goes from empty to marked exactly
//! once; there is no API to clear or overwrite a marked cell.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// A board coordinate (0-based row and column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta, returning `None` if either coordinate
    /// would leave a `size`×`size` board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N grid of optional marks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");

        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the mark at a position. Out-of-bounds positions read as empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Mark> {
        if self.in_bounds(pos) {
            self.cells[pos.row * self.size + pos.col]
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.get(pos).is_none()
    }

    /// Mark an empty cell.
    ///
    /// Returns false (and leaves the board untouched) if the position is
    /// out of bounds or already marked.
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty_at(pos) {
            return false;
        }
        self.cells[pos.row * self.size + pos.col] = Some(mark);
        true
    }

    /// Number of marked cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over all empty positions, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| Position::new(i / self.size, i % self.size))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>]> {
        self.cells.chunks(self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|c| c.map_or('.', Mark::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

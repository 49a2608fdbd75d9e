//! Strongly-typed identifiers: [`CellId`] and [`Position`].

use std::fmt;

/// Identifies a traversable cell within a grid.
///
/// Cells are allocated in source order as the parser encounters them, so
/// `CellId(n)` is the n-th non-wall character of the input. Ids are only
/// meaningful for the grid that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    /// The id as an index into the owning grid's cell arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A column/row location in the source text.
///
/// `x` counts characters from the start of a line, `y` counts lines from the
/// start of the input. Both are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Position {
    /// Create a position from a column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Row-major index of this position in a table `width` columns wide.
    pub fn to_index(self, width: u32) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }

    /// Inverse of [`to_index`](Self::to_index).
    ///
    /// `width` must be non-zero.
    pub fn from_index(index: usize, width: u32) -> Self {
        let w = width as usize;
        Self {
            x: (index % w) as u32,
            y: (index / w) as u32,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

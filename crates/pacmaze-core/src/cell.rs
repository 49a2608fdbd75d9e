//! The [`Cell`] graph node.

use crate::id::{CellId, Position};
use smallvec::SmallVec;

/// Adjacency storage. A 4-connected cell never has more than four links.
pub type Adjacency = SmallVec<[CellId; 4]>;

/// One traversable position of a maze.
///
/// A cell knows whether it holds a dot and which other cells it can step to.
/// Links are [`CellId`]s resolved through the owning grid, so cells never
/// borrow each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    has_dot: bool,
    adjacent: Adjacency,
    position: Position,
    symbol: char,
}

impl Cell {
    /// Create an unlinked cell.
    ///
    /// `position` and `symbol` record where the cell came from in the source
    /// text; they are only used for reporting.
    pub fn new(id: CellId, has_dot: bool, position: Position, symbol: char) -> Self {
        Self {
            id,
            has_dot,
            adjacent: SmallVec::new(),
            position,
            symbol,
        }
    }

    /// This cell's id within its grid.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Whether the cell holds a dot. Fixed at creation.
    pub fn has_dot(&self) -> bool {
        self.has_dot
    }

    /// Linked cells, in the order they were added.
    pub fn adjacent_cells(&self) -> &[CellId] {
        &self.adjacent
    }

    /// Append `other` to the adjacency list.
    ///
    /// No checks are made here: keeping self-links and duplicates out is up
    /// to the graph builder.
    pub fn add_adjacent(&mut self, other: CellId) {
        self.adjacent.push(other);
    }

    /// Source location of the character that produced this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The source character that produced this cell.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

//! The [`Grid`]: a parsed maze with toroidal adjacency.

use std::fmt;
use std::io::Read;
use std::path::Path;

use pacmaze_core::{Cell, CellId, GridError, Position};

use crate::legend::Legend;
use crate::parse::{self, Layout};
use crate::torus::Torus;

/// A validated maze.
///
/// Owns every [`Cell`] in an arena indexed by [`CellId`], plus a row-major
/// table mapping each position to its cell (or `None` for a wall). Only a
/// source that passes every structural check produces a `Grid`, and the
/// grid is immutable afterwards, so queries never need to re-validate.
///
/// # Examples
///
/// ```
/// use pacmaze_grid::{Grid, Position};
///
/// let grid = Grid::parse("p d\n").unwrap();
/// let dot = grid.find_closest_dot().unwrap();
/// // Wraparound makes (0,0) and (2,0) neighbours.
/// assert_eq!(dot.position(), Position::new(2, 0));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    torus: Torus,
    legend: Legend,
    slots: Vec<Option<CellId>>,
    cells: Vec<Cell>,
    start: CellId,
}

impl Grid {
    /// Parse a maze with the default [`Legend`].
    pub fn parse(source: &str) -> Result<Self, GridError> {
        Self::parse_with(source, &Legend::default())
    }

    /// Parse a maze with a custom legend.
    pub fn parse_with(source: &str, legend: &Legend) -> Result<Self, GridError> {
        match parse::parse(source, legend) {
            Ok(layout) => {
                let grid = Self::from_layout(layout, *legend);
                tracing::debug!(
                    width = grid.width(),
                    height = grid.height(),
                    cells = grid.cell_count(),
                    start = %grid.start_position(),
                    "grid parsed"
                );
                Ok(grid)
            }
            Err(e) => {
                tracing::debug!(error = %e, "grid rejected");
                Err(e)
            }
        }
    }

    /// Read and parse a maze with the default legend.
    ///
    /// A reader that fails yields [`GridError::EmptyOrMissingInput`]. Bytes
    /// that are not valid UTF-8 decode to `U+FFFD` and are then rejected as
    /// invalid characters.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GridError> {
        Self::from_reader_with(reader, &Legend::default())
    }

    /// Read and parse a maze with a custom legend.
    pub fn from_reader_with<R: Read>(mut reader: R, legend: &Legend) -> Result<Self, GridError> {
        let mut bytes = Vec::new();
        if let Err(e) = reader.read_to_end(&mut bytes) {
            tracing::warn!(error = %e, "failed to read maze source");
            return Err(GridError::EmptyOrMissingInput);
        }
        Self::parse_with(&String::from_utf8_lossy(&bytes), legend)
    }

    /// Load a maze file with the default legend.
    ///
    /// A missing or unreadable file yields [`GridError::EmptyOrMissingInput`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        Self::load_with(path, &Legend::default())
    }

    /// Load a maze file with a custom legend.
    pub fn load_with(path: impl AsRef<Path>, legend: &Legend) -> Result<Self, GridError> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => Self::parse_with(&String::from_utf8_lossy(&bytes), legend),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to open maze file");
                Err(GridError::EmptyOrMissingInput)
            }
        }
    }

    fn from_layout(layout: Layout, legend: Legend) -> Self {
        let Layout {
            width,
            height,
            slots,
            mut cells,
            start,
        } = layout;
        let torus = Torus::new(width, height);
        link_cells(&mut cells, &slots, torus);
        Self {
            torus,
            legend,
            slots,
            cells,
            start,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.torus.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.torus.height()
    }

    /// The wraparound topology of this grid.
    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// The legend the grid was parsed with.
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Id of the starting cell.
    pub fn start(&self) -> CellId {
        self.start
    }

    /// The starting cell.
    pub fn start_cell(&self) -> &Cell {
        self.cell(self.start)
    }

    /// Where the starting cell sits in the source.
    pub fn start_position(&self) -> Position {
        self.start_cell().position()
    }

    /// Resolve a cell id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this grid.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// The id stored at `pos`: `None` for walls and positions off the grid.
    pub fn slot(&self, pos: Position) -> Option<CellId> {
        if pos.x >= self.width() || pos.y >= self.height() {
            return None;
        }
        self.slots[pos.to_index(self.width())]
    }

    /// The cell at `pos`, if there is one.
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        self.slot(pos).map(|id| self.cell(id))
    }

    /// All cells, in source order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of traversable cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Dimensions and start position, e.g. `Dims: (5,5) Start: (2,2)`.
    pub fn summary(&self) -> String {
        format!(
            "Dims: ({},{}) Start: {}",
            self.width(),
            self.height(),
            self.start_position()
        )
    }
}

/// Link every cell to its wrapped left, right, up, and down neighbours.
///
/// A neighbour is skipped when it is a wall, is the cell itself (1-wide or
/// 1-tall grids), or is already linked (2-wide or 2-tall grids, where two
/// directions reach the same cell).
fn link_cells(cells: &mut [Cell], slots: &[Option<CellId>], torus: Torus) {
    for cell in cells.iter_mut() {
        for pos in torus.neighbours(cell.position()) {
            let Some(other) = slots[pos.to_index(torus.width())] else {
                continue;
            };
            if other != cell.id() && !cell.adjacent_cells().contains(&other) {
                cell.add_adjacent(other);
            }
        }
    }
}

impl fmt::Display for Grid {
    /// Renders one line per row: walls as the legend's wall symbol, cells as
    /// the character they were parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.slots.chunks(self.width() as usize) {
            for slot in row {
                let symbol = match slot {
                    Some(id) => self.cell(*id).symbol(),
                    None => self.legend.wall(),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! pacmaze: parse text mazes onto a torus and find the closest dot.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! pacmaze sub-crates, plus the [`report`] helpers used by the level runner.
//!
//! # Quick start
//!
//! ```rust
//! use pacmaze::prelude::*;
//!
//! let grid = Grid::parse(concat!(
//!     "#####\n",
//!     "# d #\n",
//!     "# p #\n",
//!     "#####\n",
//! ))
//! .unwrap();
//!
//! let hit = grid.search().unwrap();
//! assert_eq!(hit.cell.position(), Position::new(2, 1));
//! assert_eq!(hit.hops, 1);
//!
//! let err = Grid::parse("pp\n").unwrap_err();
//! assert!(matches!(err, GridError::MultipleStartingPositions { .. }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pacmaze-core` | `Cell`, `CellId`, `Position`, error types |
//! | [`grid`] | `pacmaze-grid` | `Grid`, `Legend`, `Torus`, search |
//! | [`report`] | (this crate) | Level runner output |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod report;

/// Cells, identifiers, and error types (`pacmaze-core`).
pub use pacmaze_core as types;

/// Parsing, adjacency, and search (`pacmaze-grid`).
///
/// [`grid::Grid`] is the entry point; [`grid::Legend`] customises the
/// symbol set.
pub use pacmaze_grid as grid;

/// Common imports for typical pacmaze usage.
///
/// ```rust
/// use pacmaze::prelude::*;
/// ```
pub mod prelude {
    pub use pacmaze_core::{Cell, CellId, ConfigError, GridError, Position};
    pub use pacmaze_grid::{DotHit, Grid, Legend, Torus};
}

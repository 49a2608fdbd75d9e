//! Toroidal maze grids for pacmaze.
//!
//! This crate turns the textual maze format into a [`Grid`]: a validated
//! table of traversable [`Cell`]s linked to their wraparound neighbours,
//! queried with [`Grid::find_closest_dot`].
//!
//! # Format
//!
//! Rows of equal width, each terminated by `'\n'`. With the default
//! [`Legend`]: `' '` open, `'d'` dot, `'p'` the single start, `'#'` wall.
//! Any other character rejects the source.
//!
//! # Topology
//!
//! [`Torus`] wraps every edge onto the opposite one. Cells are linked to
//! their left, right, up, and down neighbours in that order, skipping walls,
//! self-links, and repeats.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod legend;
mod parse;
pub mod search;
pub mod torus;

pub use grid::Grid;
pub use legend::{Legend, Tile};
pub use pacmaze_core::{Cell, CellId, ConfigError, GridError, Position};
pub use search::DotHit;
pub use torus::Torus;

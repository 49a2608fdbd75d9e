//! Core types for pacmaze grids.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! graph node ([`Cell`]), the strongly-typed identifiers that link nodes
//! together ([`CellId`], [`Position`]), and the error types raised while a
//! grid is being built.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::{Adjacency, Cell};
pub use error::{ConfigError, GridError};
pub use id::{CellId, Position};

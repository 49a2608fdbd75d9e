//! Test utilities for pacmaze development.
//!
//! - [`fixtures`]: the demo level sources, grouped by expected outcome.
//! - [`compliance`]: invariant checks every valid [`Grid`](pacmaze_grid::Grid)
//!   must pass.
//! - [`strategy`]: proptest strategies that generate maze sources.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;
pub mod strategy;

pub use compliance::run_full_compliance;
pub use fixtures::Level;

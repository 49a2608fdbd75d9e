//! Error types for grid construction and legend configuration.
//!
//! Every [`GridError`] is detected while a grid is being built; once a grid
//! exists, adjacency building and search are total.

use crate::id::Position;
use std::error::Error;
use std::fmt;

/// Why a maze source was rejected.
///
/// Parsing stops at the first error. Character-level errors
/// (`InvalidCharacter`, `RowWidthMismatch`, `MultipleStartingPositions`) take
/// priority over the end-of-input checks, which run in the order
/// `MissingTrailingLineBreak`, `EmptyOrMissingInput`, `MissingStartingPosition`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A character outside the legend appeared in the source.
    InvalidCharacter {
        /// Where the character was found.
        position: Position,
        /// The offending character.
        symbol: char,
    },
    /// A completed row disagrees with the width set by the first row.
    RowWidthMismatch {
        /// Zero-based index of the offending row.
        row: u32,
        /// Width of the offending row.
        width: u32,
        /// Width established by the first row.
        expected: u32,
    },
    /// A second start marker was found.
    MultipleStartingPositions {
        /// The start marker that was accepted.
        first: Position,
        /// The marker that caused the rejection.
        second: Position,
    },
    /// The last line of the source is not terminated by a line break.
    MissingTrailingLineBreak,
    /// The source held no rows, or could not be read at all.
    EmptyOrMissingInput,
    /// The source is well-formed but has no start marker.
    MissingStartingPosition,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { position, symbol } => {
                write!(f, "invalid input char at pos {position} - {symbol:?}")
            }
            Self::RowWidthMismatch {
                row,
                width,
                expected,
            } => write!(
                f,
                "row {row} width {width}. Expected {expected}. All rows of maze must be equal width"
            ),
            Self::MultipleStartingPositions { first, second } => write!(
                f,
                "only one starting position allowed: found {second} after {first}"
            ),
            Self::MissingTrailingLineBreak => write!(f, "the input must end in a new line"),
            Self::EmptyOrMissingInput => write!(f, "input is empty or does not exist"),
            Self::MissingStartingPosition => write!(f, "missing starting position"),
        }
    }
}

impl Error for GridError {}

/// Errors detected while building a legend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Two roles were given the same character.
    DuplicateSymbol {
        /// The shared character.
        symbol: char,
        /// The role that claimed it first.
        first: &'static str,
        /// The role that tried to reuse it.
        second: &'static str,
    },
    /// A role was given the line terminator, which is reserved for row breaks.
    LineBreakSymbol {
        /// The role in question.
        role: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(f, "symbol {symbol:?} used for both {first} and {second}"),
            Self::LineBreakSymbol { role } => {
                write!(f, "{role} symbol cannot be a line break")
            }
        }
    }
}

impl Error for ConfigError {}

//! Parse errors for board notation.
//!
//! Every `FromStr` in this crate fails with [`NotationError`]; variants carry
//! the offending fragment so callers can point at the bad character instead
//! of re-scanning the input.

use std::{error::Error, fmt};

/// Errors returned when parsing notation such as `e3` or `e3h`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotationError {
    Empty,
    InvalidColumn(char),
    InvalidRow,
    RowOutOfRange(u32),
    InvalidOrientation(char),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "notation is empty"),
            NotationError::InvalidColumn(ch) => {
                write!(f, "column {ch:?} is not a lowercase letter")
            }
            NotationError::InvalidRow => write!(f, "row digits are missing or not a number"),
            NotationError::RowOutOfRange(row) => write!(f, "row {row} is out of range"),
            NotationError::InvalidOrientation(ch) => {
                write!(f, "orientation {ch:?} is neither 'h' nor 'v'")
            }
        }
    }
}

impl Error for NotationError {}

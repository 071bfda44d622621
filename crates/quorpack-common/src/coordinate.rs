//! Board coordinates and the column letter/number bijection.
//!
//! Columns are lowercase letters (`a` is column 1) and rows are 1-based
//! numbers, so the cell player one starts on is written `e1`. [`Coordinate`]
//! keeps both halves as plain numbers; notation parsing and rendering live
//! here so every consumer agrees on the same mapping.

use core::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// Highest column number the notation can express (`z`).
pub const COLUMN_MAX: u8 = 26;

/// 1-based board column, displayed as a lowercase letter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column(u8);

impl Column {
    /// Construct from a 1-based numeric value, panicking outside the
    /// supported range.
    ///
    /// # Panics
    ///
    /// Panics when `number` is not in `1..=26`.
    pub fn from_number(number: u8) -> Self {
        assert!(
            (1..=COLUMN_MAX).contains(&number),
            "column {number} outside 1..={COLUMN_MAX}"
        );
        Self(number)
    }

    /// Fallible counterpart of [`Column::from_number`].
    pub fn try_from_number(number: u8) -> Option<Self> {
        (1..=COLUMN_MAX).contains(&number).then_some(Self(number))
    }

    /// Construct from a notation letter, `'a'` being column 1.
    pub fn from_letter(letter: char) -> Result<Self, NotationError> {
        if letter.is_ascii_lowercase() {
            Ok(Self(letter as u8 - b'a' + 1))
        } else {
            Err(NotationError::InvalidColumn(letter))
        }
    }

    /// 1-based numeric value.
    #[inline(always)]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Notation letter.
    #[inline(always)]
    pub fn letter(self) -> char {
        (b'a' + self.0 - 1) as char
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Absolute board cell: 1-based row plus a [`Column`].
///
/// No board-size upper bound is enforced here; the wire format's field
/// widths are the structural bound, and they differ per context.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: u8,
    pub column: Column,
}

impl Coordinate {
    /// Construct a coordinate.
    ///
    /// # Panics
    ///
    /// Panics when `row` is zero; rows are 1-based.
    pub fn new(row: u8, column: Column) -> Self {
        assert!(row >= 1, "row {row} must be 1-based");
        Self { row, column }
    }

    /// Parse notation such as `e3`. Equivalent to the `FromStr` impl.
    pub fn from_notation(notation: &str) -> Result<Self, NotationError> {
        notation.parse()
    }
}

impl FromStr for Coordinate {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NotationError::Empty)?;
        let column = Column::from_letter(letter)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NotationError::InvalidRow);
        }
        let row: u32 = digits.parse().map_err(|_| NotationError::InvalidRow)?;
        if row < 1 || row > u32::from(u8::MAX) {
            return Err(NotationError::RowOutOfRange(row));
        }
        Ok(Self {
            row: row as u8,
            column,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

//! Players, wall orientations, and the directions a pawn can step.

use core::fmt;
use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::error::NotationError;

/// One of the two players, numbered 1 and 2 in notation and on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// 1-based player number.
    #[inline(always)]
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Orientation of a placed wall.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

impl WallOrientation {
    /// Notation suffix: `h` or `v`.
    #[inline(always)]
    pub fn letter(self) -> char {
        match self {
            WallOrientation::Horizontal => 'h',
            WallOrientation::Vertical => 'v',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, NotationError> {
        match letter {
            'h' => Ok(WallOrientation::Horizontal),
            'v' => Ok(WallOrientation::Vertical),
            other => Err(NotationError::InvalidOrientation(other)),
        }
    }
}

impl fmt::Display for WallOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The eight compass directions a pawn step can take.
///
/// Discriminants are the 3-bit wire codes; the enumeration order is part of
/// the wire format and must not be rearranged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MoveDirection {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
}

impl MoveDirection {
    /// Wire code, `0..=7` in enumeration order.
    #[inline(always)]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => MoveDirection::Up,
            1 => MoveDirection::UpRight,
            2 => MoveDirection::Right,
            3 => MoveDirection::DownRight,
            4 => MoveDirection::Down,
            5 => MoveDirection::DownLeft,
            6 => MoveDirection::Left,
            7 => MoveDirection::UpLeft,
            _ => return None,
        })
    }
}

/// A wall move as written in notation: coordinate plus orientation suffix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallMove {
    pub coordinate: Coordinate,
    pub orientation: WallOrientation,
}

impl WallMove {
    pub fn new(coordinate: Coordinate, orientation: WallOrientation) -> Self {
        Self {
            coordinate,
            orientation,
        }
    }

    /// Parse notation such as `e3h`. Equivalent to the `FromStr` impl.
    pub fn from_notation(notation: &str) -> Result<Self, NotationError> {
        notation.parse()
    }
}

impl FromStr for WallMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suffix = s.chars().next_back().ok_or(NotationError::Empty)?;
        let orientation = WallOrientation::from_letter(suffix)?;
        let coordinate = s[..s.len() - suffix.len_utf8()].parse()?;
        Ok(Self {
            coordinate,
            orientation,
        })
    }
}

impl fmt::Display for WallMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.coordinate, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_numbering() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::from_number(1), Some(Player::One));
        assert_eq!(Player::from_number(2), Some(Player::Two));
        assert_eq!(Player::from_number(3), None);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn orientation_letters() {
        assert_eq!(WallOrientation::Horizontal.letter(), 'h');
        assert_eq!(WallOrientation::Vertical.letter(), 'v');
        assert_eq!(
            WallOrientation::from_letter('h'),
            Ok(WallOrientation::Horizontal)
        );
        assert_eq!(
            WallOrientation::from_letter('x'),
            Err(NotationError::InvalidOrientation('x'))
        );
    }

    #[test]
    fn direction_codes_roundtrip() {
        for code in 0..8 {
            let direction = MoveDirection::from_code(code).unwrap();
            assert_eq!(direction.code(), code);
        }
        assert_eq!(MoveDirection::from_code(8), None);
        assert_eq!(MoveDirection::Up.code(), 0);
        assert_eq!(MoveDirection::UpLeft.code(), 7);
    }

    #[test]
    fn wall_move_parses_notation() {
        let wall: WallMove = "e3h".parse().unwrap();
        assert_eq!(wall.coordinate.to_string(), "e3");
        assert_eq!(wall.orientation, WallOrientation::Horizontal);
        assert_eq!(wall.to_string(), "e3h");

        let wall: WallMove = "b7v".parse().unwrap();
        assert_eq!(wall.orientation, WallOrientation::Vertical);
        assert_eq!(wall.to_string(), "b7v");
    }

    #[test]
    fn wall_move_rejects_malformed_notation() {
        assert_eq!(WallMove::from_notation(""), Err(NotationError::Empty));
        assert_eq!(
            WallMove::from_notation("e3"),
            Err(NotationError::InvalidOrientation('3'))
        );
        assert_eq!(
            WallMove::from_notation("e3x"),
            Err(NotationError::InvalidOrientation('x'))
        );
        assert_eq!(WallMove::from_notation("h"), Err(NotationError::Empty));
    }
}

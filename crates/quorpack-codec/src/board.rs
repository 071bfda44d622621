//! The document model a board code carries.
//!
//! A [`Board`] is plain data: two optional halves, each mirroring one of the
//! wire format's sections. Everything here derives structural equality so a
//! decoded document can be compared field-for-field against the one that was
//! encoded.

use quorpack_common::{Coordinate, MoveDirection, Player, WallMove, WallOrientation};

/// Top-level document: an optional snapshot plus an optional move record.
///
/// Either half may be absent; two leading flag bits on the wire say which
/// halves follow.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub board_state: Option<BoardState>,
    pub record_state: Option<RecordState>,
}

impl From<BoardState> for Board {
    fn from(board_state: BoardState) -> Self {
        Self {
            board_state: Some(board_state),
            record_state: None,
        }
    }
}

impl From<RecordState> for Board {
    fn from(record_state: RecordState) -> Self {
        Self {
            board_state: None,
            record_state: Some(record_state),
        }
    }
}

/// Point-in-time snapshot of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    /// Pawn positions in fixed player order: player one, then player two.
    pub player_positions: [Coordinate; 2],
    /// Every wall standing on the board. Relative order within one
    /// (player, orientation) group survives a round trip; order across
    /// groups does not — decoding always returns the groups in wire order.
    pub walls: Vec<PlacedWall>,
    pub last_move: LastMove,
    /// Move counter; values above 1023 truncate to the 10-bit field.
    pub move_number: u16,
}

/// A wall standing on the board, attributed to the player who placed it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedWall {
    pub player: Player,
    pub coordinate: Coordinate,
    pub orientation: WallOrientation,
}

/// The most recent move and who made it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastMove {
    pub player: Player,
    pub kind: LastMoveKind,
}

/// What the most recent move was.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LastMoveKind {
    /// A pawn step; the destination is already visible in the positions.
    Step,
    /// A wall placed at the carried coordinate.
    WallPlacement(Coordinate),
}

/// Chronological move history.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordState {
    /// Actions in play order; counts above 1023 truncate the 10-bit count
    /// field and desynchronize the stream, so staying under the limit is the
    /// caller's contract.
    pub actions: Vec<ReplayAction>,
}

/// One entry of the move history.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplayAction {
    /// Pawn step in one of the eight compass directions.
    Step(MoveDirection),
    /// Wall placement with its orientation and coordinate.
    Wall(WallMove),
}

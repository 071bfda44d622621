//! Encode and decode Quoridor board codes.
//!
//! A board code is a short string over the base64 alphabet carrying an
//! optional board snapshot and an optional move record, bit-packed back to
//! back with no byte alignment: a presence flag costs one bit, a step
//! direction three, a move counter ten. The layout is schema-on-read — no
//! version tag, no checksum, no length prefix — so both sides must walk the
//! fields in the same fixed order.
//!
//! ```
//! use quorpack_codec::{Board, RecordState, ReplayAction, decode, encode};
//! use quorpack_common::MoveDirection;
//!
//! let board = Board::from(RecordState {
//!     actions: vec![
//!         ReplayAction::Step(MoveDirection::Up),
//!         ReplayAction::Step(MoveDirection::Down),
//!         ReplayAction::Step(MoveDirection::Up),
//!         ReplayAction::Step(MoveDirection::Down),
//!     ],
//! });
//!
//! let code = encode(&board);
//! assert_eq!(code, "QEBAQ");
//! assert_eq!(decode(&code), Ok(board));
//! ```

pub mod bitstream;
pub mod board;
mod error;
mod wire;

pub use bitstream::{BitReader, BitWriter, MAX_FIELD_WIDTH};
pub use board::{
    Board, BoardState, LastMove, LastMoveKind, PlacedWall, RecordState, ReplayAction,
};
pub use error::DecodeError;

/// Render `board` as a board code.
pub fn encode(board: &Board) -> String {
    let mut writer = BitWriter::new();
    wire::write_board(board, &mut writer);
    writer.into_string()
}

/// Parse a board code back into a [`Board`].
///
/// Fails with [`DecodeError::UnexpectedEnd`] when the code is truncated and
/// [`DecodeError::InvalidCharacter`] on characters outside the base64
/// alphabet. Characters past the last field the schema demands are ignored.
pub fn decode(code: &str) -> Result<Board, DecodeError> {
    let mut reader = BitReader::new(code);
    wire::read_board(&mut reader)
}

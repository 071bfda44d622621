//! Field layout of the board-code wire format.
//!
//! Fields are visited in one fixed order on both paths. There is no framing
//! and no length prefix, so encode and decode must agree exactly or every
//! later field desynchronizes.

use quorpack_common::{Column, Coordinate, MoveDirection, Player, WallMove, WallOrientation};

use crate::bitstream::{BitReader, BitWriter};
use crate::board::{
    Board, BoardState, LastMove, LastMoveKind, PlacedWall, RecordState, ReplayAction,
};
use crate::error::DecodeError;

const PLAYER_POSITION_BITS: u32 = 7;
const WALL_POSITION_BITS: u32 = 6;
const WALL_COUNT_BITS: u32 = 4;
const MOVE_NUMBER_BITS: u32 = 10;
const ACTION_COUNT_BITS: u32 = 10;
const DIRECTION_BITS: u32 = 3;

/// Wall groups in wire order. Both paths must walk this exact sequence.
const WALL_BUCKETS: [(Player, WallOrientation); 4] = [
    (Player::One, WallOrientation::Horizontal),
    (Player::One, WallOrientation::Vertical),
    (Player::Two, WallOrientation::Horizontal),
    (Player::Two, WallOrientation::Vertical),
];

/// Coordinate field at a configurable bit width.
///
/// A coordinate flattens row-major onto a grid whose stride is `bits + 2`
/// columns, so one component serves both the 7-bit player-position field
/// (stride 9) and the 6-bit wall field (stride 8).
#[derive(Copy, Clone, Debug)]
struct CoordinateField {
    bits: u32,
    stride: u32,
}

impl CoordinateField {
    const fn new(bits: u32) -> Self {
        Self {
            bits,
            stride: bits + 2,
        }
    }

    fn write(self, writer: &mut BitWriter, coordinate: Coordinate) {
        let index = (u32::from(coordinate.row) - 1) * self.stride
            + u32::from(coordinate.column.number())
            - 1;
        writer.write(self.bits, index);
    }

    fn read(self, reader: &mut BitReader<'_>) -> Result<Coordinate, DecodeError> {
        let index = reader.read(self.bits)?;
        let row = (index / self.stride + 1) as u8;
        let column = Column::from_number((index % self.stride + 1) as u8);
        Ok(Coordinate::new(row, column))
    }
}

const PLAYER_POSITION: CoordinateField = CoordinateField::new(PLAYER_POSITION_BITS);
const WALL_POSITION: CoordinateField = CoordinateField::new(WALL_POSITION_BITS);

pub(crate) fn write_board(board: &Board, writer: &mut BitWriter) {
    writer.write_bool(board.board_state.is_some());
    writer.write_bool(board.record_state.is_some());
    if let Some(board_state) = &board.board_state {
        write_board_state(board_state, writer);
    }
    if let Some(record_state) = &board.record_state {
        write_record_state(record_state, writer);
    }
}

pub(crate) fn read_board(reader: &mut BitReader<'_>) -> Result<Board, DecodeError> {
    let has_board_state = reader.read_bool()?;
    let has_record_state = reader.read_bool()?;
    let board_state = if has_board_state {
        Some(read_board_state(reader)?)
    } else {
        None
    };
    let record_state = if has_record_state {
        Some(read_record_state(reader)?)
    } else {
        None
    };
    Ok(Board {
        board_state,
        record_state,
    })
}

fn write_board_state(state: &BoardState, writer: &mut BitWriter) {
    for position in &state.player_positions {
        PLAYER_POSITION.write(writer, *position);
    }
    for (player, orientation) in WALL_BUCKETS {
        let bucket = state
            .walls
            .iter()
            .filter(|wall| wall.player == player && wall.orientation == orientation);
        writer.write(WALL_COUNT_BITS, bucket.clone().count() as u32);
        for wall in bucket {
            WALL_POSITION.write(writer, wall.coordinate);
        }
    }
    write_last_move(state.last_move, writer);
    writer.write(MOVE_NUMBER_BITS, u32::from(state.move_number));
}

fn read_board_state(reader: &mut BitReader<'_>) -> Result<BoardState, DecodeError> {
    let player_positions = [PLAYER_POSITION.read(reader)?, PLAYER_POSITION.read(reader)?];
    let mut walls = Vec::new();
    for (player, orientation) in WALL_BUCKETS {
        let count = reader.read(WALL_COUNT_BITS)?;
        for _ in 0..count {
            let coordinate = WALL_POSITION.read(reader)?;
            walls.push(PlacedWall {
                player,
                coordinate,
                orientation,
            });
        }
    }
    let last_move = read_last_move(reader)?;
    let move_number = reader.read(MOVE_NUMBER_BITS)? as u16;
    Ok(BoardState {
        player_positions,
        walls,
        last_move,
        move_number,
    })
}

fn write_last_move(last_move: LastMove, writer: &mut BitWriter) {
    writer.write(1, u32::from(last_move.player.number() - 1));
    match last_move.kind {
        LastMoveKind::Step => writer.write_bool(false),
        LastMoveKind::WallPlacement(coordinate) => {
            writer.write_bool(true);
            WALL_POSITION.write(writer, coordinate);
        }
    }
}

fn read_last_move(reader: &mut BitReader<'_>) -> Result<LastMove, DecodeError> {
    let player = if reader.read(1)? == 0 {
        Player::One
    } else {
        Player::Two
    };
    let kind = if reader.read_bool()? {
        LastMoveKind::WallPlacement(WALL_POSITION.read(reader)?)
    } else {
        LastMoveKind::Step
    };
    Ok(LastMove { player, kind })
}

fn write_record_state(record: &RecordState, writer: &mut BitWriter) {
    writer.write(ACTION_COUNT_BITS, record.actions.len() as u32);
    for action in &record.actions {
        match action {
            ReplayAction::Step(direction) => {
                writer.write_bool(false);
                writer.write(DIRECTION_BITS, u32::from(direction.code()));
            }
            ReplayAction::Wall(wall) => {
                writer.write_bool(true);
                write_wall_move(*wall, writer);
            }
        }
    }
}

fn read_record_state(reader: &mut BitReader<'_>) -> Result<RecordState, DecodeError> {
    let count = reader.read(ACTION_COUNT_BITS)?;
    let mut actions = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let action = if reader.read_bool()? {
            ReplayAction::Wall(read_wall_move(reader)?)
        } else {
            let code = reader.read(DIRECTION_BITS)? as u8;
            let direction = MoveDirection::from_code(code).expect("codes 0-7 map to a direction");
            ReplayAction::Step(direction)
        };
        actions.push(action);
    }
    Ok(RecordState { actions })
}

fn write_wall_move(wall: WallMove, writer: &mut BitWriter) {
    let orientation_bit = match wall.orientation {
        WallOrientation::Horizontal => 0,
        WallOrientation::Vertical => 1,
    };
    writer.write(1, orientation_bit);
    WALL_POSITION.write(writer, wall.coordinate);
}

fn read_wall_move(reader: &mut BitReader<'_>) -> Result<WallMove, DecodeError> {
    let orientation = if reader.read(1)? == 0 {
        WallOrientation::Horizontal
    } else {
        WallOrientation::Vertical
    };
    let coordinate = WALL_POSITION.read(reader)?;
    Ok(WallMove {
        coordinate,
        orientation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(notation: &str) -> Coordinate {
        notation.parse().unwrap()
    }

    #[test]
    fn player_positions_flatten_onto_a_nine_wide_grid() {
        let mut writer = BitWriter::new();
        PLAYER_POSITION.write(&mut writer, coord("e5"));
        PLAYER_POSITION.write(&mut writer, coord("e4"));
        let encoded = writer.into_string();
        let mut reader = BitReader::new(&encoded);
        assert_eq!(reader.read(7), Ok(40));
        assert_eq!(reader.read(7), Ok(31));
    }

    #[test]
    fn wall_positions_flatten_onto_an_eight_wide_grid() {
        let mut writer = BitWriter::new();
        WALL_POSITION.write(&mut writer, coord("c3"));
        let encoded = writer.into_string();
        // (3 - 1) * 8 + 3 - 1 = 18 -> 'S'.
        assert_eq!(encoded, "S");
        let mut reader = BitReader::new(&encoded);
        assert_eq!(WALL_POSITION.read(&mut reader), Ok(coord("c3")));
    }

    #[test]
    fn coordinate_field_spans_its_index_space() {
        let mut writer = BitWriter::new();
        WALL_POSITION.write(&mut writer, coord("a1"));
        WALL_POSITION.write(&mut writer, coord("h8"));
        let encoded = writer.into_string();
        let mut reader = BitReader::new(&encoded);
        assert_eq!(reader.read(6), Ok(0));
        assert_eq!(reader.read(6), Ok(63));
    }

    #[test]
    fn last_move_is_tag_then_payload() {
        let mut writer = BitWriter::new();
        write_last_move(
            LastMove {
                player: Player::Two,
                kind: LastMoveKind::Step,
            },
            &mut writer,
        );
        assert_eq!(writer.bits_written(), 2);

        let mut writer = BitWriter::new();
        write_last_move(
            LastMove {
                player: Player::One,
                kind: LastMoveKind::WallPlacement(coord("g7")),
            },
            &mut writer,
        );
        assert_eq!(writer.bits_written(), 8);
        let encoded = writer.into_string();
        let mut reader = BitReader::new(&encoded);
        assert_eq!(reader.read(1), Ok(0));
        assert_eq!(reader.read(1), Ok(1));
        // g7: (7 - 1) * 8 + 7 - 1 = 54.
        assert_eq!(reader.read(6), Ok(54));
    }
}

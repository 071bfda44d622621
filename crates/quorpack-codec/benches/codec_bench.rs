use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quorpack_codec::{
    Board, BoardState, LastMove, LastMoveKind, PlacedWall, RecordState, ReplayAction, decode,
    encode,
};
use quorpack_common::{Column, Coordinate, MoveDirection, Player, WallMove, WallOrientation};

fn coord(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, Column::from_number(col))
}

/// Snapshot with a full complement of twenty walls plus a long record.
fn dense_board() -> Board {
    let mut walls = Vec::new();
    for (player, orientation) in [
        (Player::One, WallOrientation::Horizontal),
        (Player::One, WallOrientation::Vertical),
        (Player::Two, WallOrientation::Horizontal),
        (Player::Two, WallOrientation::Vertical),
    ] {
        for i in 0..5u8 {
            walls.push(PlacedWall {
                player,
                coordinate: coord(i + 1, i + 2),
                orientation,
            });
        }
    }

    let mut actions = Vec::new();
    for i in 0..100u8 {
        if i % 3 == 0 {
            actions.push(ReplayAction::Wall(WallMove {
                coordinate: coord(i % 8 + 1, i % 7 + 1),
                orientation: WallOrientation::Horizontal,
            }));
        } else {
            actions.push(ReplayAction::Step(
                MoveDirection::from_code(i % 8).unwrap(),
            ));
        }
    }

    Board {
        board_state: Some(BoardState {
            player_positions: [coord(5, 5), coord(4, 5)],
            walls,
            last_move: LastMove {
                player: Player::One,
                kind: LastMoveKind::WallPlacement(coord(7, 7)),
            },
            move_number: 120,
        }),
        record_state: Some(RecordState { actions }),
    }
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("BoardCode");

    let board = dense_board();
    let code = encode(&board);

    group.bench_function("Encode/Dense", |b| {
        b.iter(|| encode(black_box(&board)));
    });

    group.bench_function("Decode/Dense", |b| {
        b.iter(|| decode(black_box(&code)).unwrap());
    });

    let empty = Board::default();
    group.bench_function("Encode/Empty", |b| {
        b.iter(|| encode(black_box(&empty)));
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);

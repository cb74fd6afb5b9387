use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_generator::is_open_or_capture;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move;

    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if is_open_or_capture(position, to, side) {
            out.push(ChessMove::new(from, to));
        }
    }
}

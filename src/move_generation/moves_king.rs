use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_generator::is_open_or_capture;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move;

    for (d_row, d_col) in KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if is_open_or_capture(position, to, side) {
            out.push(ChessMove::new(from, to));
        }
    }

    generate_castling_moves(position, from, out);
}

/// Offers a castle when the right is held, the king stands on its home square
/// and every square strictly between king and rook is empty. The rook itself
/// is not looked at, and attacked squares are not considered.
fn generate_castling_moves(position: &Position, king_from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move;
    if king_from != king_home_square(side) {
        return;
    }

    let (kingside, queenside) = match side {
        Color::Light => (CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE),
        Color::Dark => (CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE),
    };
    let row = king_from.row;

    if (position.castling_rights & kingside) != 0
        && cols_empty(position, row, KING_HOME_COL + 1..KINGSIDE_ROOK_COL)
    {
        out.push(ChessMove::new(
            king_from,
            Square {
                row,
                col: KINGSIDE_KING_COL,
            },
        ));
    }

    if (position.castling_rights & queenside) != 0
        && cols_empty(position, row, QUEENSIDE_ROOK_COL + 1..KING_HOME_COL)
    {
        out.push(ChessMove::new(
            king_from,
            Square {
                row,
                col: QUEENSIDE_KING_COL,
            },
        ));
    }
}

fn cols_empty(position: &Position, row: u8, cols: std::ops::Range<u8>) -> bool {
    cols.into_iter().all(|col| position.is_empty(Square { row, col }))
}

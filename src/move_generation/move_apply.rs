//! Move application.
//!
//! `apply_move` never edits its input. It trusts the caller: applying a move
//! that did not come from the generator yields a deterministic but
//! meaningless successor rather than an error.

use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, position::Position};

pub fn apply_move(position: &Position, chess_move: ChessMove) -> Position {
    let ChessMove {
        from,
        to,
        promotion,
    } = chess_move;
    let moving_color = position.side_to_move;
    let moved_piece = position.piece_at(from);
    let is_pawn = matches!(moved_piece, Some(piece) if piece.kind == PieceKind::Pawn);
    let is_king = matches!(moved_piece, Some(piece) if piece.kind == PieceKind::King);

    let mut next = position.clone();
    let mut captured = position.piece_at(to).is_some();

    next.set_piece(from, None);

    if is_pawn && position.en_passant_square == Some(to) {
        // The captured pawn sits one row behind the target from the mover's view.
        if let Some(capture_square) = to.offset(-moving_color.forward(), 0) {
            next.set_piece(capture_square, None);
            captured = true;
        }
    }

    let placed = moved_piece.map(|piece| {
        let kind = match promotion {
            Some(kind) => kind,
            None if is_pawn && to.row == promotion_row(piece.color) => PieceKind::Queen,
            None => piece.kind,
        };
        Piece::new(piece.color, kind)
    });
    next.set_piece(to, placed);

    if is_king && from.row == to.row {
        if let Some((rook_from, rook_to)) = castling_rook_squares(from, to) {
            let rook = next.piece_at(rook_from);
            next.set_piece(rook_from, None);
            next.set_piece(rook_to, rook);
        }
    }

    if let Some(piece) = moved_piece {
        update_castling_rights(&mut next, piece, from);
    }

    next.en_passant_square = if is_pawn && from.row.abs_diff(to.row) == 2 {
        Some(Square {
            row: (from.row + to.row) / 2,
            col: from.col,
        })
    } else {
        None
    };

    if is_pawn || captured {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_color.opposite();
    next
}

/// Rook relocation for the four castling king moves (e1g1, e1c1, e8g8, e8c8).
fn castling_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    let row = from.row;
    if from.col != KING_HOME_COL || (row != back_row(Color::Light) && row != back_row(Color::Dark))
    {
        return None;
    }

    match to.col {
        KINGSIDE_KING_COL => Some((
            Square {
                row,
                col: KINGSIDE_ROOK_COL,
            },
            Square {
                row,
                col: KINGSIDE_ROOK_TARGET_COL,
            },
        )),
        QUEENSIDE_KING_COL => Some((
            Square {
                row,
                col: QUEENSIDE_ROOK_COL,
            },
            Square {
                row,
                col: QUEENSIDE_ROOK_TARGET_COL,
            },
        )),
        _ => None,
    }
}

/// King moves drop both of that color's rights; a rook leaving its original
/// corner drops that side's right. A rook captured in place keeps the right.
fn update_castling_rights(position: &mut Position, moved_piece: Piece, from: Square) {
    let (kingside, queenside) = match moved_piece.color {
        Color::Light => (CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE),
        Color::Dark => (CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE),
    };

    match moved_piece.kind {
        PieceKind::King => position.castling_rights &= !(kingside | queenside),
        PieceKind::Rook if from.row == back_row(moved_piece.color) => match from.col {
            KINGSIDE_ROOK_COL => position.castling_rights &= !kingside,
            QUEENSIDE_ROOK_COL => position.castling_rights &= !queenside,
            _ => {}
        },
        _ => {}
    }
}

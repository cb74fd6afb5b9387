//! Pseudo-legal move generation entry point.
//!
//! Squares are visited in row-major order (a8 first, h1 last) and each piece
//! module emits its moves from fixed offset tables, so identical positions
//! always produce identical move lists. Moves that leave the mover's own king
//! attacked are not filtered out.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_sliding::{
    generate_sliding_moves, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position) -> Vec<ChessMove>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> Vec<ChessMove> {
        generate_pseudo_legal_moves(position)
    }
}

pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<ChessMove> {
    let side = position.side_to_move;
    let mut out = Vec::<ChessMove>::with_capacity(64);

    for (from, piece) in position.pieces() {
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(position, from, &mut out),
            PieceKind::Knight => generate_knight_moves(position, from, &mut out),
            PieceKind::Bishop => generate_sliding_moves(position, from, &BISHOP_DIRECTIONS, &mut out),
            PieceKind::Rook => generate_sliding_moves(position, from, &ROOK_DIRECTIONS, &mut out),
            PieceKind::Queen => generate_sliding_moves(position, from, &QUEEN_DIRECTIONS, &mut out),
            PieceKind::King => generate_king_moves(position, from, &mut out),
        }
    }

    out
}

/// Destination check shared by the step movers: empty or enemy-occupied.
#[inline]
pub(crate) fn is_open_or_capture(position: &Position, square: Square, side: Color) -> bool {
    match position.piece_at(square) {
        None => true,
        Some(piece) => piece.color != side,
    }
}

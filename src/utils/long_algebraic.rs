use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(chess_move: ChessMove) -> String {
    chess_move.to_string()
}

/// Parse a 4- or 5-character move directive such as `e2e4` or `e7e8q`.
///
/// Nothing here consults a position: whether the move is legal, or whether a
/// pawn reaching the last rank needs a promotion letter, is left to the
/// applier.
pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<ChessMove> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessError::InvalidMove(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])
        .map_err(|_| ChessError::InvalidMove(long_algebraic.to_owned()))?;
    let to = algebraic_to_square(&long_algebraic[2..4])
        .map_err(|_| ChessError::InvalidMove(long_algebraic.to_owned()))?;

    let promotion = match long_algebraic[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(ChessMove { from, to, promotion })
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match PieceKind::from_char(ch) {
        Some(piece @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
            Ok(piece)
        }
        _ => Err(ChessError::InvalidPromotion(ch)),
    }
}

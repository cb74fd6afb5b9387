//! Conversions between grid coordinates and square text.
//!
//! Row 0 is rank 8, so `a8 <-> (0, 0)` and `h1 <-> (7, 7)`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert square text (for example: "e4") to a grid square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square {
        row: b'8' - rank,
        col: file - b'a',
    })
}

/// Convert a grid square to its text form (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Convert raw `(row, col)` coordinates to square text.
pub fn coordinates_to_algebraic(row: u8, col: u8) -> ChessResult<String> {
    Square::new(row, col)
        .map(square_to_algebraic)
        .ok_or_else(|| ChessError::InvalidSquare(format!("({row}, {col})")))
}

/// Convert square text to raw `(row, col)` coordinates.
pub fn algebraic_to_coordinates(square: &str) -> ChessResult<(u8, u8)> {
    algebraic_to_square(square).map(|sq| (sq.row, sq.col))
}

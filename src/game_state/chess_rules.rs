//! Canonical chess-rule constants.
//!
//! Starting-position text plus the fixed rows and squares that pawn and
//! castling logic key off.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Row a color's pawns start on (and may double-push from).
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Row on which a color's pawns promote.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_KING_COL: u8 = 6;
pub const QUEENSIDE_KING_COL: u8 = 2;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square {
        row: back_row(color),
        col: KING_HOME_COL,
    }
}

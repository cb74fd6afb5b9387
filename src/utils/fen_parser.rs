//! Position-text parser.
//!
//! Parsing is deliberately lenient: a missing or malformed field is logged
//! and replaced by its default instead of failing the whole parse, and a
//! malformed board layout keeps every piece placed before the problem.

use tracing::warn;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Position {
    let mut parts = fen.split_whitespace();
    let mut position = Position::new_empty();

    match parts.next() {
        Some(board_part) => {
            if let Err(err) = parse_board(board_part, &mut position.board) {
                warn!(%fen, %err, "board layout only partially parsed");
            }
        }
        None => warn!(%fen, "position text is empty"),
    }

    if let Some(side_part) = parts.next() {
        match parse_side_to_move(side_part) {
            Ok(side) => position.side_to_move = side,
            Err(err) => warn!(%fen, %err, "defaulting side to move"),
        }
    }

    if let Some(castling_part) = parts.next() {
        match parse_castling_rights(castling_part) {
            Ok(rights) => position.castling_rights = rights,
            Err(err) => warn!(%fen, %err, "defaulting castling rights"),
        }
    }

    if let Some(en_passant_part) = parts.next() {
        match parse_en_passant_square(en_passant_part) {
            Ok(square) => position.en_passant_square = square,
            Err(err) => warn!(%fen, %err, "defaulting en-passant target"),
        }
    }

    if let Some(halfmove_part) = parts.next() {
        match parse_counter(halfmove_part) {
            Ok(value) => position.halfmove_clock = value,
            Err(err) => warn!(%fen, %err, "defaulting halfmove clock"),
        }
    }

    if let Some(fullmove_part) = parts.next() {
        match parse_counter(fullmove_part) {
            Ok(value) => position.fullmove_number = value,
            Err(err) => warn!(%fen, %err, "defaulting fullmove number"),
        }
    }

    position
}

/// Places pieces rank by rank, top row first. Keeps going past bad input and
/// reports the first problem seen.
fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let mut first_error: Option<ChessError> = None;
    let ranks: Vec<&str> = board_part.split('/').collect();

    if ranks.len() != 8 {
        first_error = Some(ChessError::InvalidBoardLayout(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().take(8).enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    first_error.get_or_insert(ChessError::InvalidBoardLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let Some(piece) = Piece::from_fen_char(ch) else {
                first_error.get_or_insert(ChessError::InvalidPieceChar(ch));
                continue;
            };

            if col >= 8 {
                first_error.get_or_insert(ChessError::InvalidBoardLayout(format!(
                    "rank {} has too many files",
                    8 - row
                )));
                continue;
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            first_error.get_or_insert(ChessError::InvalidBoardLayout(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessError::InvalidCastlingChar(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn parse_counter(counter_part: &str) -> ChessResult<u16> {
    counter_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidCounter(counter_part.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{parse_board, parse_fen};
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_position::render_position;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let position = parse_fen(STARTING_POSITION_FEN);

        println!("\n{}", render_position(&position));

        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(
            position.castling_rights,
            CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );
        assert_eq!(position.en_passant_square, None);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.halfmove_clock, 0);
    }

    #[test]
    fn missing_trailing_fields_take_defaults() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 b");
        assert_eq!(position.side_to_move, Color::Dark);
        assert_eq!(position.castling_rights, 0);
        assert_eq!(position.en_passant_square, None);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.pieces().count(), 2);
    }

    #[test]
    fn malformed_fields_fall_back_without_failing() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 x KQz e9 abc -1");
        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.castling_rights, 0);
        assert_eq!(position.en_passant_square, None);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.pieces().count(), 2);
    }

    #[test]
    fn truncated_board_keeps_placed_pieces() {
        let position = parse_fen("rnbqkbnr/pppppppp");
        assert_eq!(position.pieces().count(), 16);
        assert_eq!(position.side_to_move, Color::Light);

        let empty = parse_fen("");
        assert_eq!(empty.pieces().count(), 0);
    }

    #[test]
    fn board_errors_report_first_problem() {
        let mut board: Board = [[None; 8]; 8];
        let err = parse_board("4x3/8/8/8/8/8/8/8", &mut board).expect_err("x is not a piece");
        assert_eq!(err, ChessError::InvalidPieceChar('x'));

        let mut board: Board = [[None; 8]; 8];
        assert!(parse_board("9/8/8/8/8/8/8/8", &mut board).is_err());
    }

    #[test]
    fn en_passant_field_is_parsed() {
        let position = parse_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
        let e3 = Square::new(5, 4).expect("e3");
        assert_eq!(position.en_passant_square, Some(e3));
    }
}

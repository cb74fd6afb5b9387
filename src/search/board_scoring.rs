//! Static position scoring.
//!
//! Sign convention: positive scores favor White (`Color::Light`), negative
//! scores favor Black, independent of the side to move. The minimax search
//! maximizes when White is to move and minimizes when Black is.

use crate::game_state::{chess_types::*, position::Position};

/// Bonus for a non-king piece standing on the central 4x4 block (c3-f6).
pub const CENTER_BONUS: i32 = 10;

pub trait BoardScorer: Send + Sync {
    /// White-positive score of a position.
    fn score(&self, position: &Position) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    #[inline]
    fn is_central(square: Square) -> bool {
        (2..=5).contains(&square.row) && (2..=5).contains(&square.col)
    }

    fn piece_score(square: Square, piece: Piece) -> i32 {
        let mut value = Self::piece_value(piece.kind);
        if piece.kind != PieceKind::King && Self::is_central(square) {
            value += CENTER_BONUS;
        }

        match piece.color {
            Color::Light => value,
            Color::Dark => -value,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        position
            .pieces()
            .map(|(square, piece)| Self::piece_score(square, piece))
            .sum()
    }
}

/// Convenience wrapper around [`MaterialScorer`].
#[inline]
pub fn evaluate(position: &Position) -> i32 {
    MaterialScorer.score(position)
}

#[cfg(test)]
mod tests {
    use super::{evaluate, MaterialScorer, CENTER_BONUS};
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Position::new_game()), 0);
    }

    #[test]
    fn material_is_white_positive() {
        let white_up_rook = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(evaluate(&white_up_rook), MaterialScorer::piece_value(PieceKind::Rook));

        // Side to move does not change the sign.
        let black_to_move = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
        assert_eq!(evaluate(&black_to_move), evaluate(&white_up_rook));

        let black_up_queen = Position::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&black_up_queen), -900);
    }

    #[test]
    fn central_squares_earn_a_bonus() {
        let central = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
        let rim = Position::from_fen("4k3/8/8/8/N7/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&central), 320 + CENTER_BONUS);
        assert_eq!(evaluate(&rim), 320);

        let black_central = Position::from_fen("4k3/8/2p5/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&black_central), -(100 + CENTER_BONUS));
    }

    #[test]
    fn kings_do_not_take_the_centre_bonus() {
        let position = Position::from_fen("8/8/8/3k4/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&position), 0);
    }

    #[test]
    fn score_after_three_opening_moves() {
        // e4, e5 and Nf3 all land inside the central block.
        let position = Position::from_fen(
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
        );
        assert_eq!(evaluate(&position), CENTER_BONUS);
    }
}

use crate::game_state::chess_rules::{pawn_home_row, promotion_row};
use crate::game_state::{chess_types::*, position::Position};

/// Pushes, double pushes from the home row, and diagonal captures onto enemy
/// pieces or the en-passant target. Reaching the far row always promotes to a
/// queen.
pub fn generate_pawn_moves(position: &Position, from: Square, out: &mut Vec<ChessMove>) {
    let side = position.side_to_move;
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if position.is_empty(one_step) {
            push_pawn_move(side, from, one_step, out);

            if from.row == pawn_home_row(side) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if position.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step));
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, col_delta) else {
            continue;
        };

        if position.is_enemy(to, side) || position.en_passant_square == Some(to) {
            push_pawn_move(side, from, to, out);
        }
    }
}

fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<ChessMove>) {
    if to.row == promotion_row(side) {
        out.push(ChessMove::with_promotion(from, to, PieceKind::Queen));
    } else {
        out.push(ChessMove::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_moves(fen: &str, from: &str) -> Vec<String> {
        let position = Position::from_fen(fen);
        let from = algebraic_to_square(from).expect("square should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&position, from, &mut out);
        out.into_iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn home_row_pawn_pushes_one_or_two() {
        assert_eq!(pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2"), vec!["e2e3", "e2e4"]);
        assert_eq!(pawn_moves("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", "d7"), vec!["d7d6", "d7d5"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        assert!(pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2").is_empty());
        assert_eq!(pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2"), vec!["e2e3"]);
    }

    #[test]
    fn off_home_row_pawn_pushes_once() {
        assert_eq!(pawn_moves("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", "e3"), vec!["e3e4"]);
    }

    #[test]
    fn captures_only_enemy_pieces() {
        let moves = pawn_moves("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves, vec!["e2e3", "e2e4", "e2d3"]);
    }

    #[test]
    fn en_passant_target_is_capturable() {
        let moves = pawn_moves("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1", "d4");
        assert_eq!(moves, vec!["d4d3", "d4e3"]);
    }

    #[test]
    fn far_row_promotes_to_queen() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        assert_eq!(moves, vec!["a7a8q", "a7b8q"]);

        let black = pawn_moves("4k3/8/8/8/8/8/6p1/4K2R b - - 0 1", "g2");
        assert_eq!(black, vec!["g2g1q", "g2h1q"]);
    }
}

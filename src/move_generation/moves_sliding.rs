use crate::game_state::{chess_types::*, position::Position};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Ray-casts from `from` along each direction. A friendly piece ends the ray
/// before its square, an enemy piece ends it on its square.
pub fn generate_sliding_moves(
    position: &Position,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let side = position.side_to_move;

    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match position.piece_at(to) {
                None => out.push(ChessMove::new(from, to)),
                Some(piece) => {
                    if piece.color != side {
                        out.push(ChessMove::new(from, to));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_sliding_moves, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn slider_moves(fen: &str, from: &str, directions: &[(i8, i8)]) -> Vec<String> {
        let position = Position::from_fen(fen);
        let from = algebraic_to_square(from).expect("square should parse");
        let mut out = Vec::new();
        generate_sliding_moves(&position, from, directions, &mut out);
        out.into_iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn rook_on_open_board_sees_fourteen_squares() {
        assert_eq!(slider_moves("7k/8/8/8/3R4/8/8/K7 w - - 0 1", "d4", &ROOK_DIRECTIONS).len(), 14);
    }

    #[test]
    fn rays_stop_at_blockers() {
        // Friendly pawn on d6 stops the ray short, enemy knight on f4 is captured.
        let moves = slider_moves("7k/8/3P4/8/3R1n2/8/8/K7 w - - 0 1", "d4", &ROOK_DIRECTIONS);
        assert!(moves.iter().any(|m| m == "d4d5"));
        assert!(!moves.iter().any(|m| m == "d4d6"));
        assert!(moves.iter().any(|m| m == "d4f4"));
        assert!(!moves.iter().any(|m| m == "d4g4"));
    }

    #[test]
    fn bishop_and_queen_directions() {
        let bishop = slider_moves("7k/8/8/8/3B4/8/8/K7 w - - 0 1", "d4", &BISHOP_DIRECTIONS);
        assert_eq!(bishop.len(), 12);
        assert!(!bishop.iter().any(|m| m == "d4a1"));

        let queen = slider_moves("7k/8/8/8/3Q4/8/8/K7 w - - 0 1", "d4", &QUEEN_DIRECTIONS);
        assert_eq!(queen.len(), 26);
    }
}

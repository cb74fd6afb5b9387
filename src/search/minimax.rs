//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores follow the White-positive convention of `board_scoring`: White
//! nodes maximize, Black nodes minimize. Each call returns its score and the
//! move that produced it; alpha and beta travel as plain arguments.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Score reported for a side with no moves, from the opponent's point of
/// view. Checkmate and stalemate are not told apart.
pub const NO_MOVES_SCORE: i32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub nodes: u64,
}

pub fn search_fixed_depth<G: MoveGenerator, S: BoardScorer>(
    position: &Position,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut nodes = 0u64;
    let (best_score, best_move) = minimax(
        position,
        generator,
        scorer,
        config.depth,
        i32::MIN,
        i32::MAX,
        &mut nodes,
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    position: &Position,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (i32, Option<ChessMove>) {
    *nodes += 1;

    if depth == 0 {
        return (scorer.score(position), None);
    }

    let moves = generator.generate_moves(position);
    if moves.is_empty() {
        return (no_moves_score(position.side_to_move), None);
    }

    let maximizing = position.side_to_move == Color::Light;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for mv in moves {
        let child = apply_move(position, mv);
        let (score, _) = minimax(&child, generator, scorer, depth - 1, alpha, beta, nodes);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}

#[inline]
fn no_moves_score(side_to_move: Color) -> i32 {
    match side_to_move {
        Color::Light => -NO_MOVES_SCORE,
        Color::Dark => NO_MOVES_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::{minimax, search_fixed_depth, SearchConfig, NO_MOVES_SCORE};
    use crate::game_state::position::Position;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
    use crate::search::board_scoring::{evaluate, MaterialScorer};

    fn search(fen: &str, depth: u8) -> super::SearchResult {
        search_fixed_depth(
            &Position::from_fen(fen),
            &PseudoLegalMoveGenerator,
            &MaterialScorer,
            SearchConfig { depth },
        )
    }

    #[test]
    fn depth_zero_returns_static_eval_only() {
        let result = search("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 500);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn white_takes_a_hanging_queen() {
        let result = search("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1", 1);
        let best = result.best_move.expect("a move should be found");
        assert_eq!(best.to_string(), "d1d5");
    }

    #[test]
    fn black_minimizes() {
        let result = search("4k3/8/8/3r4/8/8/8/3QK3 b - - 0 1", 1);
        let best = result.best_move.expect("a move should be found");
        assert_eq!(best.to_string(), "d5d1");
        assert!(result.best_score < 0);
    }

    #[test]
    fn depth_two_avoids_a_defended_pawn() {
        // Qxd5 wins a pawn but loses the queen to exd5.
        let result = search("4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1", 2);
        let best = result.best_move.expect("a move should be found");
        assert_ne!(best.to_string(), "d1d5");
    }

    #[test]
    fn side_without_moves_scores_for_the_opponent() {
        let white_stuck = search("8/8/8/8/8/8/8/k7 w - - 0 1", 2);
        assert_eq!(white_stuck.best_move, None);
        assert_eq!(white_stuck.best_score, -NO_MOVES_SCORE);

        let black_stuck = search("8/8/8/8/8/8/8/K7 b - - 0 1", 2);
        assert_eq!(black_stuck.best_score, NO_MOVES_SCORE);
    }

    #[test]
    fn pruning_matches_plain_minimax_score() {
        let position = Position::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq d3 0 3",
        );
        let mut pruned_nodes = 0;
        let (pruned, _) = minimax(
            &position,
            &PseudoLegalMoveGenerator,
            &MaterialScorer,
            2,
            i32::MIN,
            i32::MAX,
            &mut pruned_nodes,
        );

        let expected = full_width(&position, 2);
        assert_eq!(pruned, expected);
        assert!(pruned_nodes > 1);
    }

    fn full_width(position: &Position, depth: u8) -> i32 {
        use crate::game_state::chess_types::Color;
        use crate::move_generation::move_apply::apply_move;
        use crate::move_generation::move_generator::generate_pseudo_legal_moves;

        if depth == 0 {
            return evaluate(position);
        }
        let scores = generate_pseudo_legal_moves(position)
            .into_iter()
            .map(|mv| full_width(&apply_move(position, mv), depth - 1));
        match position.side_to_move {
            Color::Light => scores.max().unwrap_or(-NO_MOVES_SCORE),
            Color::Dark => scores.min().unwrap_or(NO_MOVES_SCORE),
        }
    }
}

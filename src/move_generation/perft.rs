//! Pseudo-legal perft.
//!
//! Counts leaf positions reachable by generator output. Because self-check is
//! not filtered, counts match published legal perft figures only while no
//! pin or check can arise (for example the first three plies from the
//! starting position).

use crate::game_state::position::Position;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(generator, &apply_move(position, mv), depth - 1))
        .sum()
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_moves(position)
        .into_iter()
        .map(|mv| {
            let nodes = perft(generator, &apply_move(position, mv), depth - 1);
            (mv.to_string(), nodes)
        })
        .collect()
}

//! Crate root module declarations for the worker chess engine.
//!
//! Exposes the position model, pseudo-legal move generation, static scoring,
//! the skill-aware minimax search and the line-protocol session so the
//! binary, tests and benchmarks can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_sliding;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod skill;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod uci {
    pub mod uci_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_position;
}

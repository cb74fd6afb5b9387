//! Engine abstraction layer used by the command session.
//!
//! Defines the search request and result payloads so the session can drive
//! any engine implementation behind a single trait object.

use crate::game_state::{chess_types::ChessMove, position::Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Explicit ply override; the engine still caps it at its ceiling.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn set_skill_level(&mut self, skill_level: u8);

    fn skill_level(&self) -> u8;

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> EngineOutput;
}

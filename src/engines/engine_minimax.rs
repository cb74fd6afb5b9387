//! Skill-aware minimax engine.
//!
//! Holds the session's skill level and random source and delegates each
//! request to the fixed-depth search with skill-based weakening.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::skill::{
    depth_for_skill, find_best_move, WeakeningConfig, DEFAULT_SKILL_LEVEL, MAX_SEARCH_DEPTH,
};

pub struct MinimaxEngine<R: RngCore + Send = StdRng> {
    skill_level: u8,
    weakening: WeakeningConfig,
    move_generator: PseudoLegalMoveGenerator,
    scorer: MaterialScorer,
    rng: R,
}

impl MinimaxEngine<StdRng> {
    pub fn new(skill_level: u8) -> Self {
        Self::with_rng(skill_level, WeakeningConfig::default(), StdRng::from_os_rng())
    }
}

impl Default for MinimaxEngine<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_LEVEL)
    }
}

impl<R: RngCore + Send> MinimaxEngine<R> {
    pub fn with_rng(skill_level: u8, weakening: WeakeningConfig, rng: R) -> Self {
        Self {
            skill_level,
            weakening,
            move_generator: PseudoLegalMoveGenerator,
            scorer: MaterialScorer,
            rng,
        }
    }
}

impl<R: RngCore + Send> Engine for MinimaxEngine<R> {
    fn set_skill_level(&mut self, skill_level: u8) {
        self.skill_level = skill_level;
    }

    fn skill_level(&self) -> u8 {
        self.skill_level
    }

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> EngineOutput {
        let depth = params
            .depth
            .unwrap_or_else(|| depth_for_skill(self.skill_level))
            .clamp(1, MAX_SEARCH_DEPTH);

        let outcome = find_best_move(
            position,
            &self.move_generator,
            &self.scorer,
            depth,
            self.skill_level,
            &self.weakening,
            &mut self.rng,
        );

        EngineOutput {
            best_move: outcome.result.best_move,
            score: outcome.result.best_score,
            depth,
            nodes: outcome.result.nodes,
        }
    }
}

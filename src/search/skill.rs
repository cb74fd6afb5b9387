//! Difficulty handling on top of the fixed-depth search.
//!
//! Skill maps to a search depth through fixed thresholds (capped at three
//! plies), and two random injections weaken play at lower levels:
//!
//! - below skill 5, with probability 0.4 a uniformly random move is played
//!   without searching at all;
//! - below skill 15, after the search, with probability 0.15 the engine
//!   plays a uniformly random move whose resulting static evaluation lies
//!   within 150 centipawns of the best searched score.
//!
//! The random source is passed in so tests can pin every draw.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::position::Position;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{search_fixed_depth, SearchConfig, SearchResult};

pub const MIN_SKILL_LEVEL: u8 = 0;
pub const MAX_SKILL_LEVEL: u8 = 20;
pub const DEFAULT_SKILL_LEVEL: u8 = 10;
pub const MAX_SEARCH_DEPTH: u8 = 3;

/// Fixed skill -> depth thresholds: `<5 -> 1`, `<10 -> 2`, otherwise 3.
#[inline]
pub const fn depth_for_skill(skill_level: u8) -> u8 {
    if skill_level < 5 {
        1
    } else if skill_level < 10 {
        2
    } else if skill_level < 15 {
        3
    } else {
        MAX_SEARCH_DEPTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeakeningConfig {
    /// Skill levels strictly below this may skip the search entirely.
    pub random_move_below_skill: u8,
    pub random_move_probability: f64,
    /// Skill levels strictly below this may swap in a near-best move.
    pub near_best_below_skill: u8,
    pub near_best_probability: f64,
    pub near_best_window_cp: i32,
}

impl Default for WeakeningConfig {
    fn default() -> Self {
        Self {
            random_move_below_skill: 5,
            random_move_probability: 0.4,
            near_best_below_skill: 15,
            near_best_probability: 0.15,
            near_best_window_cp: 150,
        }
    }
}

impl WeakeningConfig {
    /// No random injections at any skill level.
    pub fn disabled() -> Self {
        Self {
            random_move_probability: 0.0,
            near_best_probability: 0.0,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    Searched,
    RandomShortCircuit,
    NearBestAlternative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSearchOutcome {
    pub result: SearchResult,
    pub choice: MoveChoice,
}

/// Search `position` to `depth` plies and apply skill-based weakening.
///
/// `best_move` is `None` only when the side to move has no moves.
pub fn find_best_move<G, S, R>(
    position: &Position,
    generator: &G,
    scorer: &S,
    depth: u8,
    skill_level: u8,
    weakening: &WeakeningConfig,
    rng: &mut R,
) -> SkillSearchOutcome
where
    G: MoveGenerator,
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let depth = depth.min(MAX_SEARCH_DEPTH);

    if skill_level < weakening.random_move_below_skill
        && rng.random_bool(weakening.random_move_probability)
    {
        let moves = generator.generate_moves(position);
        if let Some(&picked) = moves.choose(rng) {
            let result = SearchResult {
                best_move: Some(picked),
                best_score: scorer.score(&apply_move(position, picked)),
                nodes: 0,
            };
            debug!(%picked, skill_level, "random move played without search");
            return SkillSearchOutcome {
                result,
                choice: MoveChoice::RandomShortCircuit,
            };
        }
    }

    let mut result = search_fixed_depth(position, generator, scorer, SearchConfig { depth });
    let mut choice = MoveChoice::Searched;

    if result.best_move.is_some()
        && skill_level < weakening.near_best_below_skill
        && rng.random_bool(weakening.near_best_probability)
    {
        let window = weakening.near_best_window_cp;
        let candidates: Vec<_> = generator
            .generate_moves(position)
            .into_iter()
            .filter_map(|mv| {
                let score = scorer.score(&apply_move(position, mv));
                ((score - result.best_score).abs() <= window).then_some((mv, score))
            })
            .collect();

        if let Some(&(alternative, score)) = candidates.choose(rng) {
            debug!(%alternative, score, candidates = candidates.len(), "near-best alternative chosen");
            result.best_move = Some(alternative);
            result.best_score = score;
            choice = MoveChoice::NearBestAlternative;
        }
    }

    debug!(
        depth,
        skill_level,
        nodes = result.nodes,
        score = result.best_score,
        best = ?result.best_move.map(|mv| mv.to_string()),
        "search finished"
    );

    SkillSearchOutcome { result, choice }
}

//! Line-oriented command session and stdio loop.
//!
//! A `UciSession` owns the base position text, the moves played since the
//! last `position` directive and the engine, which holds the skill level.
//! Directives are handled strictly in the order received. Unknown directives and malformed input
//! never produce an error line: they are logged and otherwise ignored.

use std::io::{self, BufRead, Write};

use tracing::{debug, trace, warn};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::position::Position;
use crate::move_generation::move_apply::apply_move;
use crate::search::board_scoring::evaluate;
use crate::search::skill::{DEFAULT_SKILL_LEVEL, MAX_SEARCH_DEPTH, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_position::render_position;

const UCI_ENGINE_NAME: &str = "Worker Chess";
const UCI_ENGINE_AUTHOR: &str = "worker_chess contributors";
const SKILL_OPTION_NAME: &str = "Skill Level";

/// Depth reported on the `info` line regardless of the depth searched.
pub const NOMINAL_INFO_DEPTH: u8 = MAX_SEARCH_DEPTH;

/// Token emitted in place of a move when the side to move has none.
pub const NO_MOVE_TOKEN: &str = "none";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = UciSession::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct UciSession {
    base_fen: String,
    moves: Vec<String>,
    engine: Box<dyn Engine>,
}

impl Default for UciSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UciSession {
    pub fn new() -> Self {
        Self::with_engine(Box::new(MinimaxEngine::new(DEFAULT_SKILL_LEVEL)))
    }

    /// Session driving a caller-supplied engine, e.g. one with a seeded RNG.
    pub fn with_engine(mut engine: Box<dyn Engine>) -> Self {
        engine.set_skill_level(DEFAULT_SKILL_LEVEL);
        Self {
            base_fen: STARTING_POSITION_FEN.to_owned(),
            moves: Vec::new(),
            engine,
        }
    }

    pub fn skill_level(&self) -> u8 {
        self.engine.skill_level()
    }

    pub fn base_fen(&self) -> &str {
        &self.base_fen
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Handle one input line. Returns `Ok(true)` once the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        trace!(%cmd, line = %trimmed, "directive received");

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", UCI_ENGINE_NAME)?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                writeln!(
                    out,
                    "option name {} type spin default {} min {} max {}",
                    SKILL_OPTION_NAME, DEFAULT_SKILL_LEVEL, MIN_SKILL_LEVEL, MAX_SKILL_LEVEL
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "ucinewgame" => {
                self.base_fen = STARTING_POSITION_FEN.to_owned();
                self.moves.clear();
                self.engine.new_game();
            }
            "setoption" => self.handle_setoption(trimmed),
            "position" => self.handle_position(trimmed),
            "go" => self.handle_go(trimmed, out)?,
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown directives (including stop, ponderhit, debug, register)
                // are ignored without a reply.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case(SKILL_OPTION_NAME) {
            self.engine.set_skill_level(parse_skill_level(&value));
        } else {
            trace!(%name, %value, "ignoring unsupported option");
        }
    }

    fn handle_position(&mut self, line: &str) {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let base_fen = match tokens.next() {
            Some("startpos") => STARTING_POSITION_FEN.to_owned(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.next_if(|tok| *tok != "moves") {
                    fen_parts.push(next);
                }
                if fen_parts.is_empty() {
                    warn!(%line, "position fen without position text; ignoring");
                    return;
                }
                fen_parts.join(" ")
            }
            other => {
                warn!(token = ?other, "unsupported position directive; ignoring");
                return;
            }
        };

        let mut moves = Vec::new();
        if tokens.next_if_eq(&"moves").is_some() {
            moves.extend(tokens.map(str::to_owned));
        }

        self.base_fen = base_fen;
        self.moves = moves;
    }

    /// Base position with every parsable move applied in order.
    pub fn current_position(&self) -> Position {
        let mut position = parse_fen(&self.base_fen);
        for lan in &self.moves {
            match long_algebraic_to_move(lan) {
                Ok(mv) => position = apply_move(&position, mv),
                Err(err) => warn!(%lan, %err, "skipping unparsable move"),
            }
        }
        position
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let params = parse_go_params(line);

        // The replayed position is searched from its serialized text.
        let fen = generate_fen(&self.current_position());
        let position = parse_fen(&fen);
        debug!(
            %fen,
            skill_level = self.skill_level(),
            "search requested\n{}",
            render_position(&position)
        );

        let static_score = evaluate(&position);
        let result = self.engine.choose_move(&position, &params);

        writeln!(out, "info depth {} score cp {}", NOMINAL_INFO_DEPTH, static_score)?;
        match result.best_move {
            Some(best_move) => writeln!(out, "bestmove {}", best_move)?,
            None => writeln!(out, "bestmove {}", NO_MOVE_TOKEN)?,
        }

        Ok(())
    }
}

/// Values outside `0..=20`, or that fail to parse, fall back to the default.
fn parse_skill_level(value: &str) -> u8 {
    match value.trim().parse::<u8>() {
        Ok(level) if (MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&level) => level,
        _ => {
            warn!(%value, "invalid skill level; using default");
            DEFAULT_SKILL_LEVEL
        }
    }
}

fn parse_go_params(line: &str) -> GoParams {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace();
    while let Some(tok) = tokens.next() {
        if tok == "depth" {
            params.depth = tokens.next().and_then(|x| x.parse::<u8>().ok());
        }
    }
    params
}

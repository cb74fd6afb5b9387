//! Error type shared by the parsing helpers.
//!
//! Protocol-facing code never surfaces these to the host: the position parser
//! and the command session downgrade them to `tracing` warnings and fall back
//! to defaults. The strict helpers still return them so callers and tests can
//! see exactly what was wrong.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square text '{0}'")]
    InvalidSquare(String),

    #[error("invalid move text '{0}'")]
    InvalidMove(String),

    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("invalid board layout: {0}")]
    InvalidBoardLayout(String),

    #[error("invalid side-to-move field '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character '{0}'")]
    InvalidCastlingChar(char),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

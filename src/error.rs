//! Error types for the quadline crate

use thiserror::Error;

use crate::logic::grid::Mark;

/// Main error type for the quadline crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("cell {position} is out of bounds (must be 0-15)")]
    InvalidPosition { position: usize },

    #[error("grid must contain exactly {expected} cells, got {got} in '{context}'")]
    InvalidGridLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidMarkCounts { x_count: usize, o_count: usize },

    #[error(
        "wrong starting mark: counts X={x_count}, O={o_count} are inconsistent with {starting} having started"
    )]
    WrongStartingMark {
        starting: Mark,
        x_count: usize,
        o_count: usize,
    },

    #[error("winner {winner} is inconsistent with mark counts X={x_count}, O={o_count}")]
    InconsistentWinner {
        winner: Mark,
        x_count: usize,
        o_count: usize,
    },

    #[error("invalid coordinates '{input}' (expected a column A-D and a row 1-4, like A1 or 1A)")]
    InvalidCoordinate { input: String },

    #[error("players must use different marks")]
    MatchingMarks,

    #[error("player {mark} produced no move in a live game")]
    NoMoveProduced { mark: Mark },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

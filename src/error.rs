//! Error types for the Üç Taş engine

use thiserror::Error;

use crate::board::{Phase, Point, Side};

/// Errors raised when input from outside the engine breaks the game rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("point index {0} is off the board (expected 0..9)")]
    PointOutOfRange(usize),

    #[error("point {0} is already occupied")]
    Occupied(Point),

    #[error("point {point} does not hold a {side:?} piece")]
    NotOwned { point: Point, side: Side },

    #[error("point {to} is not adjacent to {from}")]
    NotAdjacent { from: Point, to: Point },

    #[error("{kind} move is not allowed in the {phase:?} phase")]
    WrongPhase { kind: &'static str, phase: Phase },

    #[error("game already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Side),

    #[error("board string must have 9 cells, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("unknown strategy '{0}' (expected 'optimal' or 'weak')")]
    UnknownStrategy(String),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

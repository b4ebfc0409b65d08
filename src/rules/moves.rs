//! Legal move generation
//!
//! Generation order is part of the contract: placements come in ascending
//! target index, slides in ascending source index and then ascending
//! neighbour index. The search breaks ties by taking the first move it sees,
//! so changing the order changes which of two equal moves is played.

use std::fmt;

use crate::board::{Board, Phase, Point, Side};
use crate::error::{Error, Result};

use super::topology::{are_adjacent, neighbors};

/// A single action by one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Put a new piece on an empty point (placement phase)
    Place { to: Point },
    /// Slide an own piece to an adjacent empty point (movement phase)
    Slide { from: Point, to: Point },
}

impl Move {
    /// Source point, `None` for placements
    #[inline]
    pub fn source(self) -> Option<Point> {
        match self {
            Move::Place { .. } => None,
            Move::Slide { from, .. } => Some(from),
        }
    }

    /// Target point
    #[inline]
    pub fn target(self) -> Point {
        match self {
            Move::Place { to } | Move::Slide { to, .. } => to,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { to } => write!(f, "@{to}"),
            Move::Slide { from, to } => write!(f, "{from}->{to}"),
        }
    }
}

/// All legal moves for `side`.
///
/// Empty only in the movement phase when every piece of `side` is boxed in.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    match board.phase() {
        Phase::Placement => board.empty_points().map(|to| Move::Place { to }).collect(),
        Phase::Movement => {
            let mut moves = Vec::with_capacity(8);
            for from in board.points_of(side) {
                for &to in neighbors(from) {
                    if board.is_empty(to) {
                        moves.push(Move::Slide { from, to });
                    }
                }
            }
            moves
        }
    }
}

/// Check a move coming from outside the engine (e.g. a click) against the
/// rules [`Board::apply`] relies on. Accepts exactly the moves
/// [`legal_moves`] would generate.
pub fn validate_move(board: &Board, mv: Move, side: Side) -> Result<Move> {
    let phase = board.phase();
    match mv {
        Move::Place { to } => {
            if phase != Phase::Placement {
                return Err(Error::WrongPhase {
                    kind: "placement",
                    phase,
                });
            }
            if !board.is_empty(to) {
                return Err(Error::Occupied(to));
            }
        }
        Move::Slide { from, to } => {
            if phase != Phase::Movement {
                return Err(Error::WrongPhase { kind: "slide", phase });
            }
            if board.get(from).side() != Some(side) {
                return Err(Error::NotOwned { point: from, side });
            }
            if !board.is_empty(to) {
                return Err(Error::Occupied(to));
            }
            if !are_adjacent(from, to) {
                return Err(Error::NotAdjacent { from, to });
            }
        }
    }
    Ok(mv)
}

//! Üç Taş AI engine
//!
//! Rules engine and computer opponent for Üç Taş, a Three Men's Morris
//! variant played on a 3x3 grid of points:
//! - Placement phase: players alternate placing pieces until each has three
//! - Movement phase: a piece slides along a grid line to an adjacent empty point
//! - Three pieces in a row or column win (diagonals do not count)
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and phase derivation
//! - [`rules`]: Topology, move generation and win detection
//! - [`eval`]: Static evaluation for search leaves
//! - [`search`]: Minimax with alpha-beta pruning and a transposition table
//! - [`engine`]: Strategy selection (optimal or deliberately weak)
//! - [`session`]: Game state for a front end
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use uctas::{is_win, legal_moves, AIEngine, Board, Side, Strategy};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//!
//! // Human opens in the centre
//! let opening = legal_moves(&board, Side::Human)[4];
//! board = board.apply(opening, Side::Human);
//!
//! // Computer responds
//! if let Some(mv) = engine.choose_move(&board, Strategy::Optimal) {
//!     board = board.apply(mv, Side::Computer);
//! }
//! assert!(!is_win(&board, Side::Computer));
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Phase, Point, Side};
pub use engine::{choose_move, AIEngine, EngineConfig, MoveResult, SearchType, Strategy};
pub use error::{Error, Result};
pub use rules::{is_win, legal_moves, validate_move, Move};
pub use session::{GameSession, Outcome};

/// Current phase of `board`
#[inline]
pub fn phase(board: &Board) -> Phase {
    board.phase()
}

/// `board` after `side` plays `mv`; see [`Board::apply`]
#[inline]
#[must_use]
pub fn apply(board: &Board, mv: Move, side: Side) -> Board {
    board.apply(mv, side)
}

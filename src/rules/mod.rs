//! Game rules for Üç Taş
//!
//! This module implements the rule set:
//! - Fixed topology (adjacency graph and winning lines)
//! - Legal move generation for the placement and movement phases
//! - Win detection (three in a row or column, no diagonals)

pub mod moves;
pub mod topology;
pub mod win;

// Re-exports for convenient access
pub use moves::{legal_moves, validate_move, Move};
pub use topology::{are_adjacent, neighbors, ADJACENCY, WIN_LINES};
pub use win::{is_win, winner, winning_line};

//! Position evaluation
//!
//! Static scoring for positions where the search stops before a win:
//! - Line scoring (two of a kind with the third point open)
//! - Completed-line short circuit
//! - Centre occupancy bonus

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, Evaluator, LineHeuristic};
pub use patterns::LineScore;

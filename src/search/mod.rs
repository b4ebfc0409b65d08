//! Search module for the Üç Taş AI
//!
//! Contains:
//! - Transposition table for caching search results
//! - Depth-bounded minimax with alpha-beta pruning

pub mod alphabeta;
pub mod tt;

pub use alphabeta::{minimax_unpruned, SearchResult, SearchStats, Searcher, INF, MAX_DEPTH, WIN_SCORE};
pub use tt::{EntryType, TTEntry, TTKey, TTStats, TranspositionTable};

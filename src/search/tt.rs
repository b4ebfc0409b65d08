//! Transposition table for caching search results
//!
//! Entries are keyed on (board, side to move, depth) and carry a bound flag,
//! so a score found under one alpha-beta window is only reused where it is
//! conclusive for the current window. Depth is part of the key because win
//! scores depend on how deep the win was found.
//!
//! # Example
//!
//! ```
//! use uctas::search::{EntryType, TTKey, TranspositionTable};
//! use uctas::{Board, Side};
//!
//! let mut tt = TranspositionTable::new();
//! let key = TTKey::new(&Board::new(), Side::Computer, 0);
//!
//! tt.store(key, 4, EntryType::Exact, None);
//! assert_eq!(tt.probe(key, -100, 100), Some((4, None)));
//! ```

use std::collections::HashMap;

use crate::board::{Board, Side};
use crate::rules::Move;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Identity of a search node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TTKey {
    board: u32,
    side: Side,
    depth: u8,
}

impl TTKey {
    #[inline]
    pub fn new(board: &Board, side: Side, depth: u8) -> Self {
        Self {
            board: board.key(),
            side,
            depth,
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Evaluation score
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Move>,
}

/// Unbounded transposition table.
///
/// The whole state space is small (fewer than 3^9 boards per side and
/// depth), so nothing is ever evicted. Only [`TranspositionTable::clear`]
/// empties it, and the searcher never calls that mid-search.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TTKey, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the table for a node.
    ///
    /// Returns `Some((score, best_move))` only when the stored score settles
    /// the node for the window `[alpha, beta]`:
    /// - exact scores always
    /// - lower bounds at or above `beta`
    /// - upper bounds at or below `alpha`
    #[must_use]
    pub fn probe(&self, key: TTKey, alpha: i32, beta: i32) -> Option<(i32, Option<Move>)> {
        let entry = self.entries.get(&key)?;
        let usable = match entry.entry_type {
            EntryType::Exact => true,
            EntryType::LowerBound => entry.score >= beta,
            EntryType::UpperBound => entry.score <= alpha,
        };
        usable.then_some((entry.score, entry.best_move))
    }

    /// Store a node result.
    ///
    /// An exact score is never overwritten by a bound for the same node.
    pub fn store(&mut self, key: TTKey, score: i32, entry_type: EntryType, best_move: Option<Move>) {
        let entry = TTEntry {
            score,
            entry_type,
            best_move,
        };
        match self.entries.get(&key) {
            Some(existing)
                if existing.entry_type == EntryType::Exact && entry_type != EntryType::Exact => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let exact = self
            .entries
            .values()
            .filter(|e| e.entry_type == EntryType::Exact)
            .count();
        TTStats {
            used: self.entries.len(),
            exact,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTStats {
    /// Number of cached nodes
    pub used: usize,
    /// How many of them hold exact scores
    pub exact: usize,
}

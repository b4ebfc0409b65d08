//! Main AI engine: strategy selection on top of the searcher
//!
//! Two strategies are available:
//!
//! 1. **Optimal**: play an immediately winning move if one exists (first in
//!    generation order), otherwise the move the full alpha-beta search picks.
//! 2. **Weak**: score every move by searching the resulting position with the
//!    Human to move, then play the move with the *lowest* score. This walks
//!    straight into the opponent's best reply.
//!
//! # Example
//!
//! ```
//! use uctas::{AIEngine, Board, Move, Point, Strategy};
//!
//! let mut engine = AIEngine::new();
//! let board: Board = "CC. ... ...".parse().unwrap();
//!
//! let mv = engine.choose_move(&board, Strategy::Optimal);
//! assert_eq!(mv, Some(Move::Place { to: Point::new(2) }));
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Side};
use crate::error::Error;
use crate::rules::{is_win, legal_moves, Move};
use crate::search::{Searcher, TTStats, INF, MAX_DEPTH, WIN_SCORE};

/// How the computer chooses its move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Best play found by search, immediate wins first
    #[default]
    Optimal,
    /// Deliberately poor play
    Weak,
}

impl Strategy {
    /// The other strategy
    pub fn toggle(self) -> Self {
        match self {
            Strategy::Optimal => Strategy::Weak,
            Strategy::Weak => Strategy::Optimal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Optimal => "optimal",
            Strategy::Weak => "weak",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `optimal` / `weak` in any case, plus the Turkish names
/// `imkansız` ("impossible") and `kolay` ("easy").
impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "optimal" | "imkansız" | "imkansiz" => Ok(Strategy::Optimal),
            "weak" | "kolay" => Ok(Strategy::Weak),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Which path produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// One-move win found before searching
    ImmediateWin,
    /// Full alpha-beta search
    AlphaBeta,
    /// Lowest-scoring move (weak strategy)
    Weakest,
    /// Computer has no legal move
    NoMove,
}

/// Result of a move choice with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` if the computer has no legal move
    pub best_move: Option<Move>,
    /// Score of the chosen move from the Computer's point of view
    pub score: i32,
    /// Path that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(mv: Move, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: WIN_SCORE - 1,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms,
            nodes: 0,
        }
    }
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth bound for the search (default 16)
    pub max_depth: u8,
    /// Keep a transposition table between searches
    pub use_cache: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            use_cache: true,
        }
    }
}

/// Main AI engine.
///
/// Stateless apart from the searcher's transposition table, which is kept
/// for the engine's lifetime and shared by every call. One search runs at a
/// time; calls block until the search finishes.
pub struct AIEngine {
    searcher: Searcher,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_max_depth(config.max_depth).with_tt(config.use_cache),
        }
    }

    /// Choose the Computer's move on `board`.
    ///
    /// Returns `None` when the Computer has no legal move; the caller decides
    /// whether that is a pass or a stalemate.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board, strategy: Strategy) -> Option<Move> {
        self.choose_move_with_stats(board, strategy).best_move
    }

    /// Choose a move by strategy name.
    ///
    /// An unknown name is not an error: it logs a warning and plays the full
    /// search result without the immediate-win shortcut.
    #[must_use]
    pub fn choose_move_named(&mut self, board: &Board, name: &str) -> Option<Move> {
        match name.parse::<Strategy>() {
            Ok(strategy) => self.choose_move(board, strategy),
            Err(err) => {
                warn!(%err, "falling back to plain search");
                let start = Instant::now();
                if legal_moves(board, Side::Computer).is_empty() {
                    return None;
                }
                self.full_search(board, start).best_move
            }
        }
    }

    /// Choose a move and report how it was found.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, board: &Board, strategy: Strategy) -> MoveResult {
        let start = Instant::now();

        let moves = legal_moves(board, Side::Computer);
        if moves.is_empty() {
            debug!(%board, "computer has no legal move");
            return MoveResult::no_move(elapsed_ms(start));
        }

        let result = match strategy {
            Strategy::Optimal => match find_immediate_win(board, &moves) {
                Some(mv) => MoveResult::immediate_win(mv, elapsed_ms(start)),
                None => self.full_search(board, start),
            },
            Strategy::Weak => self.weakest_move(board, &moves, start),
        };

        debug!(
            %strategy,
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "computer move chosen"
        );
        result
    }

    /// Full alpha-beta search from the root with the Computer to move
    fn full_search(&mut self, board: &Board, start: Instant) -> MoveResult {
        let result = self.searcher.search_root(board, Side::Computer);
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms: elapsed_ms(start),
            nodes: result.nodes,
        }
    }

    /// The move whose resulting position scores lowest for the Computer.
    /// Ties go to the first move generated.
    fn weakest_move(&mut self, board: &Board, moves: &[Move], start: Instant) -> MoveResult {
        let mut worst: Option<(i32, Move)> = None;
        let nodes_before = self.searcher.stats().nodes;

        for &mv in moves {
            let child = board.apply(mv, Side::Computer);
            let (score, _) = self.searcher.search(&child, Side::Human, 1, -INF, INF);
            if worst.map_or(true, |(w, _)| score < w) {
                worst = Some((score, mv));
            }
        }

        let (score, mv) = match worst {
            Some((score, mv)) => (score, Some(mv)),
            None => (0, None),
        };
        MoveResult {
            best_move: mv,
            score,
            search_type: SearchType::Weakest,
            time_ms: elapsed_ms(start),
            nodes: self.searcher.stats().nodes - nodes_before,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }

    /// Change the search depth bound (clears the cache).
    pub fn set_max_depth(&mut self, depth: u8) {
        self.searcher.set_max_depth(depth);
    }

    /// Drop all cached search results.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_tt();
    }

    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

/// One-shot move choice with a fresh engine.
///
/// Callers choosing many moves should keep an [`AIEngine`] around so the
/// search cache is reused.
#[must_use]
pub fn choose_move(board: &Board, strategy: Strategy) -> Option<Move> {
    AIEngine::new().choose_move(board, strategy)
}

/// First move (in generation order) that completes a Computer line
fn find_immediate_win(board: &Board, moves: &[Move]) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|&mv| is_win(&board.apply(mv, Side::Computer), Side::Computer))
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

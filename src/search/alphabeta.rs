//! Minimax search with alpha-beta pruning and a transposition table
//!
//! The Computer maximizes, the Human minimizes. Terminal scores prefer quick
//! wins and slow losses:
//!
//! - Computer has a line: `10 - depth`
//! - Human has a line: `depth - 10`
//! - side to move is stuck, or `depth >= max_depth`: static evaluation
//!
//! Pieces can shuffle back and forth forever in the movement phase, so the
//! depth bound is what guarantees termination. It is a tuning knob, not a
//! rule of the game.
//!
//! # Example
//!
//! ```
//! use uctas::search::Searcher;
//! use uctas::{Board, Move, Point, Side};
//!
//! let mut searcher = Searcher::new();
//! let board: Board = "CC. HH. ...".parse().unwrap();
//!
//! let result = searcher.search_root(&board, Side::Computer);
//! assert_eq!(result.best_move, Some(Move::Place { to: Point::new(2) }));
//! assert_eq!(result.score, 9);
//! ```

use tracing::trace;

use crate::board::{Board, Side};
use crate::eval::{Evaluator, LineHeuristic};
use crate::rules::{is_win, legal_moves, Move};

use super::{EntryType, TTKey, TTStats, TranspositionTable};

/// Default depth bound
pub const MAX_DEPTH: u8 = 16;

/// Base score of a win; the depth at which it is found is subtracted
pub const WIN_SCORE: i32 = 10;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that settled the node
    pub tt_hits: u64,
}

impl SearchStats {
    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` at terminal or stuck positions
    pub best_move: Option<Move>,
    /// Score from the Computer's point of view
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Score of a position where either side already has a line
#[inline]
fn terminal_score(board: &Board, depth: u8) -> Option<i32> {
    if is_win(board, Side::Computer) {
        Some(WIN_SCORE - depth as i32)
    } else if is_win(board, Side::Human) {
        Some(depth as i32 - WIN_SCORE)
    } else {
        None
    }
}

/// Alpha-beta searcher.
///
/// Owns the transposition table, which lives as long as the searcher and
/// keeps growing across searches until [`Searcher::clear_tt`].
pub struct Searcher<E: Evaluator = LineHeuristic> {
    evaluator: E,
    tt: TranspositionTable,
    use_tt: bool,
    max_depth: u8,
    stats: SearchStats,
}

impl Searcher<LineHeuristic> {
    /// Searcher with the default heuristic, depth bound and table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(LineHeuristic, MAX_DEPTH)
    }

    /// Searcher with the default heuristic and a custom depth bound.
    #[must_use]
    pub fn with_max_depth(max_depth: u8) -> Self {
        Self::with_evaluator(LineHeuristic, max_depth)
    }
}

impl Default for Searcher<LineHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Searcher<E> {
    #[must_use]
    pub fn with_evaluator(evaluator: E, max_depth: u8) -> Self {
        Self {
            evaluator,
            tt: TranspositionTable::new(),
            use_tt: true,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    /// Turn the transposition table on or off. Scores and moves are the same
    /// either way; only the work done changes.
    #[must_use]
    pub fn with_tt(mut self, enabled: bool) -> Self {
        self.use_tt = enabled;
        self
    }

    /// Search the whole tree from `board` with `side` to move at depth 0 and
    /// a full window.
    pub fn search_root(&mut self, board: &Board, side: Side) -> SearchResult {
        self.stats = SearchStats::default();
        let (score, best_move) = self.search(board, side, 0, -INF, INF);

        trace!(
            score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            tt_hit_rate = self.stats.tt_hit_rate(),
            tt_used = self.tt.len(),
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            nodes: self.stats.nodes,
            stats: self.stats,
        }
    }

    /// Minimax with alpha-beta pruning from an arbitrary node.
    ///
    /// Returns the score and the first move that reached it. On a cutoff the
    /// best move so far is returned and later siblings are never visited.
    /// Statistics accumulate until the next [`Searcher::search_root`].
    pub fn search(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, depth) {
            return (score, None);
        }

        let moves = legal_moves(board, side);
        if moves.is_empty() || depth >= self.max_depth {
            return (self.evaluator.evaluate(board), None);
        }

        let key = TTKey::new(board, side, depth);
        if self.use_tt {
            self.stats.tt_probes += 1;
            if let Some(hit) = self.tt.probe(key, alpha, beta) {
                self.stats.tt_hits += 1;
                return hit;
            }
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best_move = None;
        let mut best_score;

        match side {
            Side::Computer => {
                best_score = -INF;
                for mv in moves {
                    let child = board.apply(mv, side);
                    let (score, _) = self.search(&child, Side::Human, depth + 1, alpha, beta);
                    if score > best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(best_score);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
            }
            Side::Human => {
                best_score = INF;
                for mv in moves {
                    let child = board.apply(mv, side);
                    let (score, _) = self.search(&child, Side::Computer, depth + 1, alpha, beta);
                    if score < best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(best_score);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
            }
        }

        if self.use_tt {
            let entry_type = if best_score <= alpha_orig {
                EntryType::UpperBound
            } else if best_score >= beta_orig {
                EntryType::LowerBound
            } else {
                EntryType::Exact
            };
            self.tt.store(key, best_score, entry_type, best_move);
        }

        (best_score, best_move)
    }

    /// Statistics of the current or last search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Change the depth bound. Cached scores depend on the bound, so the
    /// table is cleared.
    pub fn set_max_depth(&mut self, max_depth: u8) {
        if max_depth != self.max_depth {
            self.max_depth = max_depth;
            self.tt.clear();
        }
    }

    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

/// Plain minimax without pruning or caching.
///
/// Same terminal rules and tie-breaking as [`Searcher::search`]; exists to
/// check that pruning never changes the result. Exponential, so keep
/// `max_depth` small.
pub fn minimax_unpruned<E: Evaluator>(
    evaluator: &E,
    board: &Board,
    side: Side,
    depth: u8,
    max_depth: u8,
) -> (i32, Option<Move>) {
    if let Some(score) = terminal_score(board, depth) {
        return (score, None);
    }

    let moves = legal_moves(board, side);
    if moves.is_empty() || depth >= max_depth {
        return (evaluator.evaluate(board), None);
    }

    let mut best: Option<(i32, Move)> = None;
    for mv in moves {
        let child = board.apply(mv, side);
        let (score, _) = minimax_unpruned(evaluator, &child, side.opponent(), depth + 1, max_depth);
        let better = match (best, side) {
            (None, _) => true,
            (Some((b, _)), Side::Computer) => score > b,
            (Some((b, _)), Side::Human) => score < b,
        };
        if better {
            best = Some((score, mv));
        }
    }

    match best {
        Some((score, mv)) => (score, Some(mv)),
        None => (evaluator.evaluate(board), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::eval::evaluate;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn place(i: u8) -> Move {
        Move::Place { to: Point::new(i) }
    }

    /// Movement and late-placement positions small enough for plain minimax
    const POSITIONS: [&str; 6] = [
        "CH. HCH ..C",
        "H.C .HC .CH",
        "HC. CH. H.C",
        ".HC CH. H.C",
        "HH. .C. C..",
        "CH. .H. C..",
    ];

    #[test]
    fn test_search_takes_immediate_win() {
        let mut searcher = Searcher::new();
        let result = searcher.search_root(&board("CC. HH. ..."), Side::Computer);
        assert_eq!(result.best_move, Some(place(2)));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_search_blocks_human_line() {
        // H holds 0 and 3; only 6 stops column 0
        let b = board("H.. HC. ...");
        let mut searcher = Searcher::new();
        let result = searcher.search_root(&b, Side::Computer);
        assert_eq!(result.best_move, Some(place(6)));
        assert!(result.score > 2 - WIN_SCORE);
    }

    #[test]
    fn test_terminal_scores() {
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.search(&board("CCC HH. H.."), Side::Human, 3, -INF, INF),
            (WIN_SCORE - 3, None)
        );
        assert_eq!(
            searcher.search(&board("HHH CC. C.."), Side::Computer, 4, -INF, INF),
            (4 - WIN_SCORE, None)
        );
    }

    #[test]
    fn test_depth_cutoff_returns_evaluation() {
        let b = board("CH. HCH ..C");
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.search(&b, Side::Computer, MAX_DEPTH, -INF, INF),
            (evaluate(&b), None)
        );
    }

    #[test]
    fn test_stuck_side_returns_evaluation() {
        // C at 0, 1, 3 boxed in by H at 2, 4, 6
        let b = board("CCH CH. H..");
        assert!(legal_moves(&b, Side::Computer).is_empty());
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.search(&b, Side::Computer, 0, -INF, INF),
            (evaluate(&b), None)
        );
    }

    #[test]
    fn test_movement_search_terminates() {
        // Plenty of room to shuttle pieces back and forth
        let b = board("CH. HCH ..C");
        let mut searcher = Searcher::new().with_tt(false);
        searcher.set_max_depth(8);
        let result = searcher.search_root(&b, Side::Computer);
        assert!(result.best_move.is_some());
        assert!(result.score.abs() <= 100);

        let mut cached = Searcher::new();
        let full = cached.search_root(&b, Side::Computer);
        assert!(full.best_move.is_some());
        assert!(full.nodes > 0);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let depth = 6;
        for s in POSITIONS {
            let b = board(s);
            for side in [Side::Computer, Side::Human] {
                let expected = minimax_unpruned(&LineHeuristic, &b, side, 0, depth);

                let mut pruned = Searcher::with_max_depth(depth).with_tt(false);
                assert_eq!(pruned.search(&b, side, 0, -INF, INF), expected, "{s} {side:?}");

                let mut cached = Searcher::with_max_depth(depth);
                assert_eq!(cached.search(&b, side, 0, -INF, INF), expected, "{s} {side:?} cached");
            }
        }
    }

    #[test]
    fn test_reused_table_gives_same_results() {
        let mut searcher = Searcher::with_max_depth(8);
        let first: Vec<_> = POSITIONS
            .iter()
            .map(|s| searcher.search_root(&board(s), Side::Computer).score)
            .collect();
        let second: Vec<_> = POSITIONS
            .iter()
            .map(|s| searcher.search_root(&board(s), Side::Computer).score)
            .collect();
        assert_eq!(first, second);
        assert!(searcher.tt_stats().used > 0);
    }

    #[test]
    fn test_set_max_depth_clears_table() {
        let mut searcher = Searcher::with_max_depth(6);
        searcher.search_root(&board("CH. HCH ..C"), Side::Computer);
        assert!(searcher.tt_stats().used > 0);

        searcher.set_max_depth(7);
        assert_eq!(searcher.max_depth(), 7);
        assert_eq!(searcher.tt_stats().used, 0);
    }

    #[test]
    fn test_table_does_not_change_result() {
        let b = board("HH. .C. C..");
        let mut plain = Searcher::with_max_depth(10).with_tt(false);
        let mut cached = Searcher::with_max_depth(10);
        let a = plain.search_root(&b, Side::Human);
        let c = cached.search_root(&b, Side::Human);
        assert_eq!(a.score, c.score);
        assert_eq!(a.best_move, c.best_move);
        assert!(c.stats.tt_probes > 0);
        assert_eq!(a.stats.tt_probes, 0);
    }

    struct CenterOnly;

    impl Evaluator for CenterOnly {
        fn evaluate(&self, board: &Board) -> i32 {
            match board.get(Point::CENTER).side() {
                Some(Side::Computer) => 50,
                Some(Side::Human) => -50,
                None => 0,
            }
        }
    }

    #[test]
    fn test_custom_evaluator_is_used_at_cutoff() {
        let b = board("... .C. ...");
        let mut searcher = Searcher::with_evaluator(CenterOnly, 0);
        assert_eq!(searcher.search(&b, Side::Human, 0, -INF, INF), (50, None));
        assert_eq!(searcher.evaluator().evaluate(&Board::new()), 0);
    }
}

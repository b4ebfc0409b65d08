//! Heuristic evaluation for non-terminal positions
//!
//! The search calls this at its depth cutoff and on positions where the side
//! to move is stuck.

use crate::board::{Board, Cell, Point, Side};
use crate::rules::WIN_LINES;

use super::patterns::LineScore;

/// Pluggable static scoring used by the searcher
pub trait Evaluator {
    /// Score `board` from the Computer's point of view (higher is better for it)
    fn evaluate(&self, board: &Board) -> i32;
}

/// Default evaluator: open twos, completed lines and the centre bonus
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHeuristic;

impl Evaluator for LineHeuristic {
    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        evaluate(board)
    }
}

/// Evaluate the board from the Computer's point of view.
///
/// For each winning line:
/// - all three Computer: return `+100` immediately
/// - all three Human: return `-100` immediately
/// - two Computer and one empty: `+3`
/// - two Human and one empty: `-3`
///
/// Then `+1` if the Computer holds the centre, `-1` if the Human does.
///
/// # Example
///
/// ```
/// use uctas::eval::evaluate;
/// use uctas::Board;
///
/// let board: Board = "CC. .H. ...".parse().unwrap();
/// assert_eq!(evaluate(&board), 3 - 1);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for line in WIN_LINES {
        let (computer, human, empty) = count_line(board, &line);

        if computer == 3 {
            return LineScore::COMPLETE;
        }
        if human == 3 {
            return -LineScore::COMPLETE;
        }
        if computer == 2 && empty == 1 {
            score += LineScore::OPEN_TWO;
        }
        if human == 2 && empty == 1 {
            score -= LineScore::OPEN_TWO;
        }
    }

    score + center_bonus(board)
}

/// Count (computer, human, empty) points on a line
#[inline]
fn count_line(board: &Board, line: &[Point; 3]) -> (u8, u8, u8) {
    line.iter().fold((0, 0, 0), |(c, h, e), &p| match board.get(p) {
        Cell::Computer => (c + 1, h, e),
        Cell::Human => (c, h + 1, e),
        Cell::Empty => (c, h, e + 1),
    })
}

#[inline]
fn center_bonus(board: &Board) -> i32 {
    match board.get(Point::CENTER).side() {
        Some(Side::Computer) => LineScore::CENTER,
        Some(Side::Human) => -LineScore::CENTER,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> i32 {
        evaluate(&s.parse::<Board>().unwrap())
    }

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_center_bonus() {
        assert_eq!(eval("... .C. ..."), 1);
        assert_eq!(eval("... .H. ..."), -1);
    }

    #[test]
    fn test_open_two() {
        assert_eq!(eval("CC. ... ..."), 3);
        assert_eq!(eval("H.. ... H.."), -3);
    }

    #[test]
    fn test_blocked_two_scores_nothing() {
        assert_eq!(eval("CCH ... ..."), 0);
    }

    #[test]
    fn test_two_open_lines_add_up() {
        // Row 0 and column 0 both have two C with one gap
        assert_eq!(eval("CC. C.. ..."), 6);
    }

    #[test]
    fn test_centre_counts_with_lines() {
        // Row 1 (.C C), column 1 (.C .) -> row 1 open two; plus centre
        assert_eq!(eval("... .CC ..."), 3 + 1);
        // Column 1 H two, row 1 H two, centre H
        assert_eq!(eval(".H. HH. ..."), -3 - 3 - 1);
    }

    #[test]
    fn test_completed_line_short_circuits() {
        assert_eq!(eval("CCC HH. ..."), LineScore::COMPLETE);
        assert_eq!(eval("CC. HHH ..."), -LineScore::COMPLETE);
    }

    #[test]
    fn test_first_completed_line_wins_the_short_circuit() {
        // Both complete: row 0 is checked before row 1
        assert_eq!(eval("HHH CCC ..."), -LineScore::COMPLETE);
    }

    #[test]
    fn test_evaluator_trait_matches_function() {
        let board: Board = "CH. HC. ...".parse().unwrap();
        assert_eq!(LineHeuristic.evaluate(&board), evaluate(&board));
    }
}

//! Win detection
//!
//! A side wins by holding all three points of a row or a column.

use crate::board::{Board, Cell, Point, Side};

use super::topology::WIN_LINES;

/// Check if `side` holds a complete row or column
#[inline]
pub fn is_win(board: &Board, side: Side) -> bool {
    winning_line(board, side).is_some()
}

/// The first completed line for `side`, in row-then-column order
pub fn winning_line(board: &Board, side: Side) -> Option<[Point; 3]> {
    let cell = Cell::from(side);
    WIN_LINES
        .into_iter()
        .find(|line| line.iter().all(|&p| board.get(p) == cell))
}

/// The side with a completed line, if any.
///
/// Computer is checked first, matching the search's terminal order. Legal
/// play never produces a board where both sides have a line.
pub fn winner(board: &Board) -> Option<Side> {
    [Side::Computer, Side::Human]
        .into_iter()
        .find(|&side| is_win(board, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_rows_and_columns_win() {
        assert!(is_win(&board("CCC ... ..."), Side::Computer));
        assert!(is_win(&board("... HHH ..."), Side::Human));
        assert!(is_win(&board("... ... CCC"), Side::Computer));
        assert!(is_win(&board("H.. H.. H.."), Side::Human));
        assert!(is_win(&board(".C. .C. .C."), Side::Computer));
        assert!(is_win(&board("..H ..H ..H"), Side::Human));
    }

    #[test]
    fn test_diagonals_do_not_win() {
        assert!(!is_win(&board("C.. .C. ..C"), Side::Computer));
        assert!(!is_win(&board("..H .H. H.."), Side::Human));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board("CCH HHC ...");
        assert!(!is_win(&b, Side::Computer));
        assert!(!is_win(&b, Side::Human));
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_winning_line_reports_points() {
        let b = board(".H. .H. .HC");
        assert_eq!(
            winning_line(&b, Side::Human),
            Some([Point::new(1), Point::new(4), Point::new(7)])
        );
        assert_eq!(winning_line(&b, Side::Computer), None);
        assert_eq!(winner(&b), Some(Side::Human));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
    }
}

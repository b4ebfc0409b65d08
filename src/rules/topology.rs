//! Fixed board topology
//!
//! Points are linked along the drawn grid lines only: corners touch their two
//! orthogonal neighbours, edge midpoints touch two corners and the centre, and
//! the centre touches the four edge midpoints. Diagonals are not lines here,
//! neither for movement nor for winning.

use crate::board::{Point, TOTAL_POINTS};

const fn p(index: u8) -> Point {
    Point::new(index)
}

/// Neighbours of each point, ascending
pub const ADJACENCY: [&[Point]; TOTAL_POINTS] = [
    &[p(1), p(3)],
    &[p(0), p(2), p(4)],
    &[p(1), p(5)],
    &[p(0), p(4), p(6)],
    &[p(1), p(3), p(5), p(7)],
    &[p(2), p(4), p(8)],
    &[p(3), p(7)],
    &[p(4), p(6), p(8)],
    &[p(5), p(7)],
];

/// The six winning triples: three rows, then three columns
pub const WIN_LINES: [[Point; 3]; 6] = [
    [p(0), p(1), p(2)],
    [p(3), p(4), p(5)],
    [p(6), p(7), p(8)],
    [p(0), p(3), p(6)],
    [p(1), p(4), p(7)],
    [p(2), p(5), p(8)],
];

#[inline]
pub fn neighbors(point: Point) -> &'static [Point] {
    ADJACENCY[point.index()]
}

#[inline]
pub fn are_adjacent(a: Point, b: Point) -> bool {
    neighbors(a).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        for a in Point::ALL {
            for &b in neighbors(a) {
                assert!(are_adjacent(b, a), "{b} should list {a} as a neighbour");
            }
        }
    }

    #[test]
    fn test_adjacency_follows_grid_lines() {
        for a in Point::ALL {
            for &b in neighbors(a) {
                let dr = (a.row() as i8 - b.row() as i8).abs();
                let dc = (a.col() as i8 - b.col() as i8).abs();
                assert_eq!(dr + dc, 1, "{a}-{b} is not an orthogonal step");
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        let counts: Vec<usize> = Point::ALL.iter().map(|&q| neighbors(q).len()).collect();
        assert_eq!(counts, vec![2, 3, 2, 3, 4, 3, 2, 3, 2]);
    }

    #[test]
    fn test_neighbors_sorted() {
        for a in Point::ALL {
            assert!(neighbors(a).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_win_lines_have_no_diagonals() {
        for line in WIN_LINES {
            let same_row = line.iter().all(|q| q.row() == line[0].row());
            let same_col = line.iter().all(|q| q.col() == line[0].col());
            assert!(same_row || same_col);
        }
    }
}

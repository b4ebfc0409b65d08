use super::*;
use crate::error::Error;
use crate::rules::Move;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Human.opponent(), Side::Computer);
    assert_eq!(Side::Computer.opponent(), Side::Human);
}

#[test]
fn test_cell_side_conversion() {
    assert_eq!(Cell::from(Side::Human), Cell::Human);
    assert_eq!(Cell::from(Side::Computer), Cell::Computer);
    assert_eq!(Cell::Empty.side(), None);
    assert_eq!(Cell::Computer.side(), Some(Side::Computer));
}

#[test]
fn test_point_conversion() {
    let p = Point::new(5);
    assert_eq!(p.row(), 1);
    assert_eq!(p.col(), 2);
    assert_eq!(Point::from_row_col(1, 2), Some(p));
    assert_eq!(Point::from_row_col(3, 0), None);
    assert_eq!(Point::from_index(8), Some(Point::new(8)));
    assert_eq!(Point::from_index(9), None);
    assert_eq!(Point::CENTER.index(), 4);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_POINTS, 9);
    assert_eq!(PLACEMENT_TOTAL, 6);
}

#[test]
fn test_phase_follows_piece_count() {
    let mut board = Board::new();
    assert_eq!(board.phase(), Phase::Placement);

    let order = [0u8, 4, 1, 2, 6, 3];
    for (n, &i) in order.iter().enumerate() {
        let side = if n % 2 == 0 { Side::Human } else { Side::Computer };
        assert_eq!(board.phase(), Phase::Placement, "after {n} pieces");
        board = board.apply(Move::Place { to: Point::new(i) }, side);
    }
    assert_eq!(board.placed(), 6);
    assert_eq!(board.phase(), Phase::Movement);
}

#[test]
fn test_apply_returns_new_board() {
    let board = Board::new();
    let next = board.apply(Move::Place { to: Point::new(2) }, Side::Computer);
    assert_eq!(board, Board::new());
    assert_eq!(next.get(Point::new(2)), Cell::Computer);
    assert_eq!(next.placed(), 1);
}

#[test]
fn test_apply_slide() {
    let board: Board = "CH. HCH ..C".parse().unwrap();
    let next = board.apply(
        Move::Slide { from: Point::new(4), to: Point::new(7) },
        Side::Computer,
    );
    assert!(next.is_empty(Point::new(4)));
    assert_eq!(next.get(Point::new(7)), Cell::Computer);
    assert_eq!(next.count(Side::Computer), 3);
    assert_eq!(next.phase(), Phase::Movement);
}

#[test]
fn test_structural_equality_and_key() {
    let a: Board = "C.. .H. ...".parse().unwrap();
    let mut b = Board::new();
    b.set(Point::new(0), Cell::Computer);
    b.set(Point::new(4), Cell::Human);
    assert_eq!(a, b);
    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), Board::new().key());

    let swapped: Board = "H.. .C. ...".parse().unwrap();
    assert_ne!(a.key(), swapped.key());
}

#[test]
fn test_display_round_trip() {
    let board: Board = "CH./HCH/..C".parse().unwrap();
    assert_eq!(board.to_string(), "C H .\nH C H\n. . C");
    assert_eq!(board.to_string().parse::<Board>(), Ok(board));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        "CC.".parse::<Board>(),
        Err(Error::InvalidBoardLength { got: 3, .. })
    ));
    assert!(matches!(
        "CCX ... ...".parse::<Board>(),
        Err(Error::InvalidCellCharacter { character: 'X', position: 2, .. })
    ));
}

#[test]
fn test_points_of_in_order() {
    let board: Board = "H.C .HC .CH".parse().unwrap();
    let humans: Vec<usize> = board.points_of(Side::Human).map(Point::index).collect();
    assert_eq!(humans, vec![0, 4, 8]);
    let empties: Vec<usize> = board.empty_points().map(Point::index).collect();
    assert_eq!(empties, vec![1, 3, 6]);
}

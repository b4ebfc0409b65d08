//! Board representation for Üç Taş

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board width (3x3 points)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_POINTS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Pieces each side owns once placement completes
pub const PIECES_PER_SIDE: u8 = 3;

/// Total pieces on the board when the movement phase begins
pub const PLACEMENT_TOTAL: u8 = 2 * PIECES_PER_SIDE;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Contents of a single point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Cell {
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Side::Human),
            Cell::Computer => Some(Side::Computer),
        }
    }

    /// Character used by `Board`'s text form
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Computer => 'C',
        }
    }
}

impl From<Side> for Cell {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Cell::Human,
            Side::Computer => Cell::Computer,
        }
    }
}

/// Game phase, always derived from the number of pieces on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fewer than six pieces placed
    Placement,
    /// All six pieces on the board, pieces slide to adjacent points
    Movement,
}

/// One of the nine points, numbered row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(u8);

impl Point {
    pub const CENTER: Point = Point(4);

    /// All points in ascending index order
    pub const ALL: [Point; TOTAL_POINTS] = [
        Point(0),
        Point(1),
        Point(2),
        Point(3),
        Point(4),
        Point(5),
        Point(6),
        Point(7),
        Point(8),
    ];

    #[inline]
    pub const fn new(index: u8) -> Self {
        debug_assert!((index as usize) < TOTAL_POINTS);
        Self(index)
    }

    /// Checked constructor for indices coming from outside the engine
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TOTAL_POINTS).then(|| Self(index as u8))
    }

    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self(row * BOARD_SIZE as u8 + col))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 / BOARD_SIZE as u8
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 % BOARD_SIZE as u8
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

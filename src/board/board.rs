//! Board structure and move application

use std::fmt;
use std::str::FromStr;

use super::{Cell, Phase, Point, Side, PLACEMENT_TOTAL, TOTAL_POINTS};
use crate::error::Error;
use crate::rules::Move;

/// Nine points, each empty or holding one side's piece.
///
/// Equality and hashing are structural, so two boards with the same cells
/// are the same position for search and caching. The phase is never stored;
/// it is recomputed from the piece count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_POINTS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells (index 0 is the top-left point)
    pub fn from_cells(cells: [Cell; TOTAL_POINTS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_POINTS] {
        &self.cells
    }

    /// Get the contents of a point
    #[inline]
    pub fn get(&self, point: Point) -> Cell {
        self.cells[point.index()]
    }

    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        self.get(point) == Cell::Empty
    }

    /// Overwrite a single point. Used to set up positions; game moves go
    /// through [`Board::apply`].
    #[inline]
    pub fn set(&mut self, point: Point, cell: Cell) {
        self.cells[point.index()] = cell;
    }

    /// Number of pieces a side has on the board
    #[inline]
    pub fn count(&self, side: Side) -> u8 {
        let cell = Cell::from(side);
        self.cells.iter().filter(|&&c| c == cell).count() as u8
    }

    /// Total pieces on the board (both sides)
    #[inline]
    pub fn placed(&self) -> u8 {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count() as u8
    }

    /// Current phase: placement until six pieces are down, movement after
    #[inline]
    pub fn phase(&self) -> Phase {
        if self.placed() < PLACEMENT_TOTAL {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }

    /// Empty points in ascending index order
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        Point::ALL.into_iter().filter(move |&p| self.is_empty(p))
    }

    /// Points holding `side`'s pieces in ascending index order
    pub fn points_of(&self, side: Side) -> impl Iterator<Item = Point> + '_ {
        let cell = Cell::from(side);
        Point::ALL.into_iter().filter(move |&p| self.get(p) == cell)
    }

    /// Return the board after `side` plays `mv`.
    ///
    /// A placement sets the target; a slide clears the source and sets the
    /// target. Legality is the move generator's contract: only moves from
    /// [`crate::rules::legal_moves`] or [`crate::rules::validate_move`]
    /// should be applied.
    #[must_use]
    pub fn apply(&self, mv: Move, side: Side) -> Board {
        let mut next = *self;
        match mv {
            Move::Place { to } => {
                debug_assert!(self.is_empty(to), "placement onto occupied point {to}");
                next.cells[to.index()] = Cell::from(side);
            }
            Move::Slide { from, to } => {
                debug_assert_eq!(self.get(from), Cell::from(side), "slide from foreign point {from}");
                debug_assert!(self.is_empty(to), "slide onto occupied point {to}");
                next.cells[from.index()] = Cell::Empty;
                next.cells[to.index()] = Cell::from(side);
            }
        }
        next
    }

    /// Compact structural key: two bits per point, point 0 in the low bits
    #[inline]
    pub fn key(&self) -> u32 {
        self.cells.iter().enumerate().fold(0u32, |acc, (i, &c)| {
            let bits = match c {
                Cell::Empty => 0u32,
                Cell::Human => 1,
                Cell::Computer => 2,
            };
            acc | (bits << (2 * i))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells of `.`, `H` or `C`. Whitespace and `/` are ignored so
/// `"CC./.../..."` and the `Display` form both round-trip.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != TOTAL_POINTS {
            return Err(Error::InvalidBoardLength {
                got: symbols.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; TOTAL_POINTS];
        for (position, (slot, character)) in cells.iter_mut().zip(symbols).enumerate() {
            *slot = match character {
                '.' | '_' => Cell::Empty,
                'H' | 'h' => Cell::Human,
                'C' | 'c' => Cell::Computer,
                character => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    })
                }
            };
        }
        Ok(Self { cells })
    }
}

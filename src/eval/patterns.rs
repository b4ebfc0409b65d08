//! Score weights for line evaluation
//!
//! All scores are from the Computer's point of view: positive favours the
//! Computer, negative favours the Human.

/// Line-pattern weights
pub struct LineScore;

impl LineScore {
    /// A completed line; returned as-is, ignoring everything else
    pub const COMPLETE: i32 = 100;
    /// Two pieces of one side plus an empty point on the same line
    pub const OPEN_TWO: i32 = 3;
    /// Holding the centre point
    pub const CENTER: i32 = 1;
}

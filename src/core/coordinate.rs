//! Grid coordinates.

use core::fmt;

/// A 0-based cell on a board: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Convert caller-supplied signed values, rejecting anything negative or
    /// wider than `u32`.
    pub fn from_signed(x: i64, y: i64) -> Option<Self> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        Some(Self { x, y })
    }

    /// Returns `true` if the cell lies within `[0, width) × [0, height)`.
    pub fn within(&self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// Step `offset` cells along the x axis, `None` on overflow.
    pub(crate) fn step_x(&self, offset: u32) -> Option<Self> {
        self.x.checked_add(offset).map(|x| Self { x, y: self.y })
    }

    /// Step `offset` cells along the y axis, `None` on overflow.
    pub(crate) fn step_y(&self, offset: u32) -> Option<Self> {
        self.y.checked_add(offset).map(|y| Self { x: self.x, y })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//! Board coordinates and diagonal directions.
//!
//! A `Square` is an `(x, y)` pair where `x` is the row (the axis pawns
//! advance along) and `y` the column. Squares are always non-negative;
//! stepping off the low edge yields `None` rather than wrapping.

use serde::{Deserialize, Serialize};

/// A cell address on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: usize,
    pub y: usize,
}

impl Square {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step `steps` times along `dir`.
    ///
    /// Returns `None` if the result would be off the board of the given `size`.
    #[must_use]
    pub fn offset(self, dir: Direction, steps: usize, size: usize) -> Option<Square> {
        let x = step_axis(self.x, dir.dx, steps)?;
        let y = step_axis(self.y, dir.dy, steps)?;
        (x < size && y < size).then_some(Square { x, y })
    }
}

fn step_axis(value: usize, delta: i8, steps: usize) -> Option<usize> {
    let distance = usize::from(delta.unsigned_abs()).checked_mul(steps)?;
    if delta < 0 {
        value.checked_sub(distance)
    } else {
        value.checked_add(distance)
    }
}

impl From<(usize, usize)> for Square {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit diagonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

//! Grid geometry: [`Position`], [`Heading`], [`Tip`], and [`Successors`].
//!
//! Positions are integer cells. A heading counts quarter turns from the
//! positive x-axis and is stored unbounded; only its value modulo 4
//! affects geometry, so `Heading(-1)` and `Heading(3)` step identically.

use smallvec::SmallVec;
use std::fmt;

/// An integer grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing north.
    pub y: i32,
}

impl Position {
    /// The grid origin, where every network is seeded.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in the direction of `heading`.
    ///
    /// Wraps at the `i32` limits; wrapped positions lie far outside any
    /// grid window.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawl_core::{Heading, Position};
    ///
    /// let p = Position::ORIGIN;
    /// assert_eq!(p.step(Heading(0)), Position::new(1, 0));
    /// assert_eq!(p.step(Heading(1)), Position::new(0, 1));
    /// assert_eq!(p.step(Heading(-1)), Position::new(0, -1));
    /// ```
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Direction of travel in quarter turns from the positive x-axis.
///
/// `0, 1, 2, 3` are east, north, west, south. The value is never
/// normalised: turning left from `Heading(0)` yields `Heading(-1)`, and
/// the raw value is what turn events report as their quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Heading(pub i32);

impl Heading {
    /// Unit displacement `(round(cos θ), round(sin θ))` for `θ = heading·π/2`.
    ///
    /// Computed from the heading modulo 4, which is exactly what the
    /// rounded trigonometric form yields for multiples of 90°.
    pub fn offset(self) -> (i32, i32) {
        match self.0.rem_euclid(4) {
            0 => (1, 0),
            1 => (0, 1),
            2 => (-1, 0),
            _ => (0, -1),
        }
    }

    /// The heading rotated by `quarter_turns` (negative is leftward).
    pub fn turned(self, quarter_turns: i32) -> Self {
        // Wrapping keeps the direction: 2^32 is a multiple of four.
        Self(self.0.wrapping_add(quarter_turns))
    }

    /// One quarter turn to the left (`heading − 1`).
    pub fn left(self) -> Self {
        self.turned(-1)
    }

    /// One quarter turn to the right (`heading + 1`).
    pub fn right(self) -> Self {
        self.turned(1)
    }

    /// Whether two headings point the same way (equal modulo 4).
    pub fn is_equivalent(self, other: Heading) -> bool {
        self.0.rem_euclid(4) == other.0.rem_euclid(4)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Heading {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Which way a curved turn bends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    /// Heading decreases by one quarter turn.
    Left,
    /// Heading increases by one quarter turn.
    Right,
}

impl TurnDirection {
    /// The signed quarter-turn delta: `-1` for left, `+1` for right.
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Inverse of [`sign`](Self::sign). Returns `None` for anything but ±1.
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            -1 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }
}

/// One active end of the growing network.
///
/// Tips are immutable: expanding a tip produces new tips and leaves the
/// original untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tip {
    /// Cell the tip currently occupies.
    pub position: Position,
    /// Direction the tip is facing.
    pub heading: Heading,
}

impl Tip {
    /// Create a tip at `position` facing `heading`.
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// The seed tip every network starts from: origin, heading 0.
    pub const fn seed() -> Self {
        Self {
            position: Position::ORIGIN,
            heading: Heading(0),
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.position, self.heading)
    }
}

/// Ordered successor tips produced by one move evaluation.
///
/// No move kind yields more than three successors, so the inline
/// capacity never spills to the heap.
pub type Successors = SmallVec<[Tip; 3]>;

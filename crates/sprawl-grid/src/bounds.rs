//! Running bounding rectangle of visited cells.

use sprawl_core::Position;

/// Axis-aligned rectangle `[min_x, max_x] × [min_y, max_y]`, inclusive.
///
/// Grows as cells are visited; never shrinks. Exposed read-only for
/// camera and viewport logic and has no effect on growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Smallest visited x.
    pub min_x: i32,
    /// Largest visited x.
    pub max_x: i32,
    /// Smallest visited y.
    pub min_y: i32,
    /// Largest visited y.
    pub max_y: i32,
}

impl BoundingBox {
    /// A degenerate box covering the single cell `p`.
    pub fn from_point(p: Position) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// The smallest box covering both `self` and `p`.
    pub fn including(self, p: Position) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            max_x: self.max_x.max(p.x),
            min_y: self.min_y.min(p.y),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Whether `p` lies inside the box (edges inclusive).
    pub fn contains(&self, p: Position) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Horizontal extent in grid units (`max_x − min_x`).
    pub fn span_x(&self) -> u32 {
        self.max_x.abs_diff(self.min_x)
    }

    /// Vertical extent in grid units (`max_y − min_y`).
    pub fn span_y(&self) -> u32 {
        self.max_y.abs_diff(self.min_y)
    }

    /// Centre of the box in grid units.
    pub fn centre(&self) -> (f64, f64) {
        (
            (f64::from(self.min_x) + f64::from(self.max_x)) / 2.0,
            (f64::from(self.min_y) + f64::from(self.max_y)) / 2.0,
        )
    }
}

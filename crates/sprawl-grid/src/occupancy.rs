//! The finite occupancy grid.

use crate::bounds::BoundingBox;
use crate::error::GridError;
use sprawl_core::Position;
use std::fmt;

/// Finite boolean visitation map over a square window centred on the origin.
///
/// The window covers `[-extent, extent]` on both axes, so it holds
/// `(2·extent + 1)²` cells. A cell is *visitable* iff it lies inside the
/// window and has never been marked. The visited set only grows.
///
/// Storage is row-major (`y` outer, `x` inner), which is also the order
/// [`visited_positions`](Self::visited_positions) reports cells in.
#[derive(Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    extent: u32,
    side: usize,
    visited: Vec<bool>,
    visited_count: usize,
    bounds: Option<BoundingBox>,
}

impl OccupancyGrid {
    /// Half-width giving a 1001×1001 window, large enough for any practical run.
    pub const DEFAULT_EXTENT: u32 = 500;

    /// Largest accepted half-width (an 8193×8193 window).
    pub const MAX_EXTENT: u32 = 4096;

    /// Create an empty grid with the given half-width.
    ///
    /// Returns `Err(GridError::ZeroExtent)` for `extent == 0` and
    /// `Err(GridError::ExtentTooLarge)` above [`MAX_EXTENT`](Self::MAX_EXTENT).
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawl_core::Position;
    /// use sprawl_grid::OccupancyGrid;
    ///
    /// let mut grid = OccupancyGrid::new(2).unwrap();
    /// assert_eq!(grid.cell_count(), 25);
    ///
    /// let p = Position::new(1, -2);
    /// assert!(grid.is_visitable(p));
    /// grid.mark_visited(p);
    /// assert!(!grid.is_visitable(p));
    ///
    /// // Outside the window: never visitable, marking is a no-op.
    /// let far = Position::new(3, 0);
    /// assert!(!grid.is_visitable(far));
    /// assert!(!grid.mark_visited(far));
    /// ```
    pub fn new(extent: u32) -> Result<Self, GridError> {
        if extent == 0 {
            return Err(GridError::ZeroExtent);
        }
        if extent > Self::MAX_EXTENT {
            return Err(GridError::ExtentTooLarge {
                value: extent,
                max: Self::MAX_EXTENT,
            });
        }
        let side = 2 * extent as usize + 1;
        Ok(Self {
            extent,
            side,
            visited: vec![false; side * side],
            visited_count: 0,
            bounds: None,
        })
    }

    /// Half-width of the window.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Cells per side (`2·extent + 1`).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells in the window.
    pub fn cell_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of cells marked so far.
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Whether `p` lies inside the window.
    pub fn contains(&self, p: Position) -> bool {
        p.x.unsigned_abs() <= self.extent && p.y.unsigned_abs() <= self.extent
    }

    fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let e = i64::from(self.extent);
        let col = (i64::from(p.x) + e) as usize;
        let row = (i64::from(p.y) + e) as usize;
        Some(row * self.side + col)
    }

    fn position_at(&self, index: usize) -> Position {
        let e = self.extent as i64;
        let row = (index / self.side) as i64;
        let col = (index % self.side) as i64;
        Position::new((col - e) as i32, (row - e) as i32)
    }

    /// True iff `p` is inside the window and not yet visited.
    pub fn is_visitable(&self, p: Position) -> bool {
        match self.index(p) {
            Some(i) => !self.visited[i],
            None => false,
        }
    }

    /// True iff `p` is inside the window and has been visited.
    pub fn is_visited(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| self.visited[i])
    }

    /// Mark `p` visited and fold it into the bounding box.
    ///
    /// Idempotent. Positions outside the window are ignored (no error,
    /// no bounding-box change). Returns `true` only when the cell was
    /// newly marked by this call.
    pub fn mark_visited(&mut self, p: Position) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        if self.visited[i] {
            return false;
        }
        self.visited[i] = true;
        self.visited_count += 1;
        self.bounds = Some(match self.bounds {
            Some(b) => b.including(p),
            None => BoundingBox::from_point(p),
        });
        true
    }

    /// Bounding rectangle of every visited cell, or `None` before the first mark.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// Iterate visited cells in storage order (`y` ascending, then `x`).
    pub fn visited_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| self.position_at(i))
    }

    /// Whether every cell in the window has been visited.
    pub fn is_full(&self) -> bool {
        self.visited_count == self.visited.len()
    }
}

impl fmt::Debug for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupancyGrid")
            .field("extent", &self.extent)
            .field("cell_count", &self.cell_count())
            .field("visited_count", &self.visited_count)
            .field("bounds", &self.bounds)
            .finish()
    }
}

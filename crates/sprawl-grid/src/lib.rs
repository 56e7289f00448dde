//! Occupancy grid for Sprawl road networks.
//!
//! This crate defines [`OccupancyGrid`], the finite visitation map every
//! move consults before growing, along with the running [`BoundingBox`]
//! of everything ever visited.
//!
//! The grid is a square window centred on the origin. Cells outside the
//! window are permanently non-visitable; that is a lookup policy, not an
//! error. Cells are only ever marked, never cleared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod occupancy;

pub use bounds::BoundingBox;
pub use error::GridError;
pub use occupancy::OccupancyGrid;

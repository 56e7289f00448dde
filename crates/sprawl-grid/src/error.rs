//! Error types for grid construction.

use std::fmt;

/// Errors arising from [`OccupancyGrid`](crate::OccupancyGrid) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero half-width.
    ZeroExtent,
    /// The half-width exceeds the supported maximum.
    ExtentTooLarge {
        /// The requested extent.
        value: u32,
        /// The largest accepted extent.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExtent => write!(f, "grid extent must be at least 1"),
            Self::ExtentTooLarge { value, max } => {
                write!(f, "grid extent {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}

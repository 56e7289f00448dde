//! Benchmark profiles and utilities for the Sprawl road-growth engine.
//!
//! Provides pre-built [`GrowthConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 201x201 window (~40K cells) with default weights
//! - [`stress_profile`]: the default 1001x1001 window (~1M cells)
//! - [`scatter_obstacles`]: deterministic obstacle placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sprawl_core::Position;
use sprawl_engine::GrowthConfig;
use sprawl_grid::OccupancyGrid;

/// Build a reference benchmark profile: half-width 100 (201x201 cells).
pub fn reference_profile(seed: u64) -> GrowthConfig {
    GrowthConfig {
        grid_extent: 100,
        ..GrowthConfig::seeded(seed)
    }
}

/// Build a stress benchmark profile at the default window size.
///
/// Same weights as [`reference_profile`] but roughly 25x the cell count.
pub fn stress_profile(seed: u64) -> GrowthConfig {
    GrowthConfig {
        grid_extent: OccupancyGrid::DEFAULT_EXTENT,
        ..GrowthConfig::seeded(seed)
    }
}

/// Deterministic, distinct obstacle positions inside a window of half-width `extent`.
///
/// Uses an LCG so results are identical on every platform. Returns at most
/// one position per cell; `n` is clamped to the window's cell count.
pub fn scatter_obstacles(extent: u32, n: usize, seed: u64) -> Vec<Position> {
    let side = 2 * u64::from(extent) + 1;
    let cells = side * side;
    let n = (n as u64).min(cells);
    let mut taken = std::collections::BTreeSet::new();
    let mut out = Vec::with_capacity(n as usize);

    for i in 0..n {
        let mut idx = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % cells;
        while !taken.insert(idx) {
            idx = (idx + 1) % cells;
        }
        let e = extent as i64;
        let x = (idx % side) as i64 - e;
        let y = (idx / side) as i64 - e;
        out.push(Position::new(x as i32, y as i32));
    }
    out
}

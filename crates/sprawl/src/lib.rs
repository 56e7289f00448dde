//! Sprawl: procedural road networks grown one junction at a time.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Sprawl sub-crates. For most users, adding `sprawl` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sprawl::prelude::*;
//!
//! let config = GrowthConfig {
//!     grid_extent: 24,
//!     ..GrowthConfig::seeded(42)
//! };
//! let mut world = GrowthWorld::new(config, Vec::<RoadEvent>::new()).unwrap();
//!
//! // One generation interval expands the single seed tip once.
//! let metrics = world.advance(world.config().generation_interval).unwrap();
//! assert_eq!(metrics.steps, 1);
//!
//! // Drive with frame-sized slices until every branch has ended.
//! while !world.is_finished() {
//!     world.advance(16.0).unwrap();
//! }
//! assert_eq!(world.frontier_len(), 0);
//! assert!(matches!(world.sink().last(), Some(RoadEvent::Stop(_))));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sprawl-core` | Positions, headings, tips, road events, sinks |
//! | [`grid`] | `sprawl-grid` | Occupancy grid and bounding box |
//! | [`engine`] | `sprawl-engine` | Move catalog, selector, frontier, growth world |
//! | [`replay`] | `sprawl-replay` | Event-stream replay, hashing, and verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core geometry and event types (`sprawl-core`).
///
/// Contains [`types::Position`], [`types::Heading`], [`types::Tip`], the
/// [`types::RoadEvent`] stream, and the [`types::EventSink`] and
/// [`types::RandomSource`] seams.
pub use sprawl_core as types;

/// The finite occupancy window (`sprawl-grid`).
pub use sprawl_grid as grid;

/// Growth engine (`sprawl-engine`).
///
/// [`engine::GrowthWorld`] is the entry point; [`engine::MoveKind`] and
/// [`engine::WeightedSelector`] are exposed for hosts that drive moves
/// directly.
pub use sprawl_engine as engine;

/// Event-stream replay and verification (`sprawl-replay`).
///
/// Redraw a recorded stream with [`replay::replay_into`], rebuild its
/// grid with [`replay::reconstruct_grid`], and check determinism with
/// [`replay::replay_and_compare`].
pub use sprawl_replay as replay;

/// Common imports for typical Sprawl usage.
///
/// ```rust
/// use sprawl::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sprawl_core::{EventSink, Heading, Position, RandomSource, RoadEvent, Tip};

    // Errors
    pub use sprawl_core::StepError;
    pub use sprawl_engine::ConfigError;

    // Grid
    pub use sprawl_grid::{BoundingBox, OccupancyGrid};

    // Engine
    pub use sprawl_engine::{AdvanceMetrics, CatchUp, GrowthConfig, GrowthWorld, WeightTable};
}

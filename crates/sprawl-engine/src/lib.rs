//! Growth engine for procedural road networks.
//!
//! A [`GrowthWorld`] starts from a single tip at the origin and grows a
//! network of roads breadth-first. Each tip is expanded by one of eight
//! [`MoveKind`]s, chosen by a [`WeightedSelector`] that probes each
//! candidate against the occupancy grid before committing it. The
//! [`Frontier`] turns elapsed host time into a number of expansions, so
//! growth rate scales with the number of active tips.
//!
//! Geometry is emitted as [`RoadEvent`](sprawl_core::RoadEvent)s to an
//! [`EventSink`](sprawl_core::EventSink) in commit order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod frontier;
pub mod metrics;
pub mod moves;
pub mod random;
pub mod selector;
pub mod world;

pub use config::{CatchUp, ConfigError, GrowthConfig, WeightTable};
pub use frontier::Frontier;
pub use metrics::{AdvanceMetrics, GrowthStats};
pub use moves::{Mode, MovePlan, MoveKind};
pub use random::ChaChaSource;
pub use selector::{Expansion, MoveCatalog, WeightedSelector};
pub use world::GrowthWorld;

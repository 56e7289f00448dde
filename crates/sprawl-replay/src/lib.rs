//! Replay and determinism checks for Sprawl growth runs.
//!
//! A growth run is fully described by its seed, its configuration, and
//! the ordered stream of [`RoadEvent`](sprawl_core::RoadEvent)s it
//! published. This crate works on that in-memory stream: it plays it
//! back into any sink, rebuilds occupancy from it, and checks that a
//! re-run produces the identical stream.
//!
//! # Architecture
//!
//! - [`replay_into`] pushes a recorded stream through any
//!   [`EventSink`](sprawl_core::EventSink), e.g. to redraw after a resize
//! - [`compare_events`] and [`replay_and_compare`] verify determinism
//! - [`events_hash`] and [`grid_hash`] give cheap fingerprints for
//!   equality checks
//! - [`reconstruct_grid`] rebuilds occupancy from events alone

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod playback;
pub mod reconstruct;

pub use compare::{compare_events, replay_and_compare, DivergenceReport};
pub use error::ReplayError;
pub use hash::{events_hash, grid_hash};
pub use playback::replay_into;
pub use reconstruct::reconstruct_grid;

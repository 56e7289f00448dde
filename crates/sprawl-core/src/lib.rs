//! Core types and traits for the Sprawl road-growth engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Sprawl workspace:
//! grid geometry (positions, headings, tips), the structural event
//! stream published to renderers, the random-source seam, and the
//! step-time error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod geometry;
pub mod random;

pub use error::StepError;
pub use event::{EventSink, NullSink, RoadEvent};
pub use geometry::{Heading, Position, Successors, Tip, TurnDirection};
pub use random::RandomSource;

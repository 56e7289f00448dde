//! The structural event stream published to renderers.
//!
//! Every successful commit publishes events through an [`EventSink`] in
//! commit order. Replaying the stream in the same order reconstructs the
//! full visible network.

use crate::geometry::{Heading, Position, TurnDirection};

/// A structural change to the road network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadEvent {
    /// The seed position, published once at initialization.
    Point(Position),
    /// A straight road from one cell to its neighbour.
    Segment {
        /// Cell the road starts from.
        from: Position,
        /// Newly occupied cell the road ends at.
        to: Position,
    },
    /// A quarter-circle turn of radius one around `centre`.
    Arc {
        /// Centre of the arc.
        centre: Position,
        /// The turning tip's heading at commit time (start angle = quadrant·π/2).
        quadrant: Heading,
        /// Which way the road bends.
        direction: TurnDirection,
    },
    /// A dead end at the given position.
    Stop(Position),
}

impl RoadEvent {
    /// Short, stable name of the event variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Segment { .. } => "segment",
            Self::Arc { .. } => "arc",
            Self::Stop(_) => "stop",
        }
    }
}

/// Receiver of structural events.
///
/// The engine owns its sink and calls [`publish`](EventSink::publish)
/// synchronously, once per event, on the engine's own thread.
///
/// # Examples
///
/// ```
/// use sprawl_core::{EventSink, Position, RoadEvent};
///
/// #[derive(Default)]
/// struct StopCounter(usize);
///
/// impl EventSink for StopCounter {
///     fn publish(&mut self, event: RoadEvent) {
///         if let RoadEvent::Stop(_) = event {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut sink = StopCounter::default();
/// sink.publish(RoadEvent::Stop(Position::ORIGIN));
/// sink.publish(RoadEvent::Point(Position::ORIGIN));
/// assert_eq!(sink.0, 1);
/// ```
pub trait EventSink {
    /// Receive one event.
    fn publish(&mut self, event: RoadEvent);
}

impl EventSink for Vec<RoadEvent> {
    fn publish(&mut self, event: RoadEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn publish(&mut self, event: RoadEvent) {
        (**self).publish(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn publish(&mut self, event: RoadEvent) {
        (**self).publish(event);
    }
}

/// A sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: RoadEvent) {}
}

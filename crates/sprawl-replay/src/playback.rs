//! Push a recorded event stream through a sink.

use sprawl_core::{EventSink, RoadEvent};

/// Publish every event in `events` to `sink`, in order.
///
/// Returns the number of events delivered. A renderer that lost its
/// drawing (e.g. on resize) redraws the whole network this way.
pub fn replay_into(events: &[RoadEvent], sink: &mut dyn EventSink) -> usize {
    for &event in events {
        sink.publish(event);
    }
    events.len()
}

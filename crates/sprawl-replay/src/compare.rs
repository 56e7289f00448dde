//! Event-stream comparison and replay verification.
//!
//! Provides hash-first comparison (fast path) with an element-wise scan
//! on mismatch, plus a driver that re-grows a recorded run and compares
//! it against the recording.

use sprawl_core::RoadEvent;
use sprawl_engine::{GrowthConfig, GrowthWorld};
use tracing::{debug, warn};

use crate::error::ReplayError;
use crate::hash::events_hash;

/// The first point at which two event streams differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Index of the first differing event.
    pub index: usize,
    /// The recorded event at `index`, or `None` if the recording ended first.
    pub recorded: Option<RoadEvent>,
    /// The replayed event at `index`, or `None` if the replay ended first.
    pub replayed: Option<RoadEvent>,
}

/// Compare two event streams.
///
/// Returns `None` if they are identical, otherwise the first divergence.
/// A stream that is a strict prefix of the other diverges at its length.
pub fn compare_events(recorded: &[RoadEvent], replayed: &[RoadEvent]) -> Option<DivergenceReport> {
    if recorded.len() == replayed.len() && events_hash(recorded) == events_hash(replayed) {
        // Hash equality is the fast path; confirm to rule out collisions.
        if recorded == replayed {
            return None;
        }
    }
    let index = recorded
        .iter()
        .zip(replayed)
        .position(|(a, b)| a != b)
        .unwrap_or(recorded.len().min(replayed.len()));
    Some(DivergenceReport {
        index,
        recorded: recorded.get(index).copied(),
        replayed: replayed.get(index).copied(),
    })
}

/// Re-grow a run from `seed` under `config` and compare its event
/// stream against `recorded`.
///
/// `config.seed` is ignored in favour of `seed`. The recording is
/// expected to hold a complete run; one cut short reports a divergence
/// where it ends.
///
/// Returns `Ok(None)` if every event matches, or `Ok(Some(report))` at
/// the first divergence.
pub fn replay_and_compare(
    recorded: &[RoadEvent],
    seed: u64,
    config: &GrowthConfig,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let config = GrowthConfig {
        seed: Some(seed),
        ..config.clone()
    };
    let mut world = GrowthWorld::new(config, Vec::<RoadEvent>::new())?;
    world.run_to_completion()?;
    let replayed = world.into_sink();

    match compare_events(recorded, &replayed) {
        Some(report) => {
            warn!(index = report.index, seed, "replay diverged from recording");
            Ok(Some(report))
        }
        None => {
            debug!(events = replayed.len(), seed, "replay matched recording");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_core::Position;
    use sprawl_engine::{MoveKind, WeightTable};

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Straight-heavy, so a run always lays several events before ending.
    fn config() -> GrowthConfig {
        GrowthConfig {
            grid_extent: 8,
            weights: WeightTable::uniform(1).with(MoveKind::Straight, 1_000_000),
            ..GrowthConfig::seeded(5)
        }
    }

    fn recorded(config: &GrowthConfig) -> Vec<RoadEvent> {
        let mut world = GrowthWorld::new(config.clone(), Vec::<RoadEvent>::new()).unwrap();
        world.run_to_completion().unwrap();
        world.into_sink()
    }

    // ── compare_events ──────────────────────────────────────────

    #[test]
    fn identical_streams_match() {
        let a = vec![RoadEvent::Point(p(0, 0)), RoadEvent::Stop(p(0, 0))];
        assert!(compare_events(&a, &a).is_none());
    }

    #[test]
    fn first_difference_reported() {
        let a = vec![
            RoadEvent::Point(p(0, 0)),
            RoadEvent::Stop(p(0, 0)),
            RoadEvent::Stop(p(1, 0)),
        ];
        let mut b = a.clone();
        b[1] = RoadEvent::Stop(p(9, 9));
        let report = compare_events(&a, &b).unwrap();
        assert_eq!(report.index, 1);
        assert_eq!(report.recorded, Some(RoadEvent::Stop(p(0, 0))));
        assert_eq!(report.replayed, Some(RoadEvent::Stop(p(9, 9))));
    }

    #[test]
    fn prefix_diverges_at_its_length() {
        let a = vec![RoadEvent::Point(p(0, 0)), RoadEvent::Stop(p(0, 0))];
        let report = compare_events(&a[..1], &a).unwrap();
        assert_eq!(report.index, 1);
        assert_eq!(report.recorded, None);
        assert_eq!(report.replayed, Some(RoadEvent::Stop(p(0, 0))));
    }

    // ── replay_and_compare ──────────────────────────────────────

    #[test]
    fn recorded_run_replays_exactly() {
        let config = config();
        let events = recorded(&config);
        assert!(replay_and_compare(&events, 5, &config).unwrap().is_none());
    }

    #[test]
    fn explicit_seed_overrides_config_seed() {
        let events = recorded(&config());
        let unseeded = GrowthConfig {
            seed: None,
            ..config()
        };
        assert!(replay_and_compare(&events, 5, &unseeded).unwrap().is_none());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let events = recorded(&config());
        let broken = GrowthConfig {
            generation_interval: -1.0,
            ..config()
        };
        match replay_and_compare(&events, 5, &broken) {
            Err(ReplayError::Config(_)) => {}
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn truncated_recording_reports_divergence_at_cut() {
        let config = config();
        let events = recorded(&config);
        assert!(events.len() > 2);

        let report = replay_and_compare(&events[..2], 5, &config)
            .unwrap()
            .unwrap();
        assert_eq!(report.index, 2);
        assert_eq!(report.recorded, None);
        assert_eq!(report.replayed, Some(events[2]));
    }

    #[test]
    fn tampered_recording_reports_first_bad_event() {
        let config = config();
        let mut events = recorded(&config);
        events[1] = RoadEvent::Stop(p(4, 4));

        let report = replay_and_compare(&events, 5, &config).unwrap().unwrap();
        assert_eq!(report.index, 1);
        assert_eq!(report.recorded, Some(RoadEvent::Stop(p(4, 4))));
    }
}

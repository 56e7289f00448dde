//! Per-advance and cumulative growth metrics.
//!
//! [`AdvanceMetrics`] describes one [`advance()`](crate::GrowthWorld::advance)
//! call. [`GrowthStats`] accumulates over the life of a world and is
//! reset with it.

use crate::moves::MoveKind;

/// Counters and timing for a single `advance()` call.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdvanceMetrics {
    /// Wall-clock time for the whole call, in microseconds.
    pub total_us: u64,
    /// Expansions performed.
    pub steps: u64,
    /// Events published to the sink.
    pub events: u64,
    /// Kinds probed and rejected across all expansions.
    pub rejected_probes: u64,
    /// Expansions that fell through to a forced dead end.
    pub forced_dead_ends: u64,
    /// Frontier size after the call.
    pub frontier_len: usize,
    /// Fractional budget carried into the next call.
    pub carry: f64,
}

/// Cumulative counters since construction or the last reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Total expansions.
    pub expansions: u64,
    /// Total events published, including the initial point.
    pub events: u64,
    /// Total rejected probes.
    pub rejected_probes: u64,
    /// Total forced dead ends.
    pub forced_dead_ends: u64,
    commits: [u64; MoveKind::COUNT],
}

impl GrowthStats {
    /// Times `kind` was committed.
    pub fn commits(&self, kind: MoveKind) -> u64 {
        self.commits[kind.index()]
    }

    pub(crate) fn record_commit(&mut self, kind: MoveKind) {
        self.commits[kind.index()] += 1;
    }
}

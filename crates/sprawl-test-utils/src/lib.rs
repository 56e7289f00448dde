//! Test utilities and scripted sources for Sprawl development.
//!
//! Provides deterministic [`RandomSource`] implementations for driving
//! the selector to a chosen move, and grid fixtures for building
//! obstructed neighbourhoods.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use sprawl_core::{Position, RandomSource, RoadEvent};
use sprawl_grid::OccupancyGrid;

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Panics on construction with an empty list.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "ScriptedRandom needs at least one draw");
        Self { draws, next: 0 }
    }

    /// Always returns `u`.
    pub fn constant(u: f64) -> Self {
        Self::new(vec![u])
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let u = self.draws[self.next % self.draws.len()];
        self.next += 1;
        u
    }
}

/// Yields `good` for `healthy_draws` calls, then `bad` forever.
#[derive(Clone, Debug)]
pub struct BrokenRandom {
    healthy_draws: usize,
    taken: usize,
    good: f64,
    bad: f64,
}

impl BrokenRandom {
    pub fn new(healthy_draws: usize, good: f64, bad: f64) -> Self {
        Self {
            healthy_draws,
            taken: 0,
            good,
            bad,
        }
    }

    /// Broken from the first draw, yielding `bad`.
    pub fn immediately(bad: f64) -> Self {
        Self::new(0, 0.0, bad)
    }
}

impl RandomSource for BrokenRandom {
    fn next_unit(&mut self) -> f64 {
        self.taken += 1;
        if self.taken > self.healthy_draws {
            self.bad
        } else {
            self.good
        }
    }
}

/// A grid of half-width `extent` with every cell in `cells` visited.
pub fn blocked_grid(extent: u32, cells: &[(i32, i32)]) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(extent).expect("fixture extent must be valid");
    for &(x, y) in cells {
        grid.mark_visited(Position::new(x, y));
    }
    grid
}

/// Positions of every `Segment` destination, `Arc` centre, and `Point`
/// in `events`, in order. Handy for asserting on the path a run took.
pub fn event_positions(events: &[RoadEvent]) -> Vec<Position> {
    events
        .iter()
        .filter_map(|e| match *e {
            RoadEvent::Point(p) => Some(p),
            RoadEvent::Segment { to, .. } => Some(to),
            RoadEvent::Arc { centre, .. } => Some(centre),
            RoadEvent::Stop(_) => None,
        })
        .collect()
}

/// Count events by variant: `(points, segments, arcs, stops)`.
pub fn event_counts(events: &[RoadEvent]) -> (usize, usize, usize, usize) {
    events.iter().fold((0, 0, 0, 0), |(p, s, a, t), e| match e {
        RoadEvent::Point(_) => (p + 1, s, a, t),
        RoadEvent::Segment { .. } => (p, s + 1, a, t),
        RoadEvent::Arc { .. } => (p, s, a + 1, t),
        RoadEvent::Stop(_) => (p, s, a, t + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_cycles() {
        let mut r = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.next_unit(), 0.2);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.draws_taken(), 3);
    }

    #[test]
    fn broken_after_budget() {
        let mut r = BrokenRandom::new(2, 0.5, f64::NAN);
        assert_eq!(r.next_unit(), 0.5);
        assert_eq!(r.next_unit(), 0.5);
        assert!(r.next_unit().is_nan());
    }

    #[test]
    fn blocked_grid_marks_cells() {
        let g = blocked_grid(3, &[(1, 0), (0, 1)]);
        assert_eq!(g.visited_count(), 2);
        assert!(!g.is_visitable(Position::new(1, 0)));
    }

    #[test]
    fn counts_by_variant() {
        let events = [
            RoadEvent::Point(Position::ORIGIN),
            RoadEvent::Stop(Position::ORIGIN),
        ];
        assert_eq!(event_counts(&events), (1, 0, 0, 1));
        assert_eq!(event_positions(&events), vec![Position::ORIGIN]);
    }
}

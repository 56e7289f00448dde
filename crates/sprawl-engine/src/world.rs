//! The growth world: grid, frontier, selector, and sink in one place.
//!
//! [`GrowthWorld`] is the primary user-facing API. The host calls
//! [`advance()`](GrowthWorld::advance) with elapsed time; the world
//! converts that into tip expansions and publishes drawing events to
//! its sink as roads are laid.
//!
//! # Ownership model
//!
//! The world owns its sink. Hosts that need to observe events mid-run
//! either read through [`sink()`](GrowthWorld::sink) or install a
//! `&mut` sink whose lifetime outlives the world. All mutating methods
//! take `&mut self`; there is no interior mutability or threading.

use std::time::Instant;

use tracing::{debug, error, info, trace};

use sprawl_core::{EventSink, RandomSource, RoadEvent, StepError, Tip};
use sprawl_grid::{BoundingBox, OccupancyGrid};

use crate::config::{ConfigError, GrowthConfig};
use crate::frontier::Frontier;
use crate::metrics::{AdvanceMetrics, GrowthStats};
use crate::random::{resolve_seed, ChaChaSource};
use crate::selector::{Expansion, WeightedSelector};

// Compile-time assertion: a world over an owned event log can move threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GrowthWorld<Vec<RoadEvent>>>();
    }
};

/// One growing road network.
///
/// # Example
///
/// ```
/// use sprawl_core::RoadEvent;
/// use sprawl_engine::{GrowthConfig, GrowthWorld};
///
/// let config = GrowthConfig { grid_extent: 20, ..GrowthConfig::seeded(7) };
/// let mut world = GrowthWorld::new(config, Vec::<RoadEvent>::new()).unwrap();
/// assert_eq!(world.sink(), &[RoadEvent::Point(Default::default())]);
///
/// while !world.is_finished() {
///     world.advance(200.0).unwrap();
/// }
/// assert!(world.grid().visited_count() > 0);
/// ```
pub struct GrowthWorld<S: EventSink> {
    config: GrowthConfig,
    seed: u64,
    grid: OccupancyGrid,
    frontier: Frontier,
    selector: WeightedSelector,
    rng: Box<dyn RandomSource + Send>,
    sink: S,
    stats: GrowthStats,
    halted: bool,
}

impl<S: EventSink> GrowthWorld<S> {
    /// Create a world seeded with ChaCha8 from `config.seed`.
    ///
    /// Validates the configuration, marks the origin, publishes
    /// `Point((0, 0))`, and enqueues the seed tip facing east.
    pub fn new(config: GrowthConfig, sink: S) -> Result<Self, ConfigError> {
        let seed = resolve_seed(config.seed);
        Self::build(config, seed, Box::new(ChaChaSource::new(seed)), sink)
    }

    /// Create a world drawing from a caller-supplied random source.
    ///
    /// [`seed()`](Self::seed) still reports the configured (or
    /// clock-derived) seed, which `rng` is free to ignore.
    pub fn with_random_source<R>(config: GrowthConfig, sink: S, rng: R) -> Result<Self, ConfigError>
    where
        R: RandomSource + Send + 'static,
    {
        let seed = resolve_seed(config.seed);
        Self::build(config, seed, Box::new(rng), sink)
    }

    fn build(
        config: GrowthConfig,
        seed: u64,
        rng: Box<dyn RandomSource + Send>,
        sink: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = OccupancyGrid::new(config.grid_extent)?;
        let mut world = Self {
            frontier: Frontier::new(config.generation_interval, config.catch_up),
            selector: WeightedSelector::new(&config.weights),
            config,
            seed,
            grid,
            rng,
            sink,
            stats: GrowthStats::default(),
            halted: false,
        };
        world.plant();
        info!(
            seed,
            extent = world.config.grid_extent,
            interval = world.config.generation_interval,
            "growth world created"
        );
        Ok(world)
    }

    fn plant(&mut self) {
        let tip = Tip::seed();
        self.grid.mark_visited(tip.position);
        self.sink.publish(RoadEvent::Point(tip.position));
        self.stats.events += 1;
        self.frontier.push(tip);
    }

    /// Advance growth by `elapsed` time units.
    ///
    /// Earns `elapsed · N / interval` expansions (plus carry), where `N`
    /// is the frontier size at the start of the call, and runs them in
    /// FIFO order. Successors join the back of the queue, so they are
    /// expanded by later calls, or later in this call when the budget
    /// exceeds the starting generation. If the frontier drains, the
    /// remaining budget and the carry are discarded.
    ///
    /// # Errors
    ///
    /// - [`StepError::InvalidElapsed`] for negative or non-finite
    ///   `elapsed`. Nothing changes.
    /// - [`StepError::InvalidDraw`] if the random source misbehaves. The
    ///   world halts; expansions already performed in this call stand.
    /// - [`StepError::Halted`] on any call after a halt.
    pub fn advance(&mut self, elapsed: f64) -> Result<AdvanceMetrics, StepError> {
        if self.halted {
            return Err(StepError::Halted);
        }
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(StepError::InvalidElapsed { value: elapsed });
        }
        let start = Instant::now();
        let mut metrics = AdvanceMetrics::default();

        let due = self.frontier.due_steps(elapsed);
        while metrics.steps < due {
            let Some(expansion) = self.expand_next()? else {
                break;
            };
            metrics.steps += 1;
            metrics.events += expansion.events as u64;
            metrics.rejected_probes += u64::from(expansion.rejected);
            metrics.forced_dead_ends += u64::from(expansion.forced);
        }
        if self.frontier.is_empty() {
            self.frontier.discard_carry();
        }

        metrics.frontier_len = self.frontier.len();
        metrics.carry = self.frontier.carry();
        metrics.total_us = start.elapsed().as_micros() as u64;
        if metrics.steps > 0 {
            debug!(
                elapsed,
                steps = metrics.steps,
                frontier = metrics.frontier_len,
                carry = metrics.carry,
                "advanced"
            );
        }
        Ok(metrics)
    }

    /// Expand exactly one tip, ignoring the time accumulator.
    ///
    /// Returns `Ok(None)` when the frontier is empty.
    ///
    /// # Errors
    ///
    /// As for [`advance()`](Self::advance), minus the elapsed check.
    pub fn expand_next(&mut self) -> Result<Option<Expansion>, StepError> {
        if self.halted {
            return Err(StepError::Halted);
        }
        let Some(tip) = self.frontier.pop() else {
            return Ok(None);
        };
        let expansion = match self.selector.expand(
            tip,
            &mut self.grid,
            &mut self.sink,
            &mut *self.rng,
        ) {
            Ok(e) => e,
            Err(e) => {
                error!(%tip, error = %e, "random source failed; halting");
                self.halted = true;
                return Err(e);
            }
        };
        trace!(%tip, kind = %expansion.kind, successors = expansion.successors.len(), "expanded");
        if expansion.forced {
            trace!(%tip, "forced dead end");
        }

        self.stats.expansions += 1;
        self.stats.events += expansion.events as u64;
        self.stats.rejected_probes += u64::from(expansion.rejected);
        self.stats.forced_dead_ends += u64::from(expansion.forced);
        self.stats.record_commit(expansion.kind);
        self.frontier.extend(expansion.successors.iter().copied());

        if self.frontier.is_empty() {
            info!(
                expansions = self.stats.expansions,
                cells = self.grid.visited_count(),
                "frontier exhausted; growth finished"
            );
        }
        Ok(Some(expansion))
    }

    /// Expand until the frontier is empty, ignoring time.
    ///
    /// Terminates in at most one expansion per grid cell: every
    /// successor occupies a freshly marked cell.
    ///
    /// Returns the number of expansions performed by this call.
    pub fn run_to_completion(&mut self) -> Result<u64, StepError> {
        let mut count = 0;
        while self.expand_next()?.is_some() {
            count += 1;
        }
        self.frontier.discard_carry();
        Ok(count)
    }

    /// Restart from an empty grid with a new seed, keeping the sink.
    ///
    /// Clears the halt flag, replaces the random source with ChaCha8
    /// seeded from `seed`, and publishes a fresh `Point((0, 0))`.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.grid = OccupancyGrid::new(self.config.grid_extent)?;
        self.frontier.clear();
        self.rng = Box::new(ChaChaSource::new(seed));
        self.seed = seed;
        self.stats = GrowthStats::default();
        self.halted = false;
        self.plant();
        info!(seed, "growth world reset");
        Ok(())
    }

    /// Bounding rectangle of all visited cells.
    ///
    /// Never `None` after construction: the origin is always visited.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.grid.bounding_box()
    }

    /// Average time between expansions at the current frontier size:
    /// `interval / N`. `None` once the frontier is empty.
    pub fn step_delay(&self) -> Option<f64> {
        match self.frontier.len() {
            0 => None,
            n => Some(self.config.generation_interval / n as f64),
        }
    }

    /// The seed in use (configured, clock-derived, or set by [`reset`](Self::reset)).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether growth has finished (frontier empty) or halted.
    pub fn is_finished(&self) -> bool {
        self.halted || self.frontier.is_empty()
    }

    /// Whether a broken random draw halted the world.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of tips waiting to grow.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The frontier, oldest tip first.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Read-only view of the occupancy grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Cumulative counters.
    pub fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the event sink (e.g. to drain a buffer).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the world, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: EventSink> std::fmt::Debug for GrowthWorld<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowthWorld")
            .field("seed", &self.seed)
            .field("frontier_len", &self.frontier.len())
            .field("visited", &self.grid.visited_count())
            .field("halted", &self.halted)
            .finish()
    }
}

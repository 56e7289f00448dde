//! Weighted move selection with probe-then-commit.
//!
//! Each expansion costs exactly one random draw. The draw picks a slot
//! in a weighted pool; the slot's kind is the *offset* where a cyclic
//! scan over the canonical kind order begins. The first kind whose probe
//! yields its full open-grid arity is committed. If none qualifies, a
//! dead end is committed so the branch still terminates cleanly.
//!
//! A kind only counts when **all** of its branches are open. A crossroad
//! with one blocked arm is rejected, never committed partially.

use sprawl_core::{EventSink, RandomSource, StepError, Successors, Tip};
use sprawl_grid::OccupancyGrid;

use crate::config::WeightTable;
use crate::moves::MoveKind;

// ── MoveCatalog ────────────────────────────────────────────────────

/// Weights and expected arities for the eight kinds, frozen at construction.
///
/// The weighted pool is the sequence where kind `k` occupies `weight(k)`
/// consecutive slots, in canonical order. It is stored as cumulative
/// thresholds rather than materialized, so large weights cost nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveCatalog {
    weights: [u32; MoveKind::COUNT],
    arity: [usize; MoveKind::COUNT],
    // cumulative[i] = sum of weights[0..=i]
    cumulative: [u64; MoveKind::COUNT],
}

impl MoveCatalog {
    /// Build from a weight table. Kinds missing from `table` get weight 0;
    /// callers validate the table first.
    pub fn new(table: &WeightTable) -> Self {
        let mut weights = [0u32; MoveKind::COUNT];
        let mut arity = [0usize; MoveKind::COUNT];
        let mut cumulative = [0u64; MoveKind::COUNT];
        let mut running = 0u64;
        for kind in MoveKind::ALL {
            let i = kind.index();
            weights[i] = table.get(kind).unwrap_or(0);
            arity[i] = kind.open_arity();
            running += u64::from(weights[i]);
            cumulative[i] = running;
        }
        Self {
            weights,
            arity,
            cumulative,
        }
    }

    /// Weight of `kind`.
    pub fn weight(&self, kind: MoveKind) -> u32 {
        self.weights[kind.index()]
    }

    /// Successor count `kind` must produce to be committed.
    pub fn expected_arity(&self, kind: MoveKind) -> usize {
        self.arity[kind.index()]
    }

    /// Number of slots in the weighted pool.
    pub fn pool_len(&self) -> u64 {
        self.cumulative[MoveKind::COUNT - 1]
    }

    /// Kind occupying pool slot `slot`.
    pub fn kind_at_slot(&self, slot: u64) -> MoveKind {
        let i = self.cumulative.partition_point(|&c| c <= slot);
        MoveKind::ALL[i.min(MoveKind::COUNT - 1)]
    }

    /// Scan offset for a uniform draw `u ∈ [0, 1)`: the kind at pool
    /// slot `⌊u · pool_len⌋`.
    pub fn offset_for(&self, u: f64) -> MoveKind {
        let len = self.pool_len();
        let slot = (u * len as f64).floor() as u64;
        self.kind_at_slot(slot.min(len.saturating_sub(1)))
    }
}

// ── Expansion ──────────────────────────────────────────────────────

/// Outcome of expanding one tip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    /// The kind that was committed.
    pub kind: MoveKind,
    /// Tips to enqueue, in sub-move order.
    pub successors: Successors,
    /// Events published to the sink.
    pub events: usize,
    /// Kinds probed and rejected before the commit.
    pub rejected: u32,
    /// True when every kind was rejected and a dead end was forced.
    pub forced: bool,
}

// ── WeightedSelector ───────────────────────────────────────────────

/// Chooses and commits one move per tip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedSelector {
    catalog: MoveCatalog,
}

impl WeightedSelector {
    /// Create a selector over the given weights.
    pub fn new(weights: &WeightTable) -> Self {
        Self {
            catalog: MoveCatalog::new(weights),
        }
    }

    /// The frozen catalog.
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// Draw once from `rng`, choose a kind for `tip`, and commit it.
    ///
    /// # Errors
    ///
    /// [`StepError::InvalidDraw`] if the draw lies outside `[0, 1)`. The
    /// grid and sink are untouched in that case.
    pub fn expand(
        &self,
        tip: Tip,
        grid: &mut OccupancyGrid,
        sink: &mut dyn EventSink,
        rng: &mut dyn RandomSource,
    ) -> Result<Expansion, StepError> {
        let u = rng.next_unit();
        if !(0.0..1.0).contains(&u) {
            return Err(StepError::InvalidDraw { value: u });
        }
        let offset = self.catalog.offset_for(u).index();

        let mut rejected = 0;
        for step in 0..MoveKind::COUNT {
            let kind = MoveKind::ALL[(offset + step) % MoveKind::COUNT];
            let plan = kind.plan(tip, grid);
            if plan.arity() == self.catalog.expected_arity(kind) {
                let events = plan.events.len();
                let successors = plan.apply(grid, sink);
                return Ok(Expansion {
                    kind,
                    successors,
                    events,
                    rejected,
                    forced: false,
                });
            }
            rejected += 1;
        }

        // Unreachable with dead end in the catalog (it always matches
        // arity 0), but keeps termination independent of that.
        let plan = MoveKind::DeadEnd.plan(tip, grid);
        let events = plan.events.len();
        let successors = plan.apply(grid, sink);
        Ok(Expansion {
            kind: MoveKind::DeadEnd,
            successors,
            events,
            rejected,
            forced: true,
        })
    }
}

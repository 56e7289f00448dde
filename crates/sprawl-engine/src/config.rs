//! Growth configuration, validation, and error types.
//!
//! [`GrowthConfig`] is the builder-input for constructing a
//! [`GrowthWorld`](crate::GrowthWorld). [`validate()`](GrowthConfig::validate)
//! checks every invariant up front so the world itself never sees a
//! zero interval, a missing weight, or an unusable grid size.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use sprawl_grid::{GridError, OccupancyGrid};

use crate::moves::MoveKind;

// ── WeightTable ────────────────────────────────────────────────────

/// Relative weight of each [`MoveKind`].
///
/// Iteration follows insertion order, but the selector always reads
/// weights in canonical [`MoveKind::ALL`] order, so the order entries
/// were added in has no effect on growth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    weights: IndexMap<MoveKind, u32>,
}

impl WeightTable {
    /// Default weights: a city that is mostly straight roads with
    /// occasional turns, junctions, and crossroads.
    pub const DEFAULTS: [(MoveKind, u32); MoveKind::COUNT] = [
        (MoveKind::DeadEnd, 5),
        (MoveKind::Straight, 50),
        (MoveKind::LeftTurn, 5),
        (MoveKind::RightTurn, 5),
        (MoveKind::LeftCrossroad, 3),
        (MoveKind::RightCrossroad, 3),
        (MoveKind::FullCrossroad, 10),
        (MoveKind::TJunction, 3),
    ];

    /// A table with no entries. Fails validation until all eight kinds are set.
    pub fn empty() -> Self {
        Self {
            weights: IndexMap::new(),
        }
    }

    /// Every kind weighted `weight`.
    pub fn uniform(weight: u32) -> Self {
        MoveKind::ALL.iter().map(|&k| (k, weight)).collect()
    }

    /// Set the weight for `kind`, replacing any previous value.
    pub fn set(&mut self, kind: MoveKind, weight: u32) {
        self.weights.insert(kind, weight);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, kind: MoveKind, weight: u32) -> Self {
        self.set(kind, weight);
        self
    }

    /// The weight for `kind`, if set.
    pub fn get(&self, kind: MoveKind) -> Option<u32> {
        self.weights.get(&kind).copied()
    }

    /// Iterate `(kind, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveKind, u32)> + '_ {
        self.weights.iter().map(|(&k, &w)| (k, w))
    }

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        self.weights.values().map(|&w| u64::from(w)).sum()
    }

    /// Check that every kind is present with a positive weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in MoveKind::ALL {
            match self.get(kind) {
                None => return Err(ConfigError::MissingWeight { kind }),
                Some(0) => return Err(ConfigError::InvalidWeight { kind, weight: 0 }),
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::DEFAULTS.into_iter().collect()
    }
}

impl FromIterator<(MoveKind, u32)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (MoveKind, u32)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

// ── CatchUp ────────────────────────────────────────────────────────

/// How much growth a single long `advance()` call may perform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CatchUp {
    /// Perform every step the elapsed time earns, however many.
    #[default]
    Unbounded,
    /// Cap one call at one generation (the frontier size at call start).
    /// Excess budget is dropped rather than carried.
    OneGeneration,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GrowthConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `generation_interval` is NaN, infinite, zero, or negative.
    InvalidInterval {
        /// The invalid value.
        value: f64,
    },
    /// A move kind has no weight in the table.
    MissingWeight {
        /// The kind without a weight.
        kind: MoveKind,
    },
    /// A move kind's weight is zero.
    InvalidWeight {
        /// The offending kind.
        kind: MoveKind,
        /// Its weight.
        weight: u32,
    },
    /// The grid extent was rejected.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { value } => {
                write!(f, "generation_interval must be finite and positive, got {value}")
            }
            Self::MissingWeight { kind } => write!(f, "no weight for move kind {kind}"),
            Self::InvalidWeight { kind, weight } => {
                write!(f, "weight for {kind} must be positive, got {weight}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── GrowthConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a growth world.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthConfig {
    /// Time for one full generation, in the caller's time unit. Default: 200.
    ///
    /// A frontier of `N` tips performs `N` expansions per interval.
    pub generation_interval: f64,
    /// Relative weights for the eight move kinds.
    pub weights: WeightTable,
    /// Half-width of the occupancy window. Default: 500 (1001×1001 cells).
    pub grid_extent: u32,
    /// RNG seed. `None` derives one from the wall clock at construction;
    /// the chosen value is reported by [`GrowthWorld::seed`](crate::GrowthWorld::seed).
    pub seed: Option<u64>,
    /// Catch-up policy for long `advance()` calls.
    pub catch_up: CatchUp,
}

impl GrowthConfig {
    /// Default generation interval.
    pub const DEFAULT_INTERVAL: f64 = 200.0;

    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Interval must be finite and positive.
        let i = self.generation_interval;
        if !i.is_finite() || i <= 0.0 {
            return Err(ConfigError::InvalidInterval { value: i });
        }
        // 2. Every kind weighted, every weight positive.
        self.weights.validate()?;
        // 3. Extent in range.
        if self.grid_extent == 0 {
            return Err(GridError::ZeroExtent.into());
        }
        if self.grid_extent > OccupancyGrid::MAX_EXTENT {
            return Err(GridError::ExtentTooLarge {
                value: self.grid_extent,
                max: OccupancyGrid::MAX_EXTENT,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            generation_interval: Self::DEFAULT_INTERVAL,
            weights: WeightTable::default(),
            grid_extent: OccupancyGrid::DEFAULT_EXTENT,
            seed: None,
            catch_up: CatchUp::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GrowthConfig::default().validate().is_ok());
    }

    #[test]
    fn default_weights_match_table() {
        let w = WeightTable::default();
        assert_eq!(w.get(MoveKind::Straight), Some(50));
        assert_eq!(w.get(MoveKind::FullCrossroad), Some(10));
        assert_eq!(w.total(), 84);
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = GrowthConfig {
            generation_interval: 0.0,
            ..GrowthConfig::seeded(1)
        };
        match cfg.validate() {
            Err(ConfigError::InvalidInterval { value }) => assert_eq!(value, 0.0),
            other => panic!("expected InvalidInterval, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_interval_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            let cfg = GrowthConfig {
                generation_interval: bad,
                ..GrowthConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidInterval { .. })
            ));
        }
    }

    #[test]
    fn zero_weight_rejected() {
        let cfg = GrowthConfig {
            weights: WeightTable::default().with(MoveKind::LeftTurn, 0),
            ..GrowthConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidWeight {
                kind: MoveKind::LeftTurn,
                weight: 0,
            }) => {}
            other => panic!("expected InvalidWeight(left_turn), got {other:?}"),
        }
    }

    #[test]
    fn missing_weight_rejected() {
        let weights: WeightTable = WeightTable::DEFAULTS
            .into_iter()
            .filter(|(k, _)| *k != MoveKind::TJunction)
            .collect();
        let cfg = GrowthConfig {
            weights,
            ..GrowthConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::MissingWeight {
                kind: MoveKind::TJunction,
            }) => {}
            other => panic!("expected MissingWeight(t_junction), got {other:?}"),
        }
    }

    #[test]
    fn empty_table_reports_first_kind() {
        assert_eq!(
            WeightTable::empty().validate(),
            Err(ConfigError::MissingWeight {
                kind: MoveKind::DeadEnd
            })
        );
    }

    #[test]
    fn extent_out_of_range_rejected() {
        let cfg = GrowthConfig {
            grid_extent: 0,
            ..GrowthConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::ZeroExtent)));

        let cfg = GrowthConfig {
            grid_extent: OccupancyGrid::MAX_EXTENT + 1,
            ..GrowthConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::ExtentTooLarge { .. }))
        ));
    }

    #[test]
    fn grid_error_is_source() {
        let e = ConfigError::from(GridError::ZeroExtent);
        assert!(e.source().is_some());
        assert!(format!("{e}").starts_with("grid:"));
    }

    #[test]
    fn insertion_order_does_not_affect_equality_of_lookup() {
        let reversed: WeightTable = WeightTable::DEFAULTS.into_iter().rev().collect();
        for kind in MoveKind::ALL {
            assert_eq!(reversed.get(kind), WeightTable::default().get(kind));
        }
    }
}

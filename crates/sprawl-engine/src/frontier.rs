//! FIFO frontier of growing tips plus the timestep accumulator.
//!
//! Growth rate scales with frontier size: with `N` tips queued, one
//! `generation_interval` of elapsed time earns `N` expansions. The
//! fractional remainder carries between calls, so splitting the same
//! total elapsed time across more calls yields the same step count
//! (up to floating-point rounding).

use std::collections::VecDeque;

use sprawl_core::Tip;

use crate::config::CatchUp;

/// Budgets within this distance below a whole step count as that step.
const STEP_SNAP: f64 = 1e-9;

/// Pending tips in breadth-first order, with the fractional step carry.
#[derive(Clone, Debug, PartialEq)]
pub struct Frontier {
    queue: VecDeque<Tip>,
    interval: f64,
    carry: f64,
    catch_up: CatchUp,
}

impl Frontier {
    /// Empty frontier. `interval` must already be validated positive.
    pub fn new(interval: f64, catch_up: CatchUp) -> Self {
        Self {
            queue: VecDeque::new(),
            interval,
            carry: 0.0,
            catch_up,
        }
    }

    /// Append a tip at the back.
    pub fn push(&mut self, tip: Tip) {
        self.queue.push_back(tip);
    }

    /// Append several tips at the back, preserving their order.
    pub fn extend<I: IntoIterator<Item = Tip>>(&mut self, tips: I) {
        self.queue.extend(tips);
    }

    /// Remove the oldest tip.
    pub fn pop(&mut self) -> Option<Tip> {
        self.queue.pop_front()
    }

    /// Number of queued tips.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no tips remain.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued tips, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Tip> + '_ {
        self.queue.iter()
    }

    /// Fractional step budget carried to the next call, in `[0, 1)`.
    pub fn carry(&self) -> f64 {
        self.carry
    }

    /// Drop queued tips and the carry.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.carry = 0.0;
    }

    /// Drop only the carry. Used once the frontier drains mid-call.
    pub fn discard_carry(&mut self) {
        self.carry = 0.0;
    }

    /// Convert `elapsed` time into a whole number of expansions to run now.
    ///
    /// The budget is `carry + elapsed · N / interval`, with `N` the
    /// current queue length. Its floor is returned and its fraction is
    /// kept as the new carry. A budget within rounding error of the next
    /// whole step is snapped up to it. An empty frontier earns nothing and
    /// clears the carry.
    pub fn due_steps(&mut self, elapsed: f64) -> u64 {
        if self.queue.is_empty() {
            self.carry = 0.0;
            return 0;
        }
        let n = self.queue.len() as f64;
        let mut budget = self.carry + elapsed * n / self.interval;
        if self.catch_up == CatchUp::OneGeneration && budget > n {
            budget = n;
        }
        // Equal slices of an interval can sum to just under a whole step.
        let steps = (budget + STEP_SNAP).floor();
        self.carry = (budget - steps).max(0.0);
        // Saturates for absurd elapsed values; the caller stops when the queue drains.
        steps as u64
    }
}

//! The eight move kinds and their geometry.
//!
//! Every kind is evaluated in two phases. [`MoveKind::plan`] reads the
//! grid and computes what the move would do: successor tips, cells to
//! mark, events to publish. [`MovePlan::apply`] performs those effects.
//! [`Mode`] selects between stopping after the plan (probe) and applying
//! it (commit), so a probe can never mutate the grid or publish.
//!
//! Union kinds (junctions and crossroads) plan each constituent
//! sub-move against the same grid state and concatenate the results in
//! hard-left, hard-right, straight order.

use smallvec::SmallVec;
use sprawl_core::{EventSink, Heading, Position, RoadEvent, Successors, Tip, TurnDirection};
use sprawl_grid::OccupancyGrid;
use std::fmt;

/// Whether an evaluation only measures a move or also applies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Compute successors only. No grid mutation, no events.
    Probe,
    /// Compute successors, mark cells, and publish events.
    Commit,
}

/// One of the eight geometric growth rules.
///
/// The declaration order is the canonical order the selector scans in
/// (see [`MoveKind::ALL`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    /// Terminate the branch. Always succeeds with no successors.
    DeadEnd,
    /// One cell straight ahead.
    Straight,
    /// Quarter-circle turn to the left.
    LeftTurn,
    /// Quarter-circle turn to the right.
    RightTurn,
    /// Branch hard left and continue straight.
    LeftCrossroad,
    /// Branch hard right and continue straight.
    RightCrossroad,
    /// Branch hard left, hard right, and continue straight.
    FullCrossroad,
    /// Branch hard left and hard right; the straight road ends.
    TJunction,
}

impl MoveKind {
    /// Number of move kinds.
    pub const COUNT: usize = 8;

    /// Every kind, in canonical scan order.
    pub const ALL: [MoveKind; MoveKind::COUNT] = [
        MoveKind::DeadEnd,
        MoveKind::Straight,
        MoveKind::LeftTurn,
        MoveKind::RightTurn,
        MoveKind::LeftCrossroad,
        MoveKind::RightCrossroad,
        MoveKind::FullCrossroad,
        MoveKind::TJunction,
    ];

    /// Position of this kind in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DeadEnd => "dead_end",
            Self::Straight => "straight",
            Self::LeftTurn => "left_turn",
            Self::RightTurn => "right_turn",
            Self::LeftCrossroad => "left_crossroad",
            Self::RightCrossroad => "right_crossroad",
            Self::FullCrossroad => "full_crossroad",
            Self::TJunction => "t_junction",
        }
    }

    /// Compute what this move would do from `tip`, without side effects.
    pub fn plan(self, tip: Tip, grid: &OccupancyGrid) -> MovePlan {
        let mut plan = MovePlan::default();
        match self {
            Self::DeadEnd => plan.events.push(RoadEvent::Stop(tip.position)),
            Self::Straight => ahead(tip.position, tip.heading, grid, &mut plan),
            Self::LeftTurn => turn(tip, TurnDirection::Left, grid, &mut plan),
            Self::RightTurn => turn(tip, TurnDirection::Right, grid, &mut plan),
            Self::LeftCrossroad => {
                ahead(tip.position, tip.heading.left(), grid, &mut plan);
                ahead(tip.position, tip.heading, grid, &mut plan);
            }
            Self::RightCrossroad => {
                ahead(tip.position, tip.heading.right(), grid, &mut plan);
                ahead(tip.position, tip.heading, grid, &mut plan);
            }
            Self::FullCrossroad => {
                ahead(tip.position, tip.heading.left(), grid, &mut plan);
                ahead(tip.position, tip.heading.right(), grid, &mut plan);
                ahead(tip.position, tip.heading, grid, &mut plan);
            }
            Self::TJunction => {
                ahead(tip.position, tip.heading.left(), grid, &mut plan);
                ahead(tip.position, tip.heading.right(), grid, &mut plan);
            }
        }
        plan
    }

    /// Successors this move would produce from `tip` (probe mode).
    pub fn probe(self, tip: Tip, grid: &OccupancyGrid) -> Successors {
        self.plan(tip, grid).successors
    }

    /// Apply this move from `tip` and return its successors (commit mode).
    pub fn commit(self, tip: Tip, grid: &mut OccupancyGrid, sink: &mut dyn EventSink) -> Successors {
        self.plan(tip, grid).apply(grid, sink)
    }

    /// Evaluate in the given [`Mode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawl_core::{Heading, Position, RoadEvent, Tip};
    /// use sprawl_engine::{Mode, MoveKind};
    /// use sprawl_grid::OccupancyGrid;
    ///
    /// let mut grid = OccupancyGrid::new(10).unwrap();
    /// let mut events: Vec<RoadEvent> = Vec::new();
    /// let tip = Tip::new(Position::ORIGIN, Heading(0));
    ///
    /// let probed = MoveKind::Straight.evaluate(tip, &mut grid, &mut events, Mode::Probe);
    /// assert_eq!(probed.as_slice(), &[Tip::new(Position::new(1, 0), Heading(0))]);
    /// assert!(events.is_empty());
    /// assert!(grid.is_visitable(Position::new(1, 0)));
    ///
    /// let committed = MoveKind::Straight.evaluate(tip, &mut grid, &mut events, Mode::Commit);
    /// assert_eq!(committed, probed);
    /// assert_eq!(events.len(), 1);
    /// assert!(!grid.is_visitable(Position::new(1, 0)));
    /// ```
    pub fn evaluate(
        self,
        tip: Tip,
        grid: &mut OccupancyGrid,
        sink: &mut dyn EventSink,
        mode: Mode,
    ) -> Successors {
        match mode {
            Mode::Probe => self.probe(tip, grid),
            Mode::Commit => self.commit(tip, grid, sink),
        }
    }

    /// Successor count when evaluated against an unobstructed grid.
    ///
    /// Measured by probing the seed tip on a fresh grid rather than
    /// hard-coded, so it always agrees with the geometry above.
    pub fn open_arity(self) -> usize {
        // Extent 2 leaves every cell any move touches from the origin inside the window.
        match OccupancyGrid::new(2) {
            Ok(grid) => self.probe(Tip::seed(), &grid).len(),
            Err(_) => unreachable!("extent 2 is always a valid grid"),
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The effects of one move, computed but not yet applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovePlan {
    /// Successor tips, in sub-move order.
    pub successors: Successors,
    /// Cells the commit will mark visited.
    pub marks: SmallVec<[Position; 3]>,
    /// Events the commit will publish, in order.
    pub events: SmallVec<[RoadEvent; 3]>,
}

impl MovePlan {
    /// Number of successors.
    pub fn arity(&self) -> usize {
        self.successors.len()
    }

    /// Mark the planned cells, publish the planned events, return the successors.
    pub fn apply(self, grid: &mut OccupancyGrid, sink: &mut dyn EventSink) -> Successors {
        for p in &self.marks {
            grid.mark_visited(*p);
        }
        for e in self.events {
            sink.publish(e);
        }
        self.successors
    }
}

/// One cell from `from` along `heading`: straight ahead, or a hard turn
/// when called with a rotated heading.
fn ahead(from: Position, heading: Heading, grid: &OccupancyGrid, plan: &mut MovePlan) {
    let to = from.step(heading);
    if !grid.is_visitable(to) {
        return;
    }
    plan.successors.push(Tip::new(to, heading));
    plan.marks.push(to);
    plan.events.push(RoadEvent::Segment { from, to });
}

/// Quarter-circle turn. Feasible iff `outside` and `dest` are visitable.
///
/// `centre` is marked on commit but deliberately not checked first: the
/// arc passes between `pos` and `dest`, and a previously visited centre
/// does not block it.
fn turn(tip: Tip, direction: TurnDirection, grid: &OccupancyGrid, plan: &mut MovePlan) {
    let new_heading = tip.heading.turned(direction.sign());
    let outside = tip.position.step(tip.heading);
    let dest = outside.step(new_heading);
    let centre = tip.position.step(new_heading);
    if !grid.is_visitable(dest) || !grid.is_visitable(outside) {
        return;
    }
    plan.successors.push(Tip::new(dest, new_heading));
    plan.marks.extend([outside, dest, centre]);
    plan.events.push(RoadEvent::Arc {
        centre,
        quadrant: tip.heading,
        direction,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(10).unwrap()
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn origin_east() -> Tip {
        Tip::new(Position::ORIGIN, Heading(0))
    }

    // ── Straight ────────────────────────────────────────────────

    #[test]
    fn straight_probe_on_empty_grid() {
        let g = grid();
        let s = MoveKind::Straight.probe(origin_east(), &g);
        assert_eq!(s.as_slice(), &[Tip::new(p(1, 0), Heading(0))]);
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn tips_at_coordinate_limits_are_blocked() {
        let g = grid();
        for (x, y) in [(i32::MAX, 0), (i32::MIN, 0), (0, i32::MAX), (i32::MAX, i32::MIN)] {
            for h in 0..4 {
                let tip = Tip::new(p(x, y), Heading(h));
                for kind in MoveKind::ALL {
                    assert!(kind.probe(tip, &g).is_empty(), "{kind} from {tip}");
                }
            }
        }
    }

    #[test]
    fn straight_blocked_yields_nothing() {
        let mut g = grid();
        g.mark_visited(p(1, 0));
        assert!(MoveKind::Straight.probe(origin_east(), &g).is_empty());
    }

    #[test]
    fn straight_commit_marks_and_emits_segment() {
        let mut g = grid();
        let mut events: Vec<RoadEvent> = Vec::new();
        let s = MoveKind::Straight.commit(origin_east(), &mut g, &mut events);
        assert_eq!(s.len(), 1);
        assert!(g.is_visited(p(1, 0)));
        assert_eq!(
            events,
            vec![RoadEvent::Segment {
                from: p(0, 0),
                to: p(1, 0)
            }]
        );
    }

    #[test]
    fn straight_stops_at_window_edge() {
        let g = OccupancyGrid::new(1).unwrap();
        let tip = Tip::new(p(1, 0), Heading(0));
        assert!(MoveKind::Straight.probe(tip, &g).is_empty());
    }

    // ── Dead end ────────────────────────────────────────────────

    #[test]
    fn dead_end_always_empty_and_emits_stop() {
        let mut g = grid();
        let mut events: Vec<RoadEvent> = Vec::new();
        let tip = Tip::new(p(3, -4), Heading(7));
        assert!(MoveKind::DeadEnd.probe(tip, &g).is_empty());
        let s = MoveKind::DeadEnd.commit(tip, &mut g, &mut events);
        assert!(s.is_empty());
        assert_eq!(events, vec![RoadEvent::Stop(p(3, -4))]);
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn dead_end_probe_emits_nothing() {
        let mut g = grid();
        let mut events: Vec<RoadEvent> = Vec::new();
        MoveKind::DeadEnd.evaluate(origin_east(), &mut g, &mut events, Mode::Probe);
        assert!(events.is_empty());
    }

    // ── Turns ───────────────────────────────────────────────────

    #[test]
    fn left_turn_geometry() {
        let mut g = grid();
        let mut events: Vec<RoadEvent> = Vec::new();
        let s = MoveKind::LeftTurn.commit(origin_east(), &mut g, &mut events);
        assert_eq!(s.as_slice(), &[Tip::new(p(1, -1), Heading(-1))]);
        for c in [p(1, 0), p(1, -1), p(0, -1)] {
            assert!(g.is_visited(c), "{c} should be marked");
        }
        assert_eq!(g.visited_count(), 3);
        assert_eq!(
            events,
            vec![RoadEvent::Arc {
                centre: p(0, -1),
                quadrant: Heading(0),
                direction: TurnDirection::Left,
            }]
        );
    }

    #[test]
    fn right_turn_geometry() {
        let mut g = grid();
        let mut events: Vec<RoadEvent> = Vec::new();
        let s = MoveKind::RightTurn.commit(origin_east(), &mut g, &mut events);
        assert_eq!(s.as_slice(), &[Tip::new(p(1, 1), Heading(1))]);
        assert!(g.is_visited(p(1, 0)));
        assert!(g.is_visited(p(1, 1)));
        assert!(g.is_visited(p(0, 1)));
        assert!(matches!(
            events[0],
            RoadEvent::Arc {
                direction: TurnDirection::Right,
                ..
            }
        ));
    }

    #[test]
    fn turn_ignores_visited_centre() {
        let mut g = grid();
        g.mark_visited(p(0, -1));
        let s = MoveKind::LeftTurn.probe(origin_east(), &g);
        assert_eq!(s.as_slice(), &[Tip::new(p(1, -1), Heading(-1))]);
    }

    #[test]
    fn turn_blocked_by_outside_or_dest() {
        let mut g = grid();
        g.mark_visited(p(1, 0));
        assert!(MoveKind::LeftTurn.probe(origin_east(), &g).is_empty());

        let mut g = grid();
        g.mark_visited(p(1, -1));
        assert!(MoveKind::LeftTurn.probe(origin_east(), &g).is_empty());
        assert_eq!(MoveKind::RightTurn.probe(origin_east(), &g).len(), 1);
    }

    #[test]
    fn turn_from_rotated_heading() {
        // Facing north from (2, 2): outside (2, 3), dest (1, 3), centre (1, 2).
        let g = grid();
        let tip = Tip::new(p(2, 2), Heading(1));
        let s = MoveKind::RightTurn.plan(tip, &g);
        assert_eq!(s.successors.as_slice(), &[Tip::new(p(1, 3), Heading(2))]);
        assert_eq!(s.marks.as_slice(), &[p(2, 3), p(1, 3), p(1, 2)]);
    }

    // ── Unions ──────────────────────────────────────────────────

    #[test]
    fn full_crossroad_order_is_left_right_straight() {
        let g = grid();
        let s = MoveKind::FullCrossroad.probe(origin_east(), &g);
        assert_eq!(
            s.as_slice(),
            &[
                Tip::new(p(0, -1), Heading(-1)),
                Tip::new(p(0, 1), Heading(1)),
                Tip::new(p(1, 0), Heading(0)),
            ]
        );
    }

    #[test]
    fn t_junction_has_no_straight_branch() {
        let g = grid();
        let s = MoveKind::TJunction.probe(origin_east(), &g);
        assert_eq!(s.len(), 2);
        assert!(s.iter().all(|t| t.position != p(1, 0)));
    }

    #[test]
    fn crossroads_pick_their_side() {
        let g = grid();
        let left = MoveKind::LeftCrossroad.probe(origin_east(), &g);
        assert_eq!(left[0], Tip::new(p(0, -1), Heading(-1)));
        assert_eq!(left[1], Tip::new(p(1, 0), Heading(0)));
        let right = MoveKind::RightCrossroad.probe(origin_east(), &g);
        assert_eq!(right[0], Tip::new(p(0, 1), Heading(1)));
        assert_eq!(right[1], Tip::new(p(1, 0), Heading(0)));
    }

    #[test]
    fn union_partially_blocked_truncates() {
        let mut g = grid();
        g.mark_visited(p(0, 1));
        let s = MoveKind::FullCrossroad.probe(origin_east(), &g);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn union_commit_emits_one_segment_per_branch() {
        let mut g = grid();
        let mut events: Vec<RoadEvent> = Vec::new();
        MoveKind::FullCrossroad.commit(origin_east(), &mut g, &mut events);
        assert_eq!(events.len(), 3);
        assert!(events
            .iter()
            .all(|e| matches!(e, RoadEvent::Segment { from, .. } if *from == Position::ORIGIN)));
    }

    // ── Arity ───────────────────────────────────────────────────

    #[test]
    fn open_arities() {
        let expected = [0, 1, 1, 1, 2, 2, 3, 2];
        for (kind, n) in MoveKind::ALL.iter().zip(expected) {
            assert_eq!(kind.open_arity(), n, "{kind}");
        }
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, kind) in MoveKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}

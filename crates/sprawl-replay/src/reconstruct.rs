//! Rebuild occupancy from an event stream.
//!
//! Every cell a commit marks is recoverable from the event it published:
//!
//! - `Point(p)` marks `p`.
//! - `Segment { to, .. }` marks `to` (`from` was marked when reached).
//! - `Arc { centre, quadrant, direction }` marks `centre`, the
//!   destination `centre + d(quadrant)`, and the outside corner
//!   `centre + d(quadrant) − d(quadrant + direction)`.
//! - `Stop` marks nothing.
//!
//! So replaying a complete event stream yields exactly the grid the engine built.

use sprawl_core::{Position, RoadEvent};
use sprawl_grid::{GridError, OccupancyGrid};

/// Build a grid of half-width `extent` holding every cell `events` marks.
pub fn reconstruct_grid<'a, I>(events: I, extent: u32) -> Result<OccupancyGrid, GridError>
where
    I: IntoIterator<Item = &'a RoadEvent>,
{
    let mut grid = OccupancyGrid::new(extent)?;
    for event in events {
        apply(&mut grid, event);
    }
    Ok(grid)
}

fn apply(grid: &mut OccupancyGrid, event: &RoadEvent) {
    match *event {
        RoadEvent::Point(p) => {
            grid.mark_visited(p);
        }
        RoadEvent::Segment { to, .. } => {
            grid.mark_visited(to);
        }
        RoadEvent::Arc {
            centre,
            quadrant,
            direction,
        } => {
            let dest = centre.step(quadrant);
            let (dx, dy) = quadrant.turned(direction.sign()).offset();
            let outside = Position::new(dest.x - dx, dest.y - dy);
            grid.mark_visited(centre);
            grid.mark_visited(dest);
            grid.mark_visited(outside);
        }
        RoadEvent::Stop(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_core::{Heading, Tip, TurnDirection};
    use sprawl_engine::MoveKind;

    #[test]
    fn arc_marks_match_turn_commit() {
        for heading in 0..4 {
            for kind in [MoveKind::LeftTurn, MoveKind::RightTurn] {
                let mut engine_grid = OccupancyGrid::new(4).unwrap();
                let mut events: Vec<RoadEvent> = Vec::new();
                let tip = Tip::new(Position::new(1, -1), Heading(heading));
                engine_grid.mark_visited(tip.position);
                kind.commit(tip, &mut engine_grid, &mut events);

                let mut rebuilt = OccupancyGrid::new(4).unwrap();
                rebuilt.mark_visited(tip.position);
                for e in &events {
                    apply(&mut rebuilt, e);
                }
                assert_eq!(rebuilt, engine_grid, "{kind} from heading {heading}");
            }
        }
    }

    #[test]
    fn stop_marks_nothing() {
        let g = reconstruct_grid(&[RoadEvent::Stop(Position::new(1, 1))], 3).unwrap();
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn segment_marks_only_destination() {
        let events = [RoadEvent::Segment {
            from: Position::new(0, 0),
            to: Position::new(0, 1),
        }];
        let g = reconstruct_grid(&events, 3).unwrap();
        assert!(g.is_visited(Position::new(0, 1)));
        assert!(!g.is_visited(Position::new(0, 0)));
    }

    #[test]
    fn arc_with_negative_quadrant() {
        // Left turn from (0,0) facing east: centre (0,-1), quadrant 0.
        // Same arc expressed with quadrant -4.
        let events = [RoadEvent::Arc {
            centre: Position::new(0, -1),
            quadrant: Heading(-4),
            direction: TurnDirection::Left,
        }];
        let g = reconstruct_grid(&events, 3).unwrap();
        for c in [(0, -1), (1, -1), (1, 0)] {
            assert!(g.is_visited(Position::new(c.0, c.1)));
        }
    }

    #[test]
    fn zero_extent_propagates() {
        assert_eq!(
            reconstruct_grid(std::iter::empty(), 0),
            Err(GridError::ZeroExtent)
        );
    }
}

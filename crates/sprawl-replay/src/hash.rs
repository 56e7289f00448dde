//! Hashing utilities for event-stream and grid comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing. These hashes are not
//! cryptographically secure; they are used for fast equality checks
//! during replay comparison.

use sprawl_core::RoadEvent;
use sprawl_grid::OccupancyGrid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

// Per-variant tags, folded in ahead of each event's fields.
const TAG_POINT: u8 = 0;
const TAG_SEGMENT: u8 = 1;
const TAG_ARC: u8 = 2;
const TAG_STOP: u8 = 3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_u32(hash: u64, v: u32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

fn fnv1a_event(hash: u64, event: &RoadEvent) -> u64 {
    match *event {
        RoadEvent::Point(p) => {
            let h = fnv1a_byte(hash, TAG_POINT);
            fnv1a_i32(fnv1a_i32(h, p.x), p.y)
        }
        RoadEvent::Segment { from, to } => {
            let h = fnv1a_byte(hash, TAG_SEGMENT);
            let h = fnv1a_i32(fnv1a_i32(h, from.x), from.y);
            fnv1a_i32(fnv1a_i32(h, to.x), to.y)
        }
        RoadEvent::Arc {
            centre,
            quadrant,
            direction,
        } => {
            let h = fnv1a_byte(hash, TAG_ARC);
            let h = fnv1a_i32(fnv1a_i32(h, centre.x), centre.y);
            let h = fnv1a_i32(h, quadrant.0);
            fnv1a_byte(h, direction.sign() as i8 as u8)
        }
        RoadEvent::Stop(p) => {
            let h = fnv1a_byte(hash, TAG_STOP);
            fnv1a_i32(fnv1a_i32(h, p.x), p.y)
        }
    }
}

/// Hash an ordered event stream.
///
/// Each event contributes a variant tag followed by its fields, so
/// streams hash equal iff they hold the same events in the same order
/// (barring collisions). An empty stream hashes to the FNV offset basis.
pub fn events_hash(events: &[RoadEvent]) -> u64 {
    events.iter().fold(FNV_OFFSET, fnv1a_event)
}

/// Hash a grid's extent and visited set.
///
/// Cells are visited in storage order, so equal grids hash equal
/// regardless of the order cells were marked in.
pub fn grid_hash(grid: &OccupancyGrid) -> u64 {
    let mut hash = fnv1a_u32(FNV_OFFSET, grid.extent());
    for p in grid.visited_positions() {
        hash = fnv1a_i32(hash, p.x);
        hash = fnv1a_i32(hash, p.y);
    }
    hash
}

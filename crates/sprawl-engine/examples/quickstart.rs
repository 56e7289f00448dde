//! Sprawl quickstart: grow one small network and print it.
//!
//! Demonstrates:
//!   1. Building and validating a GrowthConfig
//!   2. Creating a GrowthWorld over an in-memory event log
//!   3. Driving it with advance() until the frontier drains
//!   4. Reading the grid, bounding box, and stats afterwards
//!
//! Run with:
//!   cargo run --example quickstart
//!   RUST_LOG=sprawl_engine=debug cargo run --example quickstart

use sprawl_core::{Position, RoadEvent};
use sprawl_engine::{GrowthConfig, GrowthWorld, MoveKind};
use tracing_subscriber::EnvFilter;

// ─── Parameters ─────────────────────────────────────────────────

const SEED: u64 = 12;
const EXTENT: u32 = 16;
const FRAME: f64 = 50.0;

fn render(world: &GrowthWorld<Vec<RoadEvent>>) -> String {
    let e = EXTENT as i32;
    let mut out = String::new();
    // Row order top-down, so y counts down.
    for y in (-e..=e).rev() {
        for x in -e..=e {
            let p = Position::new(x, y);
            let c = if p == Position::ORIGIN {
                'o'
            } else if world.grid().is_visited(p) {
                '#'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = GrowthConfig {
        grid_extent: EXTENT,
        ..GrowthConfig::seeded(SEED)
    };
    let mut world = GrowthWorld::new(config, Vec::new()).expect("valid config");

    let mut frames = 0u64;
    while !world.is_finished() {
        world.advance(FRAME).expect("seeded source never fails");
        frames += 1;
    }

    println!("{}", render(&world));
    println!("seed        {}", world.seed());
    println!("frames      {frames}");
    println!("events      {}", world.sink().len());
    println!("cells       {}", world.grid().visited_count());
    if let Some(b) = world.bounding_box() {
        println!(
            "bounds      x {}..={}  y {}..={}",
            b.min_x, b.max_x, b.min_y, b.max_y
        );
    }
    for kind in MoveKind::ALL {
        println!("{:<16}{}", kind.name(), world.stats().commits(kind));
    }
}

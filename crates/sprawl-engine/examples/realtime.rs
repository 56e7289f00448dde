//! Drive a world from a wall-clock frame loop.
//!
//! The host measures real elapsed milliseconds between frames and hands
//! them to advance(). Jittery frame times do not change the overall
//! pace: fractional expansions carry over between calls.
//!
//! Run with:
//!   cargo run --example realtime

use std::thread;
use std::time::{Duration, Instant};

use sprawl_core::{EventSink, RoadEvent};
use sprawl_engine::{CatchUp, GrowthConfig, GrowthWorld};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints events as they are laid, standing in for a renderer.
#[derive(Default)]
struct ConsoleSink {
    count: u64,
}

impl EventSink for ConsoleSink {
    fn publish(&mut self, event: RoadEvent) {
        self.count += 1;
        if self.count % 25 == 0 {
            println!("#{:<6} {event:?}", self.count);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = GrowthConfig {
        grid_extent: 40,
        generation_interval: 120.0,
        // A long stall (e.g. a backgrounded window) grows at most one generation.
        catch_up: CatchUp::OneGeneration,
        ..GrowthConfig::default()
    };
    let mut world = GrowthWorld::new(config, ConsoleSink::default()).expect("valid config");
    info!(seed = world.seed(), "pass this seed back in to regrow the same network");

    let mut last = Instant::now();
    let mut frame = 0u64;
    while !world.is_finished() {
        thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_secs_f64() * 1000.0;
        last = now;

        let m = world.advance(elapsed_ms).expect("seeded source never fails");
        frame += 1;
        if frame % 60 == 0 {
            info!(
                frame,
                frontier = m.frontier_len,
                delay_ms = world.step_delay().unwrap_or(0.0),
                cells = world.grid().visited_count(),
                "tick"
            );
        }
    }

    println!(
        "finished after {frame} frames: {} events, {} cells",
        world.sink().count,
        world.grid().visited_count()
    );
}

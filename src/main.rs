//! Lunar lander entry point
//!
//! This crate ships no windowed frontend; the binary runs the simulation
//! against the headless frontend as a coasting demo and logs the outcome.

use std::time::{SystemTime, UNIX_EPOCH};

use lunar_lander::SimulationLoop;
use lunar_lander::config::Config;
use lunar_lander::platform::HeadlessFrontend;
use lunar_lander::sim::GameState;

fn main() {
    env_logger::init();

    let config = Config::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Lunar lander starting with seed {seed}");

    let state = GameState::new(seed, &config);
    // No input at all: gravity ends every run well inside the frame cap
    let frontend = HeadlessFrontend::coasting(200_000);

    let mut sim = SimulationLoop::new(frontend, state, config);
    sim.run();

    let state = sim.state();
    log::info!(
        "finished in phase {:?} after {} ticks at velocity [{}, {}]",
        state.phase,
        state.time_ticks,
        state.lander.velocity.x,
        state.lander.velocity.y,
    );
}

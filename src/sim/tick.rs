//! Fixed timestep simulation tick
//!
//! Advances one frame of input, physics, terrain scroll, and collision.

use super::collision::first_hit;
use super::outcome::classify_touchdown;
use super::state::{BoundingBox, GameState, Phase};
use crate::config::Config;

/// Input held during a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Rotate counter-clockwise (left key held)
    pub rotate_left: bool,
    /// Rotate clockwise (right key held)
    pub rotate_right: bool,
    /// Thrusters firing (thrust key held)
    pub thrust: bool,
}

/// Advance the state by one tick.
///
/// Sequencing per frame: apply input, integrate forces, scroll terrain,
/// then scan for a touchdown. Once the phase is terminal the state is
/// frozen and this returns immediately.
pub fn tick(state: &mut GameState, input: &TickInput, cfg: &Config) {
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    // Input first, so rotation and thrust shape this tick's forces
    let steps = (input.rotate_right as i8 - input.rotate_left as i8) as f32;
    if steps != 0.0 {
        state.lander.rotate_steps(steps, cfg);
    }
    state.lander.set_thrusters(input.thrust);

    state.lander.update(cfg);
    state.terrain.update(state.lander.velocity.x, cfg);

    if let Some(hit) = first_hit(&state.lander.bounding_box(), &state.terrain) {
        let outcome = classify_touchdown(hit.from, hit.to, state.lander.velocity, cfg);
        log::info!("run over after {} ticks: {:?}", state.time_ticks, outcome);
        state.phase = outcome.into();
    }
}

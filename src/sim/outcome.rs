//! Touchdown classification
//!
//! Once the lander touches a terrain segment the run is over; this module
//! decides which way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Terminal result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Landed,
    Crashed,
}

/// Classify a touchdown on the segment `(from, to)` at the given velocity.
///
/// A landing requires a near-flat segment and a gentle touchdown. The speed
/// gates are signed: only rightward and downward speeds are checked against
/// the limits.
pub fn classify_touchdown(from: Vec2, to: Vec2, velocity: Vec2, cfg: &Config) -> Outcome {
    if (from.y - to.y).abs() > cfg.flatness_tolerance {
        log::info!("crashed: uneven ground (from.y = {}, to.y = {})", from.y, to.y);
        return Outcome::Crashed;
    }

    if velocity.x > cfg.max_horizontal_landing_speed {
        log::info!(
            "crashed: horizontal speed {} > {}",
            velocity.x,
            cfg.max_horizontal_landing_speed
        );
        return Outcome::Crashed;
    }

    if velocity.y > cfg.max_vertical_landing_speed {
        log::info!(
            "crashed: vertical speed {} > {}",
            velocity.y,
            cfg.max_vertical_landing_speed
        );
        return Outcome::Crashed;
    }

    log::info!("touchdown at speed [{}, {}]", velocity.x, velocity.y);
    Outcome::Landed
}

//! Lunar Lander - a scrolling arcade landing simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, physics, collision, outcome)
//! - `platform`: Frontend abstraction (input events, scene presentation)
//! - `app`: Frame-synchronous simulation loop
//! - `config`: Tunable physics and terrain parameters

pub mod app;
pub mod config;
pub mod platform;
pub mod sim;

pub use app::SimulationLoop;
pub use config::{Config, TerrainConfig};

use glam::Vec2;

/// Fixed-rate contract shared by sim and frontends
pub mod consts {
    /// Nominal tick rate. One simulation tick is coupled 1:1 with a rendered
    /// frame and carries no explicit delta-time; the physics constants bake
    /// in this rate.
    pub const TICK_HZ: u32 = 60;
}

/// Unit vector for a rotation given in degrees clockwise from straight up,
/// in screen coordinates (y grows downward).
#[inline]
pub fn heading_from_degrees(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

//! Tunable simulation parameters
//!
//! Every component takes its numbers from an explicit `Config` passed in at
//! construction, so tests can run with alternate tuning. All values are
//! unit-less: the constants implicitly encode the fixed tick rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Terrain generation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Horizontal distance between consecutive points, drawn uniformly
    /// (inclusive bounds)
    pub step_x: (i32, i32),
    /// Vertical delta between consecutive points, drawn uniformly
    /// (inclusive bounds)
    pub step_y: (i32, i32),
    /// One generated segment in `flat_denominator` is forced flat. Must be
    /// at least 1; 1 makes every segment flat.
    pub flat_denominator: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            step_x: (20, 40),
            step_y: (-80, 80),
            flat_denominator: 5,
        }
    }
}

/// Physics and gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Downward gravity added to velocity every tick
    pub gravity: f32,
    /// Booster force magnitude while thrusters are on
    pub thruster_force: f32,
    /// Horizontal velocity at spawn
    pub initial_horizontal_speed: f32,
    /// Fastest rightward touchdown that still counts as a landing
    pub max_horizontal_landing_speed: f32,
    /// Fastest downward touchdown that still counts as a landing
    pub max_vertical_landing_speed: f32,
    /// Velocity-to-pixels factor for terrain scrolling
    pub scroll_factor: f32,
    /// Velocity-to-pixels factor for lander position updates
    pub position_scale: f32,
    /// Degrees of rotation applied per tick a rotate key is held
    pub rotation_step_degrees: f32,
    /// Maximum endpoint height difference for a landable segment
    pub flatness_tolerance: f32,
    /// View size the run is tuned for
    pub view_width: f32,
    pub view_height: f32,
    /// Half extents of the lander's collision box
    pub lander_half_extents: Vec2,
    /// Terrain generation
    pub terrain: TerrainConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 4.0,
            thruster_force: 10.0,
            initial_horizontal_speed: 200_000.0,
            max_horizontal_landing_speed: 70_000.0,
            max_vertical_landing_speed: 60_000.0,
            scroll_factor: 1e-8,
            position_scale: 1e-8,
            rotation_step_degrees: 2.0,
            flatness_tolerance: 2.0,
            view_width: 800.0,
            view_height: 600.0,
            lander_half_extents: Vec2::splat(16.0),
            terrain: TerrainConfig::default(),
        }
    }
}

impl Config {
    /// Lander spawn position for this view size
    pub fn lander_start(&self) -> Vec2 {
        Vec2::new(self.view_width / 2.0, self.view_height / 3.0)
    }

    /// Terrain baseline at spawn
    pub fn terrain_start_y(&self) -> f32 {
        3.0 * self.view_height / 4.0
    }

    /// Highest point (smallest y) the terrain may wander to
    pub fn terrain_min_y(&self) -> f32 {
        self.view_height / 5.0
    }

    /// Lowest point (largest y) the terrain may wander to
    pub fn terrain_max_y(&self) -> f32 {
        self.view_height - 20.0
    }
}

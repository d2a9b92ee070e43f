//! Lander physics body
//!
//! Euler force integration with mass normalized to 1 and no explicit
//! delta-time: the tuning constants assume one tick per rendered frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::BoundingBox;
use crate::config::Config;
use crate::heading_from_degrees;

/// The player's lander
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lander {
    /// Center position in screen coordinates (y grows downward)
    pub position: Vec2,
    pub velocity: Vec2,
    /// Rotation in degrees, clockwise from straight up
    pub rotation_degrees: f32,
    pub thrusters_on: bool,
    half_extents: Vec2,
}

impl Lander {
    pub fn new(cfg: &Config) -> Self {
        Self {
            position: cfg.lander_start(),
            velocity: Vec2::new(cfg.initial_horizontal_speed, 0.0),
            rotation_degrees: 0.0,
            thrusters_on: false,
            half_extents: cfg.lander_half_extents,
        }
    }

    /// Integrate one tick of gravity plus booster force.
    ///
    /// The horizontal position is deliberately held fixed: the lander stays
    /// put on screen while the terrain scrolls with its horizontal velocity.
    pub fn update(&mut self, cfg: &Config) {
        let booster = if self.thrusters_on {
            cfg.thruster_force * heading_from_degrees(self.rotation_degrees)
        } else {
            Vec2::ZERO
        };
        let total_force = Vec2::new(0.0, cfg.gravity) + booster;

        // Mass is normalized to 1
        self.velocity += total_force;
        self.position.y += cfg.position_scale * self.velocity.y;
    }

    /// Rotate by a number of discrete input steps (negative = left).
    pub fn rotate_steps(&mut self, steps: f32, cfg: &Config) {
        self.rotation_degrees += steps * cfg.rotation_step_degrees;
    }

    pub fn set_thrusters(&mut self, on: bool) {
        self.thrusters_on = on;
    }
}

impl BoundingBox for Lander {
    fn bounding_box(&self) -> Aabb {
        Aabb::centered(self.position, self.half_extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accumulates_linearly() {
        let cfg = Config::default();
        let mut lander = Lander::new(&cfg);
        for i in 1..=10 {
            lander.update(&cfg);
            assert_eq!(lander.velocity.y, cfg.gravity * i as f32);
        }
    }

    #[test]
    fn test_no_horizontal_force_without_thrust() {
        let cfg = Config::default();
        let mut lander = Lander::new(&cfg);
        let vx = lander.velocity.x;
        for _ in 0..100 {
            lander.update(&cfg);
        }
        assert_eq!(lander.velocity.x, vx);
    }

    #[test]
    fn test_horizontal_position_never_moves() {
        let cfg = Config::default();
        let mut lander = Lander::new(&cfg);
        lander.set_thrusters(true);
        lander.rotate_steps(20.0, &cfg);
        let x = lander.position.x;
        for _ in 0..100 {
            lander.update(&cfg);
        }
        assert_eq!(lander.position.x, x);
    }

    #[test]
    fn test_upright_thrust_counters_gravity() {
        let cfg = Config::default();
        let mut lander = Lander::new(&cfg);
        lander.set_thrusters(true);
        lander.update(&cfg);
        // Straight-up booster: net vertical force is gravity - thruster_force
        assert_eq!(lander.velocity.y, cfg.gravity - cfg.thruster_force);
        assert_eq!(lander.velocity.x, cfg.initial_horizontal_speed);
    }

    #[test]
    fn test_tilted_thrust_pushes_sideways() {
        let cfg = Config::default();
        let mut lander = Lander::new(&cfg);
        lander.set_thrusters(true);
        lander.rotate_steps(45.0, &cfg); // 90 degrees
        lander.update(&cfg);
        assert!(lander.velocity.x > cfg.initial_horizontal_speed);
    }

    #[test]
    fn test_rotation_steps() {
        let cfg = Config::default();
        let mut lander = Lander::new(&cfg);
        lander.rotate_steps(1.0, &cfg);
        assert_eq!(lander.rotation_degrees, 2.0);
        lander.rotate_steps(-2.0, &cfg);
        assert_eq!(lander.rotation_degrees, -2.0);
    }

    #[test]
    fn test_bounding_box_is_centered() {
        let cfg = Config::default();
        let lander = Lander::new(&cfg);
        let bounds = lander.bounding_box();
        assert_eq!(bounds.min, Vec2::new(384.0, 184.0));
        assert_eq!(bounds.max, Vec2::new(416.0, 216.0));
    }
}

//! Game state and capability traits
//!
//! One `GameState` is one run: created at simulation start, mutated every
//! tick, frozen once the run ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::lander::Lander;
use super::outcome::Outcome;
use super::terrain::Terrain;
use crate::config::Config;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Lander airborne, physics running
    Flying,
    /// Touched down gently on near-flat ground
    Landed,
    /// Hit the ground too hard or on a slope
    Crashed,
}

impl Phase {
    /// Whether the run has reached its terminal outcome
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Flying)
    }
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Landed => Phase::Landed,
            Outcome::Crashed => Phase::Crashed,
        }
    }
}

/// Axis-aligned collision bounds, consumed by the collision scan and the
/// rendering collaborator.
pub trait BoundingBox {
    fn bounding_box(&self) -> Aabb;
}

/// Connected polyline geometry, consumed by the collision scan and the
/// rendering collaborator.
pub trait Polyline {
    /// Points in left-to-right order.
    fn points(&self) -> impl Iterator<Item = Vec2> + '_;

    /// Consecutive point pairs as line segments.
    fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points().zip(self.points().skip(1))
    }
}

impl Polyline for [Vec2] {
    fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.iter().copied()
    }
}

/// Complete state of one run (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducible terrain
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: Phase,
    pub lander: Lander,
    pub terrain: Terrain,
}

impl GameState {
    /// Create a fresh run with the given terrain seed.
    pub fn new(seed: u64, cfg: &Config) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: Phase::Flying,
            lander: Lander::new(cfg),
            terrain: Terrain::new(
                cfg.view_width,
                cfg.terrain_start_y(),
                cfg.terrain_min_y(),
                cfg.terrain_max_y(),
                seed,
            ),
        }
    }
}

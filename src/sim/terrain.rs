//! Scrolling procedural terrain
//!
//! The ground is a connected polyline that drifts left with the lander's
//! horizontal velocity and is extended on demand so it always spans the
//! view. Generation is seeded and deterministic.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Polyline;
use crate::config::Config;

/// Ground polyline plus the generator state that extends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Points in left-to-right order. The front point sits at or left of
    /// x = 0, the back point at or right of the view width.
    points: VecDeque<Vec2>,
    width: f32,
    min_y: f32,
    max_y: f32,
    rng: Pcg32,
}

impl Terrain {
    /// Start a new strip at `(0, start_y)`. The polyline fills out to the
    /// right edge on the first `update`.
    pub fn new(width: f32, start_y: f32, min_y: f32, max_y: f32, seed: u64) -> Self {
        let mut points = VecDeque::new();
        points.push_back(Vec2::new(0.0, start_y));
        Self {
            points,
            width,
            min_y,
            max_y,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Scroll with the lander's horizontal velocity, top up coverage on the
    /// right, and drop points that have fully scrolled off the left edge.
    pub fn update(&mut self, x_velocity: f32, cfg: &Config) {
        let shift = cfg.scroll_factor * x_velocity;
        for p in &mut self.points {
            p.x -= shift;
        }
        self.extend(cfg);
        self.prune();
    }

    /// Append points until the polyline reaches the right view edge again.
    fn extend(&mut self, cfg: &Config) {
        let step = &cfg.terrain;
        while let Some(&last) = self.points.back() {
            if last.x >= self.width {
                break;
            }
            let dx = self.rng.random_range(step.step_x.0..=step.step_x.1) as f32;
            let flat = self.rng.random_range(0..step.flat_denominator) == 0;
            let dy = if flat {
                0.0
            } else {
                self.rng.random_range(step.step_y.0..=step.step_y.1) as f32
            };
            let y = (last.y + dy).clamp(self.min_y, self.max_y);
            log::trace!("terrain point at ({}, {}) from dy {}", last.x + dx, y, dy);
            self.points.push_back(Vec2::new(last.x + dx, y));
        }
    }

    /// Pop leading points whose successor already sits at or left of x = 0,
    /// keeping one point off-screen-left so the polyline still enters from
    /// outside the view.
    fn prune(&mut self) {
        while self.points.len() >= 2 && self.points[1].x <= 0.0 {
            self.points.pop_front();
        }
    }
}

impl Polyline for Terrain {
    fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

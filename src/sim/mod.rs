//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per rendered frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod lander;
pub mod outcome;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{Aabb, SegmentHit, first_hit, segments_intersect};
pub use lander::Lander;
pub use outcome::{Outcome, classify_touchdown};
pub use state::{BoundingBox, GameState, Phase, Polyline};
pub use terrain::Terrain;
pub use tick::{TickInput, tick};

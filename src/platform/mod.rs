//! Platform abstraction layer
//!
//! The sim knows nothing about windows, sprites, or fonts. A frontend
//! supplies polled input events and presents the per-frame scene; anything
//! it needs to load up front (sprite, font) can only fail at startup.

pub mod headless;

pub use headless::HeadlessFrontend;

use std::path::{Path, PathBuf};

use glam::Vec2;
use thiserror::Error;

use crate::sim::Phase;

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
}

/// Input events polled once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    CloseRequested,
    KeyPressed(Key),
    KeyReleased(Key),
    Resized { width: f32, height: f32 },
}

/// Fatal frontend startup failures
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("missing required asset: {path}")]
    MissingAsset { path: String },
    #[error("frontend initialization failed: {0}")]
    Init(String),
}

/// Resolve a required startup asset (sprite, font) or fail fatally.
pub fn require_asset(path: &Path) -> Result<PathBuf, FrontendError> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(FrontendError::MissingAsset {
            path: path.display().to_string(),
        })
    }
}

/// End-of-run message overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub text: &'static str,
    pub severity: Severity,
}

/// How a banner should be presented (green vs. red in the reference look)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
}

impl Banner {
    /// Banner for the current phase, if the run has ended.
    pub fn for_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Flying => None,
            Phase::Landed => Some(Self {
                text: "Good job commander, you landed the lunar lander!",
                severity: Severity::Success,
            }),
            Phase::Crashed => Some(Self {
                text: "Oh no you crashed!",
                severity: Severity::Failure,
            }),
        }
    }
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Terrain polyline, left to right
    pub terrain: Vec<Vec2>,
    /// Lander center position
    pub lander_position: Vec2,
    /// Lander rotation in degrees, clockwise from straight up
    pub lander_rotation_degrees: f32,
    pub thrusters_on: bool,
    /// Outcome banner once the run has ended
    pub banner: Option<Banner>,
}

/// Rendering/input collaborator driven by the simulation loop
pub trait Frontend {
    /// Drain all input events that arrived since the last frame.
    fn poll_events(&mut self) -> Vec<Event>;

    /// Present one frame.
    fn present(&mut self, scene: &Scene);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_only_for_terminal_phases() {
        assert_eq!(Banner::for_phase(Phase::Flying), None);

        let landed = Banner::for_phase(Phase::Landed).unwrap();
        assert_eq!(landed.severity, Severity::Success);

        let crashed = Banner::for_phase(Phase::Crashed).unwrap();
        assert_eq!(crashed.severity, Severity::Failure);
        assert!(crashed.text.contains("crashed"));
    }

    #[test]
    fn test_require_asset_accepts_existing_file() {
        // The manifest is always present at the crate root during tests
        assert!(require_asset(Path::new("Cargo.toml")).is_ok());
    }

    #[test]
    fn test_require_asset_reports_missing_file() {
        let err = require_asset(Path::new("no_such_sprite.png")).unwrap_err();
        assert!(err.to_string().contains("no_such_sprite.png"));
    }
}

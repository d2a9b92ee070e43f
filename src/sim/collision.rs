//! Segment collision detection
//!
//! The lander's axis-aligned box is tested edge-by-edge against every
//! terrain segment with the parametric line-line intersection test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Polyline;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn centered(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Corners in clockwise order starting top-left (y grows downward).
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// The four edges as (start, end) pairs: top, right, bottom, left.
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let [tl, tr, br, bl] = self.corners();
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Test whether segment (a1, a2) crosses segment (b1, b2).
///
/// Solves for the intersection parameters `u_a` and `u_b` along each
/// segment; both must land in [0, 1]. Endpoint touches (a parameter of
/// exactly 0 or 1) count as crossings. Parallel or degenerate segments
/// produce a zero denominator and non-finite parameters, which fail the
/// range test - the IEEE-754 behavior is the no-intersection answer.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let denom = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    let u_a = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / denom;
    let u_b = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / denom;

    (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b)
}

/// Terrain segment the lander touched first, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentHit {
    pub from: Vec2,
    pub to: Vec2,
}

/// Scan the polyline in order and return the first segment any box edge
/// crosses. Purely a read: repeating it on unchanged state returns the
/// same answer.
pub fn first_hit<P: Polyline + ?Sized>(bounds: &Aabb, terrain: &P) -> Option<SegmentHit> {
    let edges = bounds.edges();
    terrain
        .segments()
        .find(|&(from, to)| {
            edges
                .iter()
                .any(|&(e1, e2)| segments_intersect(from, to, e1, e2))
        })
        .map(|(from, to)| SegmentHit { from, to })
}

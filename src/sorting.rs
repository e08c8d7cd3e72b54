//! Painter's-algorithm ordering.
//!
//! Every triangle that survives projection becomes a [`DrawCandidate`]
//! tagged with the mean view depth of its three vertices. The whole frame's
//! candidates are then sorted farthest-first so nearer triangles paint over
//! farther ones.
//!
//! Ordering by a single average depth per triangle is an approximation: two
//! triangles whose depth ranges overlap (for instance interpenetrating
//! faces) can end up in the wrong relative order. There is no depth buffer to
//! correct that and none is wanted.

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::projection::ProjectedVertex;
use crate::triangle::Triangle;

/// A triangle whose three vertices all projected, ready for ordering.
///
/// Built fresh each frame and dropped once drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCandidate {
    pub triangle: Triangle,
    pub color: Color,
    pub projected: [ProjectedVertex; 3],
    pub avg_depth: f32,
}

impl DrawCandidate {
    pub fn new(triangle: Triangle, color: Color, projected: [ProjectedVertex; 3]) -> Self {
        let avg_depth = projected.iter().map(|p| p.depth).sum::<f32>() / 3.0;
        Self {
            triangle,
            color,
            projected,
            avg_depth,
        }
    }

    pub fn screen_points(&self) -> [Vec2; 3] {
        self.projected.map(|p| p.screen)
    }
}

/// Sorts candidates by descending average depth (farthest first).
///
/// The sort is stable: candidates with equal depth keep their input order,
/// so a fixed input always yields the same sequence.
pub fn order_back_to_front(candidates: &mut [DrawCandidate]) {
    candidates.sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
}

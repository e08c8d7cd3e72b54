//! Per-frame rendering pipeline.
//!
//! The [`FrameRenderer`] runs the whole pipeline once per frame:
//!
//! 1. every scene triangle, then every avatar triangle, is moved into view
//!    space and projected;
//! 2. a triangle with any vertex at or behind the near plane is dropped whole;
//! 3. survivors become [`DrawCandidate`]s tagged with their average depth;
//! 4. the complete candidate set is sorted farthest-first;
//! 5. each candidate is culled/shaded/drawn in that order.
//!
//! All projection finishes before the sort, and the sort finishes before the
//! first draw call. Nothing but the candidate allocation is kept between
//! frames.

use crate::camera::CameraState;
use crate::config::RenderConfig;
use crate::mesh::Scene;
use crate::projection::{ProjectedVertex, Projection};
use crate::render::{Rasterizer, Surface};
use crate::sorting::{order_back_to_front, DrawCandidate};
use crate::triangle::{Primitive, Triangle};

/// Counters describing one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles submitted (scene + avatar).
    pub triangles: usize,
    /// Dropped because a vertex was at or behind the near plane.
    pub rejected_near: usize,
    /// Triangles that reached the ordering stage.
    pub candidates: usize,
    /// Dropped by the backface test.
    pub culled_backface: usize,
    /// Triangles that produced draw calls.
    pub drawn: usize,
}

/// Projects all three vertices, or `None` if any of them fails.
#[inline]
pub fn project_triangle(
    projection: &Projection,
    camera: &CameraState,
    triangle: &Triangle,
) -> Option<[ProjectedVertex; 3]> {
    let [a, b, c] = triangle.vertices;
    Some([
        projection.project(camera.to_view(a))?,
        projection.project(camera.to_view(b))?,
        projection.project(camera.to_view(c))?,
    ])
}

pub struct FrameRenderer {
    projection: Projection,
    rasterizer: Rasterizer,
    candidates: Vec<DrawCandidate>,
}

impl FrameRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_projection(config.projection())
    }

    pub fn with_projection(projection: Projection) -> Self {
        Self {
            projection,
            rasterizer: Rasterizer::default(),
            candidates: Vec::new(),
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Renders one frame of `scene` plus `avatar` into `surface`.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        scene: &Scene,
        avatar: &[Primitive],
        camera: &CameraState,
        surface: &mut S,
    ) -> FrameStats {
        let mut stats = FrameStats::default();

        self.candidates.clear();
        for primitive in scene.primitives().iter().chain(avatar) {
            for triangle in &primitive.triangles {
                stats.triangles += 1;
                match project_triangle(&self.projection, camera, triangle) {
                    Some(projected) => self.candidates.push(DrawCandidate::new(
                        *triangle,
                        primitive.color,
                        projected,
                    )),
                    None => stats.rejected_near += 1,
                }
            }
        }
        stats.candidates = self.candidates.len();

        order_back_to_front(&mut self.candidates);

        for candidate in &self.candidates {
            let points = candidate.screen_points();
            if self.rasterizer.draw(
                &candidate.triangle,
                candidate.color,
                camera,
                &points,
                surface,
            ) {
                stats.drawn += 1;
            } else {
                stats.culled_backface += 1;
            }
        }
        self.candidates.clear();

        tracing::trace!(
            triangles = stats.triangles,
            rejected_near = stats.rejected_near,
            culled_backface = stats.culled_backface,
            drawn = stats.drawn,
            "frame rendered"
        );
        stats
    }
}

//! Perspective projection from view space to screen space.
//!
//! The [`Projection`] struct holds the screen size, field of view and near
//! plane, and maps view-space points onto the drawing surface. Points at or
//! behind the near plane have no projection; callers treat that as "reject the
//! whole triangle". There is no clipping against any other plane.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A vertex after projection: its screen position plus the view-space depth
/// it was projected from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedVertex {
    pub screen: Vec2,
    /// View-space z, always greater than the near plane.
    pub depth: f32,
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width: f32,
    height: f32,
    /// Horizontal field of view in degrees.
    fov_degrees: f32,
    z_near: f32,
    /// Distance at which one view-space unit spans one pixel:
    /// `(width / 2) / tan(fov / 2)`.
    focal_length: f32,
}

impl Projection {
    /// Creates a projection for a `width` x `height` surface.
    ///
    /// # Arguments
    /// * `fov_degrees` - Horizontal field of view in degrees
    /// * `z_near` - Near plane distance; points with `z <= z_near` are rejected
    pub fn new(width: f32, height: f32, fov_degrees: f32, z_near: f32) -> Self {
        let focal_length = (width * 0.5) / (fov_degrees * 0.5).to_radians().tan();
        Self {
            width,
            height,
            fov_degrees,
            z_near,
            focal_length,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Projects a view-space point onto the screen.
    ///
    /// Returns `None` when the point lies at or behind the near plane. The
    /// test runs before the divide, so the divisor is always above `z_near`.
    /// Screen Y is flipped: view-space Y grows upward, screen rows downward.
    #[inline]
    pub fn project(&self, view: Vec3) -> Option<ProjectedVertex> {
        if view.z <= self.z_near {
            return None;
        }
        let f = self.focal_length / view.z;
        Some(ProjectedVertex {
            screen: Vec2::new(self.width * 0.5 + view.x * f, self.height * 0.5 - view.y * f),
            depth: view.z,
        })
    }
}

//! Per-triangle culling, flat shading and draw-call emission.
//!
//! For each triangle the rasterizer:
//! 1. computes the world-space normal `(c − a) × (b − a)`,
//! 2. discards it when the normal does not point toward the camera,
//! 3. derives a single shade factor from the normal's Z component,
//! 4. emits a filled polygon followed by a brighter one-pixel outline.
//!
//! # Shading
//!
//! ```text
//! shade = clamp(0.65 + clamp(N.z · 0.01, −1, 1), 0.35, 1.0)
//! ```
//!
//! `N` is not normalized, so larger triangles shade more strongly than small
//! ones with the same orientation.

use super::{Surface, OUTLINE_WIDTH};
use crate::camera::CameraState;
use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

pub const BASE_BRIGHTNESS: f32 = 0.65;
pub const MIN_SHADE: f32 = 0.35;
pub const MAX_SHADE: f32 = 1.0;
/// Scale applied to the raw normal Z before it shifts the base brightness.
pub const NORMAL_Z_SCALE: f32 = 0.01;
/// Amount added to each fill channel to get the outline color.
pub const OUTLINE_BRIGHTEN: u8 = 35;

/// True when the face described by `normal` points toward `camera_position`.
///
/// Zero-area triangles have a zero normal and are never front-facing.
#[inline]
pub fn is_front_facing(normal: Vec3, vertex: Vec3, camera_position: Vec3) -> bool {
    normal.dot(camera_position - vertex) > 0.0
}

/// Flat shade factor for a face normal, always within `[MIN_SHADE, MAX_SHADE]`.
#[inline]
pub fn shade_factor(normal: Vec3) -> f32 {
    let tilt = (normal.z * NORMAL_Z_SCALE).clamp(-1.0, 1.0);
    // NaN survives clamp; fall back to the base brightness
    let shade = (BASE_BRIGHTNESS + tilt).clamp(MIN_SHADE, MAX_SHADE);
    if shade.is_nan() {
        BASE_BRIGHTNESS
    } else {
        shade
    }
}

/// Culls, shades and draws single triangles.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    pub outline_width: u32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            outline_width: OUTLINE_WIDTH,
        }
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one triangle whose vertices already projected to `points`.
    ///
    /// Returns `false` (and emits nothing) when the triangle is back-facing
    /// or degenerate.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        triangle: &Triangle,
        color: Color,
        camera: &CameraState,
        points: &[Vec2; 3],
        surface: &mut S,
    ) -> bool {
        let normal = triangle.normal();
        if !is_front_facing(normal, triangle.vertices[0], camera.position()) {
            return false;
        }

        let fill = color.scale(shade_factor(normal));
        surface.fill_polygon(points, fill);
        surface.outline_polygon(points, fill.brighten(OUTLINE_BRIGHTEN), self.outline_width);
        true
    }
}

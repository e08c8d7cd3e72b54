//! Scanline-based solid triangle fill.
//!
//! The classic flat-top/flat-bottom decomposition: sort the vertices by Y,
//! split a general triangle at the middle vertex's row, then fill each half
//! one horizontal span at a time.
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//! ```
//!
//! Rows are clamped to the buffer before iterating, so triangles that project
//! far outside the screen cost no more than ones that cover it.

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// Fills a triangle with a single packed ARGB color.
pub(crate) fn fill_triangle(points: &[Vec2; 3], buffer: &mut FrameBuffer, color: u32) {
    let [mut v0, mut v1, mut v2] = *points;
    if !(v0.x.is_finite() && v1.x.is_finite() && v2.x.is_finite())
        || !(v0.y.is_finite() && v1.y.is_finite() && v2.y.is_finite())
    {
        return;
    }
    sort_vertices(&mut v0, &mut v1, &mut v2);

    // Already flat-bottom
    if (v1.y - v2.y).abs() < f32::EPSILON {
        fill_flat_bottom(v0, v1, v2, buffer, color);
        return;
    }

    // Already flat-top
    if (v0.y - v1.y).abs() < f32::EPSILON {
        fill_flat_top(v0, v1, v2, buffer, color);
        return;
    }

    // General triangle: split point lies on edge v0->v2 at the same Y as v1
    let t = (v1.y - v0.y) / (v2.y - v0.y);
    let split = Vec2::new(v0.x + (v2.x - v0.x) * t, v1.y);

    fill_flat_bottom(v0, v1, split, buffer, color);
    fill_flat_top(v1, split, v2, buffer, color);
}

/// Sorts three vertices by Y, top to bottom. After sorting: `v0.y <= v1.y <= v2.y`
fn sort_vertices(v0: &mut Vec2, v1: &mut Vec2, v2: &mut Vec2) {
    if v1.y < v0.y {
        std::mem::swap(v0, v1);
    }
    if v2.y < v1.y {
        std::mem::swap(v1, v2);
    }
    if v1.y < v0.y {
        std::mem::swap(v0, v1);
    }
}

/// Row range `[start, end]` covered by `top..=bottom`, clamped to the buffer.
fn row_range(top: f32, bottom: f32, height: u32) -> (i32, i32) {
    let max_row = height as f32 - 1.0;
    (
        top.ceil().max(0.0) as i32,
        bottom.floor().min(max_row) as i32,
    )
}

/// `v0` is the apex; `v1` and `v2` share the bottom row.
fn fill_flat_bottom(v0: Vec2, v1: Vec2, v2: Vec2, buffer: &mut FrameBuffer, color: u32) {
    let height = v1.y - v0.y;
    if height.abs() < f32::EPSILON {
        return;
    }

    let inv_slope_1 = (v1.x - v0.x) / height;
    let inv_slope_2 = (v2.x - v0.x) / height;

    let (y_start, y_end) = row_range(v0.y, v1.y, buffer.height());
    for y in y_start..=y_end {
        let dy = y as f32 - v0.y;
        let x1 = v0.x + inv_slope_1 * dy;
        let x2 = v0.x + inv_slope_2 * dy;
        buffer.fill_span(y, x1.min(x2).ceil(), x1.max(x2).floor(), color);
    }
}

/// `v0` and `v1` share the top row; `v2` is the apex.
fn fill_flat_top(v0: Vec2, v1: Vec2, v2: Vec2, buffer: &mut FrameBuffer, color: u32) {
    let height = v2.y - v0.y;
    if height.abs() < f32::EPSILON {
        return;
    }

    let inv_slope_1 = (v2.x - v0.x) / height;
    let inv_slope_2 = (v2.x - v1.x) / height;

    let (y_start, y_end) = row_range(v0.y, v2.y, buffer.height());
    for y in y_start..=y_end {
        let dy = y as f32 - v0.y;
        let x1 = v0.x + inv_slope_1 * dy;
        let x2 = v1.x + inv_slope_2 * dy;
        buffer.fill_span(y, x1.min(x2).ceil(), x1.max(x2).floor(), color);
    }
}

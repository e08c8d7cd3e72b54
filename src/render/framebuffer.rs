//! CPU pixel buffer.
//!
//! Owns an ARGB8888 color buffer and implements [`Surface`] on it with a
//! scanline polygon fill and Bresenham outlines. There is no
//! depth buffer: whatever is drawn last wins.

use super::{scanline, Surface};
use crate::colors::Color;
use crate::math::vec2::Vec2;

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![0xFF00_0000; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.clear_argb(color.to_argb());
    }

    pub fn clear_argb(&mut self, argb: u32) {
        self.color_buffer.fill(argb);
    }

    /// Fills each row with a blend from `top` (first row) to `bottom` (last row).
    pub fn fill_vertical_gradient(&mut self, top: Color, bottom: Color) {
        let span = self.height.saturating_sub(1).max(1) as f32;
        let width = self.width as usize;
        for (y, row) in self.color_buffer.chunks_exact_mut(width.max(1)).enumerate() {
            row.fill(top.lerp(bottom, y as f32 / span).to_argb());
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Fills pixel columns `left..=right` of row `y`, clamped to the buffer.
    #[inline]
    pub(crate) fn fill_span(&mut self, y: i32, left: f32, right: f32, color: u32) {
        if y < 0 || y >= self.height as i32 || self.width == 0 {
            return;
        }
        let max_col = self.width as f32 - 1.0;
        let left = left.max(0.0);
        let right = right.min(max_col);
        if !(left <= right) {
            return;
        }
        let row = y as usize * self.width as usize;
        self.color_buffer[row + left as usize..=row + right as usize].fill(color);
    }

    /// Fills a `width` x `height` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: u32) {
        let right = x as f32 + width as f32 - 1.0;
        for row in y..y.saturating_add(height as i32) {
            self.fill_span(row, x as f32, right, color);
        }
    }

    /// Draws a rectangle border `thickness` pixels wide, inside the given bounds.
    pub fn outline_rect(&mut self, x: i32, y: i32, width: u32, height: u32, thickness: u32, color: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let t = thickness.min(width / 2).min(height / 2).max(1);
        self.fill_rect(x, y, width, t, color);
        self.fill_rect(x, y + (height - t) as i32, width, t, color);
        self.fill_rect(x, y, t, height, color);
        self.fill_rect(x + (width - t) as i32, y, t, height, color);
    }

    /// Draws a line with Bresenham's algorithm after clipping it to the buffer.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32) {
        let Some((a, b)) = self.clip_line(from, to) else {
            return;
        };
        let (x0, y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let x_step = if x0 < x1 { 1 } else { -1 };
        let y_step = if y0 < y1 { 1 } else { -1 };

        // Positive error favors stepping in x, negative in y.
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }

    /// Cohen-Sutherland clipping against the buffer rectangle.
    ///
    /// Returns `None` when the segment misses the buffer entirely or has a
    /// non-finite endpoint.
    fn clip_line(&self, mut a: Vec2, mut b: Vec2) -> Option<(Vec2, Vec2)> {
        const INSIDE: u8 = 0;
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const BOTTOM: u8 = 4;
        const TOP: u8 = 8;
        // Converges in at most four clips for finite input
        const MAX_ITERATIONS: u32 = 8;

        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return None;
        }

        let max_x = self.width as f32 - 1.0;
        let max_y = self.height as f32 - 1.0;
        let outcode = |p: Vec2| -> u8 {
            let mut code = INSIDE;
            if p.x < 0.0 {
                code |= LEFT;
            } else if p.x > max_x {
                code |= RIGHT;
            }
            if p.y < 0.0 {
                code |= TOP;
            } else if p.y > max_y {
                code |= BOTTOM;
            }
            code
        };

        let mut code_a = outcode(a);
        let mut code_b = outcode(b);

        for _ in 0..MAX_ITERATIONS {
            if (code_a | code_b) == INSIDE {
                return Some((a, b));
            }
            if (code_a & code_b) != 0 {
                return None;
            }

            let code_out = if code_a != INSIDE { code_a } else { code_b };
            let dx = b.x - a.x;
            let dy = b.y - a.y;

            // A set outcode bit implies a non-zero extent along that axis.
            let clipped = if (code_out & BOTTOM) != 0 {
                Vec2::new(a.x + dx * (max_y - a.y) / dy, max_y)
            } else if (code_out & TOP) != 0 {
                Vec2::new(a.x + dx * (0.0 - a.y) / dy, 0.0)
            } else if (code_out & RIGHT) != 0 {
                Vec2::new(max_x, a.y + dy * (max_x - a.x) / dx)
            } else {
                Vec2::new(0.0, a.y + dy * (0.0 - a.x) / dx)
            };

            if code_out == code_a {
                a = clipped;
                code_a = outcode(a);
            } else {
                b = clipped;
                code_b = outcode(b);
            }
        }

        None
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer as raw bytes, in the native-endian ARGB8888 layout
    /// SDL streaming textures expect.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and alignment 4 >= 1; the byte slice
        // covers exactly the same allocation and borrows `self` immutably.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl Surface for FrameBuffer {
    fn fill_polygon(&mut self, points: &[Vec2; 3], color: Color) {
        scanline::fill_triangle(points, self, color.to_argb());
    }

    fn outline_polygon(&mut self, points: &[Vec2; 3], color: Color, width: u32) {
        let argb = color.to_argb();
        // Wider outlines are drawn as parallel one-pixel strokes.
        let offsets = (0..width.max(1) as i32).map(|k| (k + 1) / 2 * if k % 2 == 0 { 1 } else { -1 });
        for offset in offsets {
            let shift = Vec2::new(offset as f32, offset as f32);
            for i in 0..3 {
                let a = points[i];
                let b = points[(i + 1) % 3];
                self.draw_line(
                    Vec2::new(a.x + shift.x, a.y + shift.y),
                    Vec2::new(b.x + shift.x, b.y + shift.y),
                    argb,
                );
            }
        }
    }
}

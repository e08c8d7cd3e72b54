//! Draw calls and the surfaces that receive them.
//!
//! The frame renderer never touches pixels directly. It emits
//! [`DrawCall`]s into a [`Surface`]:
//! - [`FrameBuffer`]: CPU pixel buffer, presented by the window or saved as PNG
//! - [`DrawList`]: records calls in order, for inspection and replay
//!
//! Menu and HUD text is drawn straight into the [`FrameBuffer`] by [`text`].

mod framebuffer;
pub mod rasterizer;
mod scanline;
pub mod text;

pub use framebuffer::FrameBuffer;
pub use rasterizer::Rasterizer;

use crate::colors::Color;
use crate::math::vec2::Vec2;

/// Outline width used for triangle edges, in pixels.
pub const OUTLINE_WIDTH: u32 = 1;

/// A single 2D drawing operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    FillPolygon {
        points: [Vec2; 3],
        color: Color,
    },
    OutlinePolygon {
        points: [Vec2; 3],
        color: Color,
        width: u32,
    },
}

/// A 2D drawing target.
///
/// Later calls paint over earlier ones; there is no depth test.
pub trait Surface {
    fn fill_polygon(&mut self, points: &[Vec2; 3], color: Color);

    fn outline_polygon(&mut self, points: &[Vec2; 3], color: Color, width: u32);

    fn draw(&mut self, call: &DrawCall) {
        match *call {
            DrawCall::FillPolygon { points, color } => self.fill_polygon(&points, color),
            DrawCall::OutlinePolygon {
                points,
                color,
                width,
            } => self.outline_polygon(&points, color, width),
        }
    }
}

/// Records draw calls in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Re-issues every recorded call, in order, onto another surface.
    pub fn replay<S: Surface>(&self, target: &mut S) {
        for call in &self.calls {
            target.draw(call);
        }
    }
}

impl Surface for DrawList {
    fn fill_polygon(&mut self, points: &[Vec2; 3], color: Color) {
        self.calls.push(DrawCall::FillPolygon {
            points: *points,
            color,
        });
    }

    fn outline_polygon(&mut self, points: &[Vec2; 3], color: Color, width: u32) {
        self.calls.push(DrawCall::OutlinePolygon {
            points: *points,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_replays_in_order() {
        let points = [
            Vec2::new(10.0, 10.0),
            Vec2::new(30.0, 10.0),
            Vec2::new(20.0, 30.0),
        ];
        let mut list = DrawList::new();
        list.fill_polygon(&points, Color::new(1, 2, 3));
        list.outline_polygon(&points, Color::new(4, 5, 6), OUTLINE_WIDTH);

        let mut copy = DrawList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
        assert!(matches!(copy.calls()[0], DrawCall::FillPolygon { .. }));
        assert!(matches!(copy.calls()[1], DrawCall::OutlinePolygon { width: 1, .. }));
    }
}

use crate::colors::Color;
use crate::math::vec3::Vec3;

/// A world-space triangle.
///
/// Winding is meaningful: a face is front-facing when its vertices appear
/// counter-clockwise to the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Unnormalized outward normal, `(c − a) × (b − a)`.
    ///
    /// View space is left-handed, so counter-clockwise winding (as seen from
    /// the front) needs `ac × ab` to point toward the viewer. Its length is
    /// twice the triangle's area; degenerate triangles give a zero vector.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (c - a).cross(b - a)
    }

    /// The same triangle with the opposite winding.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(a, c, b)
    }
}

/// Triangles sharing one color, e.g. the 12 triangles of a box.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub triangles: Vec<Triangle>,
    pub color: Color,
}

impl Primitive {
    pub fn new(triangles: Vec<Triangle>, color: Color) -> Self {
        Self { triangles, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_clockwise_face_points_at_viewer() {
        // Viewer at the origin looking down +Z; CCW on screen.
        let tri = Triangle::new(
            Vec3::new(-1.0, -1.0, 10.0),
            Vec3::new(1.0, -1.0, 10.0),
            Vec3::new(0.0, 1.0, 10.0),
        );
        assert_eq!(tri.normal(), Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(tri.flipped().normal(), Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let collinear = Triangle::new(p, p * 2.0, p * 3.0);
        assert_eq!(collinear.normal(), Vec3::ZERO);
        assert_eq!(Triangle::new(p, p, p).normal(), Vec3::ZERO);
    }
}

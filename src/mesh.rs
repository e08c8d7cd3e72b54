//! Box geometry and the hand-authored scene.
//!
//! Everything here is plain mesh generation: axis-aligned boxes built from a
//! center and a size, assembled into the static castle scene and the avatar.

use crate::colors::{self, Color};
use crate::math::vec3::Vec3;
use crate::triangle::{Primitive, Triangle};

pub const BOX_TRIANGLES: usize = 12;

// Corner `i` of a unit box: bit 0 selects +X, bit 1 +Y, bit 2 +Z.
const CORNER_OFFSETS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

// Each quad is counter-clockwise when viewed from outside the box.
const BOX_QUADS: [[usize; 4]; 6] = [
    // -Z
    [0, 1, 3, 2],
    // +Z
    [5, 4, 6, 7],
    // +X
    [1, 5, 7, 3],
    // -X
    [4, 0, 2, 6],
    // +Y
    [2, 3, 7, 6],
    // -Y
    [4, 5, 1, 0],
];

impl Primitive {
    /// Builds an axis-aligned box of `size` (full extents) around `center`.
    ///
    /// Produces 12 triangles whose normals all point out of the box.
    pub fn cuboid(center: Vec3, size: Vec3, color: Color) -> Self {
        let corners = CORNER_OFFSETS.map(|s| {
            center + Vec3::new(s.x * size.x, s.y * size.y, s.z * size.z)
        });

        let triangles = BOX_QUADS
            .iter()
            .flat_map(|&[p0, p1, p2, p3]| {
                [
                    Triangle::new(corners[p0], corners[p1], corners[p2]),
                    Triangle::new(corners[p0], corners[p2], corners[p3]),
                ]
            })
            .collect();

        Self::new(triangles, color)
    }
}

/// The static part of the world. Built once and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(|p| p.triangles.len()).sum()
    }
}

const GROUND_TILE: f32 = 40.0;

/// Ground tiles, buildings, the gold star and a stepped tower.
pub fn castle_scene() -> Scene {
    let mut primitives = Vec::new();

    // 3x3 ground tiles, spaced two tile-widths apart.
    for dx in -1..=1 {
        for dz in -1..=1 {
            primitives.push(Primitive::cuboid(
                Vec3::new(dx as f32 * GROUND_TILE * 2.0, -1.0, dz as f32 * GROUND_TILE * 2.0),
                Vec3::new(GROUND_TILE, 1.0, GROUND_TILE),
                colors::GRASS,
            ));
        }
    }

    let buildings = [
        (Vec3::new(0.0, 2.0, 0.0), Vec3::new(2.0, 2.0, 2.0), colors::BRICK),
        (Vec3::new(12.0, 1.0, 8.0), Vec3::new(3.0, 1.0, 3.0), colors::WOOD),
        (Vec3::new(-10.0, 1.5, -5.0), Vec3::new(1.5, 1.5, 1.5), colors::WOOD),
        (Vec3::new(8.0, 2.0, -8.0), Vec3::new(2.0, 2.0, 2.0), colors::BRICK),
        (Vec3::new(-8.0, 1.0, 10.0), Vec3::new(2.5, 1.0, 2.5), colors::WOOD),
    ];
    for (center, size, color) in buildings {
        primitives.push(Primitive::cuboid(center, size, color));
    }

    // Star
    primitives.push(Primitive::cuboid(
        Vec3::new(0.0, 8.0, 0.0),
        Vec3::new(2.0, 2.0, 2.0),
        colors::GOLD,
    ));

    for step in 0..3 {
        let side = (4 - step) as f32;
        primitives.push(Primitive::cuboid(
            Vec3::new(-15.0, step as f32 * 2.0, 15.0),
            Vec3::new(side, 2.0, side),
            colors::GRASS,
        ));
    }

    let scene = Scene::new(primitives);
    tracing::debug!(
        primitives = scene.primitives().len(),
        triangles = scene.triangle_count(),
        "built castle scene"
    );
    scene
}

/// Body and head boxes for an avatar standing at `position`.
///
/// Rebuilt every frame from the current position.
pub fn avatar_primitives(position: Vec3) -> [Primitive; 2] {
    [
        Primitive::cuboid(position, Vec3::new(0.5, 0.75, 0.35), colors::AVATAR_BODY),
        Primitive::cuboid(
            position + Vec3::UP,
            Vec3::new(0.35, 0.3, 0.35),
            colors::AVATAR_SKIN,
        ),
    ]
}

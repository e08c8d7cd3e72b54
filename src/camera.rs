//! Camera state and the orbit controller that drives it.
//!
//! # Coordinate System
//!
//! View space is **left-handed**:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into the scene)
//!
//! # Orientation
//!
//! - **Yaw**: rotation around the vertical axis. Unbounded; wraps through
//!   trigonometric periodicity. Positive yaw turns the view to the left.
//! - **Pitch**: rotation around the horizontal axis, positive = look up.
//!   Always kept within [`PITCH_MIN`, `PITCH_MAX`].

use crate::math::vec3::Vec3;
use crate::window::InputState;

/// Lowest allowed pitch (looking down), in radians.
pub const PITCH_MIN: f32 = -0.48;
/// Highest allowed pitch (looking up), in radians.
pub const PITCH_MAX: f32 = 0.92;

/// Position and orientation the renderer views the scene from.
///
/// The renderer only ever borrows this; the input/game layer owns and
/// mutates it between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, 0.0)
    }
}

impl CameraState {
    /// Creates a camera. `pitch` is clamped into the allowed range.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(PITCH_MIN, PITCH_MAX),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Applies yaw and pitch deltas. Pitch is clamped to its limits.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Transforms a world-space point into view space.
    ///
    /// Translate by the camera position, then yaw, then pitch. The order
    /// matters: pitch is applied to the already-yawed point.
    #[inline]
    pub fn to_view(&self, point: Vec3) -> Vec3 {
        (point - self.position)
            .rotate_y(self.yaw)
            .rotate_x(self.pitch)
    }

    /// World direction that maps onto view-space +Z.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// World direction that maps onto view-space +X. Always horizontal.
    pub fn right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    /// Horizontal component of [`forward`](Self::forward), unit length.
    pub fn flat_forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(-sin_yaw, 0.0, cos_yaw)
    }
}

// =============================================================================
// Orbit Controller
// =============================================================================

/// Keeps the camera orbiting a target (the avatar) under mouse control.
#[derive(Debug, Clone)]
pub struct OrbitCameraController {
    /// Distance kept between camera and target.
    pub distance: f32,
    /// Mouse sensitivity in radians per pixel.
    pub look_sensitivity: f32,
    /// The camera is never placed below this height.
    pub min_height: f32,
}

impl Default for OrbitCameraController {
    fn default() -> Self {
        Self {
            distance: 26.0,
            look_sensitivity: 0.0022,
            min_height: 2.0,
        }
    }
}

impl OrbitCameraController {
    pub fn new(distance: f32) -> Self {
        Self {
            distance,
            ..Self::default()
        }
    }

    /// Applies mouse look, then places the camera behind `target`.
    ///
    /// Moving the mouse right turns right; moving it up looks up.
    pub fn update(&self, camera: &mut CameraState, target: Vec3, input: &InputState) {
        let (dx, dy) = input.mouse_delta;
        if dx != 0 || dy != 0 {
            camera.rotate(
                -(dx as f32) * self.look_sensitivity,
                -(dy as f32) * self.look_sensitivity,
            );
        }
        self.follow(camera, target);
    }

    /// Places the camera `distance` units behind `target` along its view
    /// direction, lifted to `min_height` if needed.
    pub fn follow(&self, camera: &mut CameraState, target: Vec3) {
        let mut position = target - camera.forward() * self.distance;
        position.y = position.y.max(self.min_height);
        camera.set_position(position);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn identity_camera_leaves_points_unchanged() {
        let camera = CameraState::default();
        let p = Vec3::new(1.5, -2.0, 7.0);
        assert_eq!(camera.to_view(p), p);
    }

    #[test]
    fn translation_happens_before_rotation() {
        let camera = CameraState::new(Vec3::new(0.0, 0.0, -5.0), 0.0, 0.0);
        let v = camera.to_view(Vec3::ZERO);
        assert_relative_eq!(v.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn yaw_quarter_turn_brings_negative_x_in_front() {
        let camera = CameraState::new(Vec3::ZERO, FRAC_PI_2, 0.0);
        let v = camera.to_view(Vec3::new(-3.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_wraps_through_periodicity() {
        let p = Vec3::new(2.0, 1.0, 4.0);
        let a = CameraState::new(Vec3::ZERO, 0.3, 0.1).to_view(p);
        let b = CameraState::new(Vec3::ZERO, 0.3 + TAU, 0.1).to_view(p);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
    }

    #[test]
    fn pitch_is_clamped_on_construction_and_rotation() {
        let mut camera = CameraState::new(Vec3::ZERO, 0.0, PI);
        assert_eq!(camera.pitch(), PITCH_MAX);
        camera.rotate(0.0, -10.0);
        assert_eq!(camera.pitch(), PITCH_MIN);
    }

    #[test]
    fn forward_maps_onto_view_z() {
        let camera = CameraState::new(Vec3::new(3.0, 1.0, -2.0), 1.1, 0.4);
        let ahead = camera.position() + camera.forward() * 10.0;
        let v = camera.to_view(ahead);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(v.z, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn right_maps_onto_view_x() {
        let camera = CameraState::new(Vec3::ZERO, -0.7, 0.0);
        let v = camera.to_view(camera.right() * 2.0);
        assert_relative_eq!(v.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn orbit_places_target_straight_ahead() {
        let controller = OrbitCameraController::default();
        let mut camera = CameraState::new(Vec3::ZERO, 0.5, -0.3);
        let target = Vec3::new(4.0, 1.0, 4.0);
        controller.follow(&mut camera, target);

        let v = camera.to_view(target);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(v.z, controller.distance, epsilon = 1e-3);
    }

    #[test]
    fn orbit_never_goes_below_min_height() {
        let controller = OrbitCameraController::default();
        let mut camera = CameraState::new(Vec3::ZERO, 0.0, PITCH_MAX);
        controller.follow(&mut camera, Vec3::new(0.0, 1.0, 0.0));
        assert!(camera.position().y >= controller.min_height);
    }

    #[test]
    fn mouse_right_turns_camera_right() {
        let controller = OrbitCameraController::default();
        let mut camera = CameraState::default();
        let input = InputState {
            mouse_delta: (100, 0),
            ..InputState::default()
        };
        controller.update(&mut camera, Vec3::ZERO, &input);
        assert_relative_eq!(camera.yaw(), -100.0 * controller.look_sensitivity);
        // Turning right swings the forward vector toward +X
        assert!(camera.forward().x > 0.0);
    }
}

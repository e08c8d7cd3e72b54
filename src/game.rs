//! The avatar the camera follows.
//!
//! Movement is relative to the camera's heading: forward walks away from the
//! camera, strafing follows the camera's right vector. Jumping uses a simple
//! constant-gravity integration with a flat floor.

use crate::camera::CameraState;
use crate::math::vec3::Vec3;
use crate::window::InputState;

/// Walking speed in units per second.
pub const MOVE_SPEED: f32 = 16.0;
/// Vertical acceleration in units per second squared.
pub const GRAVITY: f32 = -42.0;
/// Upward velocity applied at the start of a jump.
pub const JUMP_VELOCITY: f32 = 14.0;
/// Height of the avatar's center when standing on the floor.
pub const GROUND_Y: f32 = 1.0;

const GROUNDED_TOLERANCE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    position: Vec3,
    vertical_velocity: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, GROUND_Y, 0.0))
    }
}

impl Avatar {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_grounded(&self) -> bool {
        self.position.y <= GROUND_Y + GROUNDED_TOLERANCE
    }

    /// Advances the avatar by `delta_time` seconds.
    pub fn update(&mut self, input: &InputState, camera: &CameraState, delta_time: f32) {
        let step = MOVE_SPEED * delta_time;
        let forward = camera.flat_forward();
        let right = camera.right();

        let mut motion = Vec3::ZERO;
        if input.forward {
            motion = motion + forward;
        }
        if input.back {
            motion = motion - forward;
        }
        if input.right {
            motion = motion + right;
        }
        if input.left {
            motion = motion - right;
        }
        self.position = self.position + motion * step;

        if input.jump && self.is_grounded() {
            self.vertical_velocity = JUMP_VELOCITY;
        }
        self.vertical_velocity += GRAVITY * delta_time;
        self.position.y += self.vertical_velocity * delta_time;

        if self.position.y <= GROUND_Y {
            self.position.y = GROUND_Y;
            self.vertical_velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn forward_walks_along_camera_heading() {
        let mut avatar = Avatar::default();
        let camera = CameraState::new(Vec3::ZERO, FRAC_PI_2, 0.3);
        let input = InputState {
            forward: true,
            ..InputState::default()
        };
        avatar.update(&input, &camera, 0.5);

        // Heading at yaw = pi/2 is -X; pitch does not tilt the walk.
        assert_relative_eq!(avatar.position().x, -8.0, epsilon = 1e-4);
        assert_relative_eq!(avatar.position().z, 0.0, epsilon = 1e-4);
        assert_eq!(avatar.position().y, GROUND_Y);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut avatar = Avatar::default();
        let input = InputState {
            forward: true,
            back: true,
            left: true,
            right: true,
            ..InputState::default()
        };
        avatar.update(&input, &CameraState::default(), DT);
        assert_eq!(avatar.position(), Avatar::default().position());
    }

    #[test]
    fn jump_rises_then_lands() {
        let mut avatar = Avatar::default();
        let jump = InputState {
            jump: true,
            ..InputState::default()
        };
        let camera = CameraState::default();

        avatar.update(&jump, &camera, DT);
        assert!(avatar.position().y > GROUND_Y);
        assert!(!avatar.is_grounded());

        // Holding jump mid-air does not add height.
        let airborne_velocity = avatar.vertical_velocity;
        avatar.update(&jump, &camera, DT);
        assert!(avatar.vertical_velocity < airborne_velocity);

        for _ in 0..120 {
            avatar.update(&InputState::default(), &camera, DT);
        }
        assert_eq!(avatar.position().y, GROUND_Y);
        assert!(avatar.is_grounded());
    }

    #[test]
    fn never_falls_through_floor() {
        let mut avatar = Avatar::default();
        for _ in 0..10 {
            avatar.update(&InputState::default(), &CameraState::default(), 1.0);
            assert_eq!(avatar.position().y, GROUND_Y);
        }
    }
}

//! A CPU software renderer for a small low-poly scene.
//!
//! Every frame is rebuilt from scratch: world triangles are moved into view
//! space, projected with a perspective divide, sorted back-to-front and drawn
//! with flat shading. There is no depth buffer; painter's order decides
//! visibility. SDL2 is used only for the window and input; menu and HUD
//! text is drawn from an 8x8 bitmap font.
//!
//! # Quick Start
//!
//! ```ignore
//! use lowpoly::prelude::*;
//!
//! let config = RenderConfig::default();
//! let scene = castle_scene();
//! let mut renderer = FrameRenderer::new(&config);
//! let mut frame = FrameBuffer::new(config.screen_width, config.screen_height);
//! let camera = CameraState::new(Vec3::new(0.0, 4.0, -26.0), 0.0, 0.0);
//! renderer.render(&scene, &[], &camera, &mut frame);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod math;
pub mod menu;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod screenshot;
pub mod sorting;
pub mod triangle;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use engine::{FrameRenderer, FrameStats};
pub use error::Error;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use lowpoly::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{CameraState, OrbitCameraController, PITCH_MAX, PITCH_MIN};

    // Configuration
    pub use crate::config::RenderConfig;

    // Engine
    pub use crate::engine::{FrameRenderer, FrameStats};

    // Menus
    pub use crate::menu::{FileSlot, GameState, MenuAction};

    // Scene
    pub use crate::colors::Color;
    pub use crate::game::Avatar;
    pub use crate::mesh::{avatar_primitives, castle_scene, Scene};
    pub use crate::triangle::{Primitive, Triangle};

    // Projection
    pub use crate::projection::{ProjectedVertex, Projection};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{DrawCall, DrawList, FrameBuffer, Surface};

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}

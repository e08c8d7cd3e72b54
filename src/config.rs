//! Startup render configuration.
//!
//! A [`RenderConfig`] is fixed for the lifetime of a frame loop. A window
//! resize produces a new value via [`RenderConfig::resized`] rather than
//! mutating shared state.

use thiserror::Error;

use crate::projection::Projection;

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_FOV_DEGREES: f32 = 52.0;
pub const DEFAULT_NEAR_CLIP: f32 = 0.1;
pub const DEFAULT_FAR_CLIP: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen size must be non-zero, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("near clip must be positive, got {0}")]
    NearClip(f32),
    #[error("far clip ({far}) must lie beyond near clip ({near})")]
    FarClip { near: f32, far: f32 },
}

/// Screen and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Horizontal field of view, in degrees.
    pub field_of_view: f32,
    pub near_clip: f32,
    /// Reserved; the renderer never rejects by distance.
    pub far_clip: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_WIDTH,
            screen_height: DEFAULT_HEIGHT,
            field_of_view: DEFAULT_FOV_DEGREES,
            near_clip: DEFAULT_NEAR_CLIP,
            far_clip: DEFAULT_FAR_CLIP,
        }
    }
}

impl RenderConfig {
    /// Checks every parameter, returning the config unchanged on success.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(ConfigError::FieldOfView(self.field_of_view));
        }
        if !(self.near_clip > 0.0) {
            return Err(ConfigError::NearClip(self.near_clip));
        }
        if !(self.far_clip > self.near_clip) {
            return Err(ConfigError::FarClip {
                near: self.near_clip,
                far: self.far_clip,
            });
        }
        Ok(self)
    }

    /// Returns a copy with new screen dimensions.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..*self
        }
    }

    pub fn projection(&self) -> Projection {
        Projection::new(
            self.screen_width as f32,
            self.screen_height as f32,
            self.field_of_view,
            self.near_clip,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_height() {
        let config = RenderConfig {
            screen_height: 0,
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyScreen {
                width: DEFAULT_WIDTH,
                height: 0
            })
        );
    }

    #[test]
    fn rejects_degenerate_fov_and_clips() {
        let base = RenderConfig::default();
        assert!(matches!(
            RenderConfig { field_of_view: 180.0, ..base }.validate(),
            Err(ConfigError::FieldOfView(_))
        ));
        assert!(matches!(
            RenderConfig { near_clip: 0.0, ..base }.validate(),
            Err(ConfigError::NearClip(_))
        ));
        assert!(matches!(
            RenderConfig { far_clip: 0.05, ..base }.validate(),
            Err(ConfigError::FarClip { .. })
        ));
    }

    #[test]
    fn resize_keeps_projection_parameters() {
        let config = RenderConfig::default().resized(640, 480);
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 480);
        assert_eq!(config.field_of_view, DEFAULT_FOV_DEGREES);
        assert_eq!(config.near_clip, DEFAULT_NEAR_CLIP);
    }
}

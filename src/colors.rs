//! Color type and palette.
//!
//! Colors are stored as three `u8` channels, so every channel is within
//! `[0, 255]` by construction. Pixel buffers use packed ARGB8888 `u32`s.

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from real-valued channels, truncating toward zero and
    /// saturating to `[0, 255]`.
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        // `as u8` on f32 saturates and maps NaN to 0
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }

    /// Multiplies every channel by `factor`, clamping the result to 255.
    pub fn scale(self, factor: f32) -> Self {
        Self::from_f32(
            self.r as f32 * factor,
            self.g as f32 * factor,
            self.b as f32 * factor,
        )
    }

    /// Adds `amount` to every channel, clamping the result to 255.
    pub fn brighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| a as f32 + (b as f32 - a as f32) * t;
        Self::from_f32(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Packs into an opaque ARGB8888 value.
    #[inline]
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpacks an ARGB8888 value, dropping alpha.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }
}

// Scene palette
pub const GRASS: Color = Color::new(34, 139, 34);
pub const WOOD: Color = Color::new(139, 90, 43);
pub const BRICK: Color = Color::new(178, 34, 34);
pub const GOLD: Color = Color::new(218, 165, 32);
pub const AVATAR_BODY: Color = Color::new(220, 40, 60);
pub const AVATAR_SKIN: Color = Color::new(255, 213, 170);

// Sky gradient, top to bottom
pub const SKY_TOP: Color = Color::new(135, 206, 250);
pub const SKY_BOTTOM: Color = Color::new(60, 120, 200);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_truncates_and_saturates() {
        let c = Color::new(200, 50, 50);
        assert_eq!(c.scale(0.61), Color::new(122, 30, 30));
        assert_eq!(c.scale(2.0), Color::new(255, 100, 100));
    }

    #[test]
    fn brighten_clamps_each_channel() {
        let c = Color::new(230, 10, 255);
        assert_eq!(c.brighten(35), Color::new(255, 45, 255));
    }

    #[test]
    fn argb_round_trip() {
        let c = Color::new(12, 34, 56);
        assert_eq!(c.to_argb(), 0xFF0C2238);
        assert_eq!(Color::from_argb(c.to_argb()), c);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(SKY_TOP.lerp(SKY_BOTTOM, 0.0), SKY_TOP);
        assert_eq!(SKY_TOP.lerp(SKY_BOTTOM, 1.0), SKY_BOTTOM);
    }
}

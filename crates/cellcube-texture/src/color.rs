//! Color utilities for face sampling.

use crate::noise::mix;

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create from an `[r, g, b]` array.
    pub const fn from_array(rgb: [f64; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Replace the alpha component.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Linearly interpolate between two colors, `t` clamped to [0, 1].
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        Color {
            r: mix(self.r, other.r, t),
            g: mix(self.g, other.g, t),
            b: mix(self.b, other.b, t),
            a: mix(self.a, other.a, t),
        }
    }

    /// Convert to 8-bit RGBA. Channels are scaled by 255 and truncated.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Convert to 8-bit RGB. Channels are scaled by 255 and truncated.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Scale a unit channel to a byte: `clamp(v * 255, 0, 255)`, truncated.
#[inline]
pub fn channel_to_u8(value: f64) -> u8 {
    // NaN falls to 0 through the saturating cast.
    (value * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_gray() {
        let gray = Color::gray(0.5);
        assert!((gray.r - 0.5).abs() < 1e-10);
        assert!((gray.g - 0.5).abs() < 1e-10);
        assert!((gray.b - 0.5).abs() < 1e-10);
        assert_eq!(gray.a, 1.0);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let black = Color::black();
        let white = Color::white();

        let mid = black.lerp(&white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert_eq!(black.lerp(&white, 2.0), white);
        assert_eq!(black.lerp(&white, -1.0), black);
    }

    #[test]
    fn test_channel_conversion_truncates_and_clamps() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(0.5), 127);
        assert_eq!(channel_to_u8(1.7), 255);
        assert_eq!(channel_to_u8(-0.2), 0);
        assert_eq!(channel_to_u8(f64::NAN), 0);
    }

    #[test]
    fn test_rgba8_scales_every_channel() {
        let c = Color::rgba(0.5, 0.25, 1.0, 0.1);
        assert_eq!(c.to_rgba8(), [127, 63, 255, 25]);
        assert_eq!(c.to_rgb8(), [127, 63, 255]);
    }
}

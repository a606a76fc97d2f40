//! Cellular noise primitives.
//!
//! [`CellularNoise`] is the kernel: it answers F1/F2 queries against a
//! lattice of jittered feature points. The variants in [`variants`] turn
//! those answers into face colors.

mod cellular;
pub mod variants;

pub use cellular::{CellularNoise, FeatureSample, DEFAULT_NOISE_SEED};
pub use variants::{
    BaseCells, EdgeMix, NoiseVariant, RoundEdgeMix, TransparentEdges, DEFAULT_EDGE_THRESHOLD,
    DEFAULT_ROUND_TRANSITION,
};

use crate::color::Color;

/// A point in noise space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Adds `offset` to every component.
    #[inline]
    pub fn offset(&self, offset: f64) -> Point3 {
        Point3::new(self.x + offset, self.y + offset, self.z + offset)
    }
}

/// Value produced by a noise field at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Single channel, broadcast to RGB.
    Scalar(f64),
    /// Full color.
    Color(Color),
}

impl FieldValue {
    /// The value as a color; scalars become opaque gray.
    #[inline]
    pub fn to_color(self) -> Color {
        match self {
            FieldValue::Scalar(v) => Color::gray(v),
            FieldValue::Color(c) => c,
        }
    }
}

/// A 3D field sampled to color cube faces.
pub trait NoiseField: Send + Sync {
    /// Sample the field at `p`.
    fn sample(&self, p: Point3) -> FieldValue;

    /// Whether the field's alpha channel is meaningful.
    fn has_alpha(&self) -> bool {
        false
    }
}

/// Smooth interpolation (smoothstep) of `t` in [0, 1].
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation with `t` clamped to [0, 1].
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

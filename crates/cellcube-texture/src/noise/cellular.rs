//! 3D cellular (Worley/Voronoi) noise kernel.
//!
//! Space is cut into unit cells. Each cell owns one feature point and one
//! color, both drawn from a PCG32 stream seeded by the cell coordinates and
//! the noise seed. A query scans the 27 cells around the sample point.

use super::Point3;
use crate::color::Color;
use crate::rng::DeterministicRng;

/// Seed used when no explicit seed is given.
pub const DEFAULT_NOISE_SEED: u32 = 0;

/// Result of one kernel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSample {
    /// Distance to the nearest feature point.
    pub f1: f64,
    /// Distance to the second-nearest feature point.
    pub f2: f64,
    /// Color of the nearest feature point.
    pub color: Color,
}

impl FeatureSample {
    /// No candidates seen yet.
    fn empty() -> Self {
        Self {
            f1: f64::MAX,
            f2: f64::MAX,
            color: Color::black(),
        }
    }

    /// `f2 - f1`; zero on a cell boundary.
    #[inline]
    pub fn edge_distance(&self) -> f64 {
        self.f2 - self.f1
    }

    /// Fold one feature point at distance `dist` into the nearest pair.
    ///
    /// Comparisons are strict: an exact tie keeps the earlier color and
    /// leaves `f2 == f1`.
    #[inline]
    fn insert(&mut self, dist: f64, color: Color) {
        if dist < self.f1 {
            self.f2 = self.f1;
            self.f1 = dist;
            self.color = color;
        } else if dist < self.f2 {
            self.f2 = dist;
        }
    }
}

/// 3D cellular noise generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellularNoise {
    seed: u32,
}

impl Default for CellularNoise {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}

impl CellularNoise {
    /// Create a kernel for the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The kernel's seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Feature point and color owned by cell `(cx, cy, cz)`.
    pub fn cell_feature(&self, cx: i64, cy: i64, cz: i64) -> (Point3, Color) {
        let mut rng = DeterministicRng::new(DeterministicRng::cell_seed(self.seed, cx, cy, cz));

        let point = Point3::new(
            cx as f64 + rng.gen_f64(),
            cy as f64 + rng.gen_f64(),
            cz as f64 + rng.gen_f64(),
        );
        let color = Color::rgb(rng.gen_f64(), rng.gen_f64(), rng.gen_f64());

        (point, color)
    }

    /// Evaluate F1, F2 and the nearest feature's color at `p`.
    ///
    /// Neighbors are scanned with `dz` outermost and `dx` innermost, each
    /// from -1 to 1. When two feature points are exactly equidistant the
    /// first one scanned wins.
    pub fn evaluate(&self, p: Point3) -> FeatureSample {
        // Saturating casts; the neighbor walk wraps instead of overflowing.
        let cell_x = p.x.floor() as i64;
        let cell_y = p.y.floor() as i64;
        let cell_z = p.z.floor() as i64;

        let mut sample = FeatureSample::empty();
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (point, color) = self.cell_feature(
                        cell_x.wrapping_add(dx),
                        cell_y.wrapping_add(dy),
                        cell_z.wrapping_add(dz),
                    );
                    sample.insert(p.distance(&point), color);
                }
            }
        }
        sample
    }
}

//! Deterministic RNG wrapper using PCG32.
//!
//! Feature points, cell colors, and derived offsets all come from this
//! module so that a given seed always reproduces the same atlas.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Upper bound (exclusive) of offsets derived from a seed.
pub const OFFSET_RANGE: f64 = 1000.0;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Seed for the lattice cell `(cx, cy, cz)`.
    ///
    /// Only the low 32 bits of each coordinate are hashed.
    #[inline]
    pub fn cell_seed(seed: u32, cx: i64, cy: i64, cz: i64) -> u32 {
        seed.wrapping_add((cx as u32).wrapping_mul(374761393))
            .wrapping_add((cy as u32).wrapping_mul(668265263))
            .wrapping_add((cz as u32).wrapping_mul(1274126177))
    }

    /// Derive a seed for a named purpose using BLAKE3.
    pub fn derive_variant_seed(base_seed: u32, variant_id: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + variant_id.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(variant_id.as_bytes());
        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Sample offset for a run seeded with `seed`, in `[0, OFFSET_RANGE)`.
    pub fn derive_offset(seed: u32) -> f64 {
        let mut rng = Self::new(Self::derive_variant_seed(seed, "offset"));
        rng.gen_range(0.0..OFFSET_RANGE)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}

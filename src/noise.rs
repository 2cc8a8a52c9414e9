// Noise sources the terrain generator samples from.
// Both are seeded explicitly so a run (and a test) can be reproduced.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Something that yields a height sample in [0,1) for a point in noise space.
pub trait NoiseSource {
    fn sample(&mut self, x: f64, y: f64) -> f64;
}

// ----------------------------- uniform (default) ---------------------------------------

/// Uniform [0,1) draws that ignore the coordinates entirely.
/// Visual: salt-and-pepper terrain with no spatial structure; the island
/// offsets in the generator have no visible effect with this source.
pub struct UniformNoise {
    rng: ChaCha8Rng,
}

impl UniformNoise {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl NoiseSource for UniformNoise {
    #[inline]
    fn sample(&mut self, _x: f64, _y: f64) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

// ----------------------------- value noise (opt-in) ------------------------------------

// Largest f64 strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Lattice value noise: random values at integer points, smoothly blended between.
/// Visual: soft blobs roughly `scale` cells wide, so the two islands actually show up.
pub struct ValueNoise {
    perm: [u8; 512],      // 256 shuffled indices, duplicated to skip the wrap-around modulo
    values: [f64; 256],   // lattice values in [0,1)
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut p: Vec<u8> = (0..=255u8).collect();
        p.shuffle(&mut rng);
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }

        let mut values = [0.0f64; 256];
        for v in values.iter_mut() {
            *v = rng.r#gen::<f64>();
        }

        Self { perm, values }
    }

    #[inline]
    fn lattice(&self, ix: i64, iy: i64) -> f64 {
        let xi = (ix & 255) as usize;
        let yi = (iy & 255) as usize;
        let h = self.perm[self.perm[xi] as usize + yi];
        self.values[h as usize]
    }

    // Cubic smoothstep, flat at both ends so cell borders don't crease.
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * (3.0 - 2.0 * t)
    }

    #[inline]
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }
}

impl NoiseSource for ValueNoise {
    fn sample(&mut self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let (ix, iy) = (x0 as i64, y0 as i64);
        let u = Self::fade(x - x0);
        let v = Self::fade(y - y0);

        let top = Self::lerp(self.lattice(ix, iy), self.lattice(ix + 1, iy), u);
        let bottom = Self::lerp(self.lattice(ix, iy + 1), self.lattice(ix + 1, iy + 1), u);
        // Convex blend of values < 1 stays < 1; min() guards float rounding.
        Self::lerp(top, bottom, v).min(BELOW_ONE)
    }
}

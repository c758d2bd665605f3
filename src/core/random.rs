//! Seeded random source for scene generation

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct SceneRng {
    inner: SmallRng,
}

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seed from the host: `Math.random()` in the browser, the clock natively.
    pub fn from_entropy() -> Self {
        Self::seeded(entropy_seed())
    }

    /// Uniform float in `[min, max]`. Callers guarantee `min <= max`.
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        self.inner.gen_range(min..=max)
    }

    /// Uniform integer in `[min, max]`. Callers guarantee `min <= max`.
    #[inline]
    pub fn int_range(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}

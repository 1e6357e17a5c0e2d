//! Seeded random stream
//!
//! Every randomized attribute in the game (asteroid placement, velocity,
//! outline jitter, particle spread) is drawn from one `GameRng` owned by the
//! game state. Identical seeds plus identical draw sequences reproduce
//! identical sessions.

use rand::distr::Distribution;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Deterministic generator owned by the game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[lo, hi]`
    pub fn float(&mut self, lo: f32, hi: f32) -> f32 {
        debug_assert!(lo <= hi);
        self.inner.random_range(lo..=hi)
    }

    /// Uniform integer in `[lo, hi]` (inclusive)
    pub fn int(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        self.inner.random_range(lo..=hi)
    }

    /// Uniform direction in radians, `[0, TAU)`
    pub fn angle(&mut self) -> f32 {
        self.inner.random_range(0.0..std::f32::consts::TAU)
    }

    /// Draw from an arbitrary distribution
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: D) -> T {
        dist.sample(&mut self.inner)
    }
}

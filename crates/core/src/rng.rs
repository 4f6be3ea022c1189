//! RNG module - process-lifetime random source for target placement
//!
//! A session owns exactly one [`TileRng`], seeded once when the session is
//! created. Boards generated later in the same session draw from that stream
//! instead of reseeding, so two boards created in quick succession never share a
//! layout because they happened to share a timestamp.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{RngCore, SeedableRng};

/// Seeded random source used by the board generator.
#[derive(Debug, Clone)]
pub struct TileRng {
    seed: u64,
    inner: StdRng,
}

impl TileRng {
    /// Create a deterministic RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        let seed = StdRng::from_entropy().next_u64();
        log::debug!("tile rng seeded with {seed}");
        Self::new(seed)
    }

    /// Seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly sample `amount` distinct indices from `0..len`.
    ///
    /// `amount` is clamped to `len`. The returned indices are sorted ascending.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut picked = index::sample(&mut self.inner, len, amount).into_vec();
        picked.sort_unstable();
        picked
    }
}

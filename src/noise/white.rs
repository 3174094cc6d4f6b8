//! White noise generator implementation.

use std::marker::PhantomData;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Signal;

/// Mixes the offset into the seed so neighbouring nanoseconds land on
/// unrelated RNG streams.
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// A white noise generator.
///
/// Each value is uniformly distributed in `[-1.0, 1.0]`. The RNG is seeded
/// from `(seed, t)` on every evaluation, so the same offset always yields
/// the same value and two generators with the same seed agree.
///
/// # Examples
///
/// ```
/// use humdrum::{Signal, WhiteNoise};
/// use std::time::Duration;
///
/// let noise = WhiteNoise::new(42);
/// let t = Duration::from_micros(300);
/// assert_eq!(noise.value_at(t), noise.value_at(t));
/// ```
pub struct WhiteNoise<R = StdRng> {
    seed: u64,
    rng: PhantomData<fn() -> R>,
}

impl WhiteNoise<StdRng> {
    /// Creates a new white noise generator backed by `StdRng`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seed)
    }
}

impl<R: SeedableRng + Rng> WhiteNoise<R> {
    /// Creates a white noise generator backed by a custom seedable RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use humdrum::WhiteNoise;
    /// use rand::rngs::StdRng;
    ///
    /// let noise = WhiteNoise::<StdRng>::with_rng(7);
    /// assert_eq!(noise.seed(), 7);
    /// ```
    pub fn with_rng(seed: u64) -> Self {
        Self {
            seed,
            rng: PhantomData,
        }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<R: SeedableRng + Rng> Signal for WhiteNoise<R> {
    fn value_at(&self, t: Duration) -> f64 {
        // Nanoseconds past u64 are folded in so distant offsets stay distinct.
        let nanos = t.as_nanos();
        let folded = (nanos as u64) ^ ((nanos >> 64) as u64).wrapping_mul(SEED_MIX);
        let mut rng = R::seed_from_u64(self.seed.wrapping_mul(SEED_MIX) ^ folded);
        rng.gen_range(-1.0..=1.0)
    }
}

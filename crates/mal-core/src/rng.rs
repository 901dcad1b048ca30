//! The simulation's single shared random stream.
//!
//! # Determinism strategy
//!
//! Every random decision in a run is drawn from one `SimRng`, in a fixed,
//! path-dependent order: actors in registry order, fragments in composition
//! order.  Two runs built from the same seed and stepped the same number of
//! times therefore draw identical sequences and produce identical results.
//!
//! For this to hold, the *number* of draws on a given path must not depend
//! on parameter values.  [`SimRng::chance`] always consumes exactly one
//! uniform draw, including for `p <= 0` and `p >= 1`, which `rand`'s
//! `gen_bool` would short-circuit.
//!
//! The stream is seeded once, by the hosting layer, and never reseeded.
//! Saving and restoring the seed is the hosting layer's concern.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG shared by every actor and the driver.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically from `seed`.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Wrap a generator the hosting layer has already seeded or restored.
    pub fn from_small_rng(rng: SmallRng) -> Self {
        SimRng(rng)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// A uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p`.  Always consumes exactly one draw.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng(..)")
    }
}

//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness of an
//! [`Evolver`](crate::evolution::Evolver): pairing shuffles, mutation coin
//! flips and wheel spins all draw from it. Seed it for reproducible runs.
//!
//! ## Example
//!
//! ```rust
//! use genevolve::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.index(100), b.index(100));
//! assert_eq!(a.uniform(), b.uniform());
//! ```
//!
//! ## Thread-local RNG
//!
//! Behavior functions are plain `Fn` closures and cannot borrow the evolver's
//! generator. A mutation that needs randomness can use `ThreadLocalRng`:
//!
//! ```rust
//! use genevolve::rng::ThreadLocalRng;
//!
//! let mutate = |x: &f64| x + ThreadLocalRng::gen_range(-0.5..0.5);
//! let y = mutate(&1.0);
//! assert!((0.5..1.5).contains(&y));
//! ```

use rand::{
    distributions::uniform::{SampleRange, SampleUniform},
    rngs::StdRng,
    thread_rng, Rng, SeedableRng,
};

/// A thread-local random number generator that can be used without synchronization.
///
/// It uses the built-in `ThreadRng` from the `rand` crate, which is automatically
/// seeded from the system entropy and is thread-local.
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Generates a random number in the given range.
    pub fn gen_range<T, R>(range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        thread_rng().gen_range(range)
    }
}

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// evolver needs.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform draw in `[0, 1)`.
    pub fn uniform(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Returns a uniform index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Generates a random number in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

//! Seeded generator handles.
//!
//! [`VariateRng`] is the default generator: it owns a `rand::rngs::StdRng`
//! and remembers the seed it was built from. [`RngSource`] adapts any other
//! `rand::Rng` (for example `SmallRng` or a ChaCha generator) to
//! [`RandomSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use crate::source::RandomSource;

/// Seeded, reproducible generator for variate sampling.
///
/// Normal draws use the Ziggurat sampler from `rand_distr::StandardNormal`.
///
/// # Examples
///
/// ```rust
/// use variate_core::VariateRng;
///
/// let mut rng = VariateRng::from_seed(42);
///
/// let u: f64 = rng.gen_uniform();
/// let n: f64 = rng.gen_normal();
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// rng.fill_normal(&mut buffer);
/// # let _ = (u, n);
/// ```
#[derive(Clone, Debug)]
pub struct VariateRng {
    inner: StdRng,
    seed: u64,
}

impl VariateRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use variate_core::VariateRng;
    ///
    /// let mut rng1 = VariateRng::from_seed(12345);
    /// let mut rng2 = VariateRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a seed drawn from OS entropy.
    ///
    /// The drawn seed is still recorded, so [`seed`](Self::seed) can be
    /// logged and the run replayed later.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        debug!(seed, "seeded generator from entropy");
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    ///
    /// ```rust
    /// use variate_core::VariateRng;
    ///
    /// let rng = VariateRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Resets the generator state to the start of the sequence for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        debug!(old = self.seed, new = seed, "reseeding generator");
        self.inner = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl RandomSource for VariateRng {
    #[inline]
    fn uniform64(&mut self) -> f64 {
        self.gen_uniform()
    }

    #[inline]
    fn gaussian(&mut self) -> f64 {
        self.gen_normal()
    }
}

/// Adapter exposing any `rand::Rng` as a [`RandomSource`].
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use variate_core::{RandomSource, RngSource};
///
/// let mut src = RngSource::new(StdRng::seed_from_u64(9));
/// let u = src.uniform64();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps a generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Borrows the wrapped generator.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Unwraps the generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn uniform64(&mut self) -> f64 {
        self.rng.gen()
    }

    #[inline]
    fn gaussian(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}

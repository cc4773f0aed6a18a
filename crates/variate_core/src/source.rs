//! The two primitive draws every sampler is built from.

/// A source of uniform and standard normal draws.
///
/// Every sampler in the variates workspace is generic over this trait and
/// consumes draws only through these two methods, so a sampler's output is a
/// pure function of the sequence the source yields.
///
/// # Contract
///
/// - [`uniform64`](RandomSource::uniform64) returns values in the half-open
///   interval [0, 1). Implementations must never return 1.0.
/// - [`gaussian`](RandomSource::gaussian) returns standard normal variates
///   (mean 0, variance 1).
/// - Successive calls return independent draws.
///
/// # Examples
///
/// ```rust
/// use variate_core::{RandomSource, VariateRng};
///
/// fn coin<S: RandomSource + ?Sized>(src: &mut S) -> bool {
///     src.uniform64() < 0.5
/// }
///
/// let mut rng = VariateRng::from_seed(7);
/// let _heads = coin(&mut rng);
/// ```
pub trait RandomSource {
    /// Draws a uniform value in [0, 1).
    fn uniform64(&mut self) -> f64;

    /// Draws a standard normal value.
    fn gaussian(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn uniform64(&mut self) -> f64 {
        (**self).uniform64()
    }

    #[inline]
    fn gaussian(&mut self) -> f64 {
        (**self).gaussian()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    #[inline]
    fn uniform64(&mut self) -> f64 {
        (**self).uniform64()
    }

    #[inline]
    fn gaussian(&mut self) -> f64 {
        (**self).gaussian()
    }
}

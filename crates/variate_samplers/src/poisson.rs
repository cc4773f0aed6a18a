//! Poisson samplers.
//!
//! Small means (lam < 10) use the multiplicative method: multiply uniforms
//! until the running product drops below exp(−lam). Larger means use
//! Hörmann's PTRS transformed rejection with squeeze, which needs a
//! constant expected number of draws per variate.
//!
//! # References
//!
//! - Hörmann, W. (1993). "The transformed rejection method for generating
//!   Poisson random variables". Insurance: Mathematics and Economics 12(1),
//!   39-45.

use tracing::debug;
use variate_core::special::loggam;
use variate_core::RandomSource;

use crate::error::ParamError;

/// Mean at or above which PTRS replaces the multiplicative method.
pub const PTRS_THRESHOLD: f64 = 10.0;

/// Largest mean [`Poisson::new`] accepts.
///
/// Leaves ten standard deviations of headroom below `i64::MAX` so variates
/// never overflow.
pub const POISSON_LAM_MAX: f64 = 9.223372006484771e18;

/// Poisson variate with mean `lam`.
///
/// `lam == 0` returns 0 without drawing. `lam >= 10` uses PTRS, anything
/// smaller the multiplicative method. The PTRS constants are derived on every
/// call; build a [`Poisson`] to reuse them.
///
/// No parameter checks: `lam` must be finite and non-negative.
#[inline]
pub fn poisson<S: RandomSource + ?Sized>(src: &mut S, lam: f64) -> i64 {
    Poisson::new_unchecked(lam).sample(src)
}

/// Multiplicative method. Consumes `X + 1` uniforms for a result of `X`.
pub fn poisson_mult<S: RandomSource + ?Sized>(src: &mut S, lam: f64) -> i64 {
    multiplicative(src, (-lam).exp())
}

/// PTRS transformed rejection. Intended for `lam >= 10`.
pub fn poisson_ptrs<S: RandomSource + ?Sized>(src: &mut S, lam: f64) -> i64 {
    PtrsConstants::new(lam).sample(src, lam)
}

fn multiplicative<S: RandomSource + ?Sized>(src: &mut S, enlam: f64) -> i64 {
    let mut x = 0;
    let mut prod = 1.0;
    loop {
        prod *= src.uniform64();
        if prod > enlam {
            x += 1;
        } else {
            return x;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PtrsConstants {
    loglam: f64,
    a: f64,
    b: f64,
    invalpha: f64,
    vr: f64,
}

impl PtrsConstants {
    fn new(lam: f64) -> Self {
        let slam = lam.sqrt();
        let b = 0.931 + 2.53 * slam;
        Self {
            loglam: lam.ln(),
            a: -0.059 + 0.02483 * b,
            b,
            invalpha: 1.1239 + 1.1328 / (b - 3.4),
            vr: 0.9277 - 3.6224 / (b - 2.0),
        }
    }

    fn sample<S: RandomSource + ?Sized>(&self, src: &mut S, lam: f64) -> i64 {
        let Self {
            loglam,
            a,
            b,
            invalpha,
            vr,
        } = *self;

        loop {
            let u = src.uniform64() - 0.5;
            let v = src.uniform64();
            let us = 0.5 - u.abs();
            let k = ((2.0 * a / us + b) * u + lam + 0.43).floor() as i64;

            if us >= 0.07 && v <= vr {
                return k;
            }
            if k < 0 || (us < 0.013 && v > us) {
                continue;
            }
            let lhs = v.ln() + invalpha.ln() - (a / (us * us) + b).ln();
            let rhs = -lam + k as f64 * loglam - loggam(k as f64 + 1.0);
            if lhs <= rhs {
                return k;
            }
        }
    }
}

/// Checks `0 <= lam <= POISSON_LAM_MAX`. Rejects NaN.
pub(crate) fn check_lam(lam: f64) -> Result<(), ParamError> {
    if (0.0..=POISSON_LAM_MAX).contains(&lam) {
        Ok(())
    } else {
        Err(ParamError::invalid(
            "lam",
            format!("must be in [0, {}], got {}", POISSON_LAM_MAX, lam),
        ))
    }
}

/// Poisson distribution with precomputed sampling constants.
///
/// # Examples
///
/// ```rust
/// use variate_core::VariateRng;
/// use variate_samplers::Poisson;
///
/// let dist = Poisson::new(42.0).unwrap();
/// let mut rng = VariateRng::from_seed(3);
/// let k = dist.sample(&mut rng);
/// assert!(k >= 0);
///
/// assert!(Poisson::new(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poisson {
    lam: f64,
    repr: PoissonRepr,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum PoissonRepr {
    Zero,
    Multiplicative { enlam: f64 },
    Ptrs(PtrsConstants),
}

impl Poisson {
    /// Validates `lam` and precomputes the sampling constants.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidParameter`] unless
    /// `0 <= lam <= POISSON_LAM_MAX`.
    pub fn new(lam: f64) -> Result<Self, ParamError> {
        check_lam(lam)?;
        let dist = Self::new_unchecked(lam);
        debug!(lam, repr = ?dist.repr, "prepared Poisson sampler");
        Ok(dist)
    }

    pub(crate) fn new_unchecked(lam: f64) -> Self {
        let repr = if lam == 0.0 {
            PoissonRepr::Zero
        } else if lam >= PTRS_THRESHOLD {
            PoissonRepr::Ptrs(PtrsConstants::new(lam))
        } else {
            PoissonRepr::Multiplicative { enlam: (-lam).exp() }
        };
        Self { lam, repr }
    }

    /// Mean of the distribution.
    #[inline]
    pub fn lam(&self) -> f64 {
        self.lam
    }

    /// Draws one variate.
    pub fn sample<S: RandomSource + ?Sized>(&self, src: &mut S) -> i64 {
        match &self.repr {
            PoissonRepr::Zero => 0,
            PoissonRepr::Multiplicative { enlam } => multiplicative(src, *enlam),
            PoissonRepr::Ptrs(constants) => constants.sample(src, self.lam),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use variate_core::{ReplaySource, VariateRng};

    #[test]
    fn test_zero_mean_draws_nothing() {
        let mut src = ReplaySource::uniforms(vec![0.5]).unwrap();
        for _ in 0..10 {
            assert_eq!(poisson(&mut src, 0.0), 0);
        }
        assert_eq!(src.uniforms_drawn(), 0);
        assert_eq!(src.normals_drawn(), 0);
    }

    #[test]
    fn test_multiplicative_counts_products() {
        // exp(-1) ~ 0.368: 0.9 and 0.45 stay above it, 0.225 does not.
        let mut src = ReplaySource::uniforms(vec![0.9, 0.5, 0.5]).unwrap();
        assert_eq!(poisson(&mut src, 1.0), 2);
        assert_eq!(src.uniforms_drawn(), 3);
    }

    #[test]
    fn test_multiplicative_first_draw_below_threshold() {
        let mut src = ReplaySource::uniforms(vec![0.1]).unwrap();
        assert_eq!(poisson_mult(&mut src, 1.0), 0);
    }

    #[test]
    fn test_ptrs_fast_accept() {
        // U = 0 puts k at floor(lam + 0.43); V = 0.1 <= vr ~ 0.574.
        let mut src = ReplaySource::uniforms(vec![0.5, 0.1]).unwrap();
        assert_eq!(poisson(&mut src, 20.0), 20);
        assert_eq!(src.uniforms_drawn(), 2);
    }

    #[test]
    fn test_ptrs_matches_dispatch() {
        let mut a = VariateRng::from_seed(4);
        let mut b = VariateRng::from_seed(4);
        for _ in 0..500 {
            assert_eq!(poisson(&mut a, 37.5), poisson_ptrs(&mut b, 37.5));
        }
    }

    #[test]
    fn test_dispatch_threshold() {
        let mut a = VariateRng::from_seed(6);
        let mut b = VariateRng::from_seed(6);
        for _ in 0..200 {
            assert_eq!(poisson(&mut a, 9.99), poisson_mult(&mut b, 9.99));
        }
        for _ in 0..200 {
            assert_eq!(poisson(&mut a, 10.0), poisson_ptrs(&mut b, 10.0));
        }
    }

    #[test]
    fn test_poisson_object_validation() {
        assert!(Poisson::new(0.0).is_ok());
        assert!(Poisson::new(POISSON_LAM_MAX).is_ok());
        assert!(Poisson::new(-0.1).is_err());
        assert!(Poisson::new(f64::NAN).is_err());
        assert!(Poisson::new(f64::INFINITY).is_err());
        assert_eq!(Poisson::new(3.0).unwrap().lam(), 3.0);
    }

    #[test]
    fn test_poisson_means() {
        let mut rng = VariateRng::from_seed(30);
        for &lam in &[0.5, 5.0, 20.0, 1234.5] {
            let dist = Poisson::new(lam).unwrap();
            let n = 100_000;
            let draws: Vec<i64> = (0..n).map(|_| dist.sample(&mut rng)).collect();
            assert!(draws.iter().all(|&k| k >= 0));

            let mean = draws.iter().sum::<i64>() as f64 / n as f64;
            assert_abs_diff_eq!(mean, lam, epsilon = 6.0 * (lam / n as f64).sqrt());

            let var = draws
                .iter()
                .map(|&k| (k as f64 - mean).powi(2))
                .sum::<f64>()
                / (n - 1) as f64;
            assert_abs_diff_eq!(var / lam, 1.0, epsilon = 0.05);
        }
    }
}

//! Hypergeometric samplers.
//!
//! A hypergeometric variate counts the "good" items in a sample of size
//! `sample` drawn without replacement from `good + bad` items.
//!
//! Samples of at most ten items are simulated directly, one draw at a time.
//! Larger samples use Stadlober's ratio-of-uniforms algorithm HRUA* with a
//! squeeze and an exact log-factorial acceptance test, followed by the two
//! symmetry corrections from Ivan Frohne's `rv.py`.
//!
//! # References
//!
//! - Stadlober, E. (1989). "Sampling from Poisson, binomial and
//!   hypergeometric distributions: ratio of uniforms as a simple and fast
//!   alternative". Bericht 303, Math. Stat. Sektion, Forschungsgesellschaft
//!   Joanneum, Graz.

use tracing::debug;
use variate_core::special::loggam;
use variate_core::RandomSource;

use crate::error::ParamError;

/// Sample sizes above this use HRUA*; the rest are simulated directly.
pub const HRUA_THRESHOLD: i64 = 10;

/// 2·sqrt(2/e)
const D1: f64 = 1.715_527_769_921_413_5;
/// 3 − 2·sqrt(3/e)
const D2: f64 = 0.898_916_162_058_898_8;

/// Hypergeometric variate: good items among `sample` drawn from
/// `good + bad`.
///
/// The result lies in `[max(0, sample - bad), min(sample, good)]`.
///
/// No parameter checks: `good` and `bad` must be non-negative and
/// `1 <= sample <= good + bad`.
#[inline]
pub fn hypergeometric<S: RandomSource + ?Sized>(
    src: &mut S,
    good: i64,
    bad: i64,
    sample: i64,
) -> i64 {
    Hypergeometric::new_unchecked(good, bad, sample).sample(src)
}

/// Direct simulation of sequential draws without replacement.
///
/// Tracks the minority colour and consumes at most `sample` uniforms.
pub fn hypergeometric_hyp<S: RandomSource + ?Sized>(
    src: &mut S,
    good: i64,
    bad: i64,
    sample: i64,
) -> i64 {
    let d1 = bad + good - sample;
    let d2 = good.min(bad) as f64;

    let mut y = d2;
    let mut k = sample;
    while y > 0.0 {
        let u = src.uniform64();
        y -= (u + y / (d1 + k) as f64).floor();
        k -= 1;
        if k == 0 {
            break;
        }
    }

    let z = (d2 - y) as i64;
    if good > bad {
        sample - z
    } else {
        z
    }
}

/// Stadlober's HRUA* ratio-of-uniforms sampler. Intended for `sample > 10`.
pub fn hypergeometric_hrua<S: RandomSource + ?Sized>(
    src: &mut S,
    good: i64,
    bad: i64,
    sample: i64,
) -> i64 {
    HruaConstants::new(good, bad, sample).sample(src, good, bad, sample)
}

/// Setup values for HRUA*. The names follow Stadlober's d4..d11.
#[derive(Clone, Copy, Debug, PartialEq)]
struct HruaConstants {
    mingoodbad: i64,
    maxgoodbad: i64,
    m: i64,
    d6: f64,
    d8: f64,
    d10: f64,
    d11: f64,
}

impl HruaConstants {
    fn new(good: i64, bad: i64, sample: i64) -> Self {
        let mingoodbad = good.min(bad);
        let maxgoodbad = good.max(bad);
        let popsize = good + bad;
        let m = sample.min(popsize - sample);

        let d4 = mingoodbad as f64 / popsize as f64;
        let d5 = 1.0 - d4;
        let d6 = m as f64 * d4 + 0.5;
        let d7 = ((popsize - m) as f64 * sample as f64 * d4 * d5 / (popsize - 1) as f64 + 0.5)
            .sqrt();
        let d8 = D1 * d7 + D2;
        // popsize + 2 can exceed i64::MAX.
        let d9 = ((m + 1) as f64 * (mingoodbad + 1) as f64 / (popsize as f64 + 2.0)).floor();
        let d9 = d9 as i64;
        let d10 = log_weight(d9, mingoodbad, maxgoodbad, m);
        let d11 = ((m.min(mingoodbad) + 1) as f64).min((d6 + 16.0 * d7).floor());

        Self {
            mingoodbad,
            maxgoodbad,
            m,
            d6,
            d8,
            d10,
            d11,
        }
    }

    fn sample<S: RandomSource + ?Sized>(
        &self,
        src: &mut S,
        good: i64,
        bad: i64,
        sample: i64,
    ) -> i64 {
        let Self {
            mingoodbad,
            maxgoodbad,
            m,
            d6,
            d8,
            d10,
            d11,
        } = *self;

        let mut z = loop {
            let x = src.uniform64();
            let y = src.uniform64();
            let w = d6 + d8 * (y - 0.5) / x;

            // Also rejects the NaN produced by x = 0, y = 0.5.
            if !(0.0..d11).contains(&w) {
                continue;
            }

            let z = w.floor() as i64;
            let t = d10 - log_weight(z, mingoodbad, maxgoodbad, m);

            if x * (4.0 - x) - 3.0 <= t {
                break z;
            }
            if x * (x - t) >= 1.0 {
                continue;
            }
            if 2.0 * x.ln() <= t {
                break z;
            }
        };

        if good > bad {
            z = m - z;
        }
        if m < sample {
            z = good - z;
        }
        z
    }
}

/// Sum of the four log-factorials in the hypergeometric mass at `z`.
#[inline]
fn log_weight(z: i64, mingoodbad: i64, maxgoodbad: i64, m: i64) -> f64 {
    loggam((z + 1) as f64)
        + loggam((mingoodbad - z + 1) as f64)
        + loggam((m - z + 1) as f64)
        + loggam((maxgoodbad - m + z + 1) as f64)
}

/// Checks `good, bad >= 0` and `1 <= sample <= good + bad`.
pub(crate) fn check_params(good: i64, bad: i64, sample: i64) -> Result<(), ParamError> {
    if good < 0 {
        return Err(ParamError::invalid(
            "good",
            format!("must be non-negative, got {}", good),
        ));
    }
    if bad < 0 {
        return Err(ParamError::invalid(
            "bad",
            format!("must be non-negative, got {}", bad),
        ));
    }
    let popsize = good.checked_add(bad).ok_or_else(|| {
        ParamError::invalid("bad", format!("good + bad overflows: {} + {}", good, bad))
    })?;
    if sample < 1 || sample > popsize {
        return Err(ParamError::invalid(
            "sample",
            format!("must be in [1, {}], got {}", popsize, sample),
        ));
    }

    Ok(())
}

/// Hypergeometric distribution with precomputed sampling constants.
///
/// # Examples
///
/// ```rust
/// use variate_core::VariateRng;
/// use variate_samplers::Hypergeometric;
///
/// let dist = Hypergeometric::new(50, 30, 40).unwrap();
/// let mut rng = VariateRng::from_seed(9);
/// let k = dist.sample(&mut rng);
/// assert!((10..=40).contains(&k));
///
/// assert!(Hypergeometric::new(5, 5, 11).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hypergeometric {
    good: i64,
    bad: i64,
    sample: i64,
    repr: HypergeometricRepr,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum HypergeometricRepr {
    Hyp,
    Hrua(HruaConstants),
}

impl Hypergeometric {
    /// Validates the population and sample sizes and precomputes constants.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidParameter`] if `good` or `bad` is
    /// negative, if `good + bad` overflows, or unless
    /// `1 <= sample <= good + bad`.
    pub fn new(good: i64, bad: i64, sample: i64) -> Result<Self, ParamError> {
        check_params(good, bad, sample)?;
        let dist = Self::new_unchecked(good, bad, sample);
        debug!(good, bad, sample, repr = ?dist.repr, "prepared hypergeometric sampler");
        Ok(dist)
    }

    pub(crate) fn new_unchecked(good: i64, bad: i64, sample: i64) -> Self {
        let repr = if sample > HRUA_THRESHOLD {
            HypergeometricRepr::Hrua(HruaConstants::new(good, bad, sample))
        } else {
            HypergeometricRepr::Hyp
        };
        Self {
            good,
            bad,
            sample,
            repr,
        }
    }

    /// Number of good items in the population.
    #[inline]
    pub fn good(&self) -> i64 {
        self.good
    }

    /// Number of bad items in the population.
    #[inline]
    pub fn bad(&self) -> i64 {
        self.bad
    }

    /// Sample size.
    #[inline]
    pub fn sample_size(&self) -> i64 {
        self.sample
    }

    /// Smallest and largest possible variate.
    pub fn support(&self) -> (i64, i64) {
        (
            (self.sample - self.bad).max(0),
            self.sample.min(self.good),
        )
    }

    /// Draws one variate.
    pub fn sample<S: RandomSource + ?Sized>(&self, src: &mut S) -> i64 {
        match &self.repr {
            HypergeometricRepr::Hyp => hypergeometric_hyp(src, self.good, self.bad, self.sample),
            HypergeometricRepr::Hrua(constants) => {
                constants.sample(src, self.good, self.bad, self.sample)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use variate_core::{ReplaySource, VariateRng};

    #[test]
    fn test_hyp_sequential_draws() {
        // Y: 5 -> 4 (U = 0.6) -> 4 (U = 0.1) -> 3 (U = 0.9); Z = 5 - 3.
        let mut src = ReplaySource::uniforms(vec![0.6, 0.1, 0.9]).unwrap();
        assert_eq!(hypergeometric(&mut src, 5, 5, 3), 2);
        assert_eq!(src.uniforms_drawn(), 3);
    }

    #[test]
    fn test_hyp_majority_good_is_mirrored() {
        // No minority (bad) item is drawn, so every draw is good.
        let mut src = ReplaySource::uniforms(vec![0.0]).unwrap();
        assert_eq!(hypergeometric(&mut src, 6, 4, 3), 3);
    }

    #[test]
    fn test_hyp_stops_when_minority_exhausted() {
        let mut src = ReplaySource::uniforms(vec![0.99]).unwrap();
        // One bad item, drawn on the first step.
        assert_eq!(hypergeometric(&mut src, 9, 1, 5), 4);
        assert_eq!(src.uniforms_drawn(), 1);
    }

    #[test]
    fn test_hrua_accepts_mode() {
        // X = Y = 0.5 lands on floor(d6) = d9 = 10 where T = 0.
        let mut src = ReplaySource::uniforms(vec![0.5]).unwrap();
        assert_eq!(hypergeometric(&mut src, 50, 50, 20), 10);
        assert_eq!(src.uniforms_drawn(), 2);
    }

    #[test]
    fn test_hrua_symmetry_corrections() {
        // good > bad and sample > popsize / 2: the mode of the reduced
        // problem is 12, mirrored to 40 - 12 = 28 and then to 70 - 28.
        let mut src = ReplaySource::uniforms(vec![0.5]).unwrap();
        assert_eq!(hypergeometric_hrua(&mut src, 70, 30, 60), 42);
    }

    #[test]
    fn test_hrua_rejects_out_of_range_w() {
        // X = 0.01, Y = 0.99 pushes W far past d11; then the mode is taken.
        let mut src = ReplaySource::uniforms(vec![0.01, 0.99, 0.5, 0.5]).unwrap();
        assert_eq!(hypergeometric(&mut src, 50, 50, 20), 10);
        assert_eq!(src.uniforms_drawn(), 4);
    }

    #[test]
    fn test_dispatch_threshold() {
        let mut a = VariateRng::from_seed(12);
        let mut b = VariateRng::from_seed(12);
        for _ in 0..200 {
            assert_eq!(
                hypergeometric(&mut a, 40, 25, 10),
                hypergeometric_hyp(&mut b, 40, 25, 10)
            );
            assert_eq!(
                hypergeometric(&mut a, 40, 25, 11),
                hypergeometric_hrua(&mut b, 40, 25, 11)
            );
        }
    }

    #[test]
    fn test_validation() {
        assert!(Hypergeometric::new(5, 5, 3).is_ok());
        assert!(Hypergeometric::new(0, 5, 5).is_ok());
        assert!(Hypergeometric::new(-1, 5, 3).is_err());
        assert!(Hypergeometric::new(5, -1, 3).is_err());
        assert!(Hypergeometric::new(5, 5, 0).is_err());
        assert!(Hypergeometric::new(5, 5, 11).is_err());
        assert!(Hypergeometric::new(i64::MAX, 1, 3).is_err());

        // Populations at the top of the i64 range still set up HRUA*.
        let mut rng = VariateRng::from_seed(13);
        for (good, bad) in [(i64::MAX - 1, 1), (i64::MAX - 2, 1), (1, i64::MAX - 1)] {
            let dist = Hypergeometric::new(good, bad, 20).unwrap();
            let (lo, hi) = dist.support();
            for _ in 0..100 {
                assert!((lo..=hi).contains(&dist.sample(&mut rng)));
            }
        }

        let dist = Hypergeometric::new(7, 3, 6).unwrap();
        assert_eq!((dist.good(), dist.bad(), dist.sample_size()), (7, 3, 6));
        assert_eq!(dist.support(), (3, 6));
    }

    #[test]
    fn test_support_and_mean() {
        let mut rng = VariateRng::from_seed(31);
        for &(good, bad, sample) in &[(5, 5, 3), (50, 50, 20), (200, 15, 100), (3, 400, 250)] {
            let dist = Hypergeometric::new(good, bad, sample).unwrap();
            let (lo, hi) = dist.support();

            let n = 50_000;
            let draws: Vec<i64> = (0..n).map(|_| dist.sample(&mut rng)).collect();
            assert!(draws.iter().all(|k| (lo..=hi).contains(k)));

            let pop = (good + bad) as f64;
            let p = good as f64 / pop;
            let expected = sample as f64 * p;
            let var = sample as f64 * p * (1.0 - p) * (pop - sample as f64) / (pop - 1.0);
            let mean = draws.iter().sum::<i64>() as f64 / n as f64;
            assert_abs_diff_eq!(mean, expected, epsilon = 6.0 * (var / n as f64).sqrt() + 1e-9);
        }
    }
}

//! Zipf, geometric and log-series samplers.
//!
//! All three return positive integers. Like the rest of the raw functions
//! they trust their parameters; see [`Distribution`](crate::Distribution)
//! for the validated entry point.

use variate_core::RandomSource;

/// Success probability at or above which [`geometric`] searches the CDF
/// instead of inverting it.
pub const GEOMETRIC_SEARCH_THRESHOLD: f64 = 1.0 / 3.0;

/// Zipf variate with exponent `a > 1`.
///
/// Rejection from the continuous Pareto envelope `floor(U^(-1/(a-1)))`.
/// Candidates that do not fit in an `i64` are redrawn, so for `a` close to
/// 1 the loop may take many rounds.
pub fn zipf<S: RandomSource + ?Sized>(src: &mut S, a: f64) -> i64 {
    let am1 = a - 1.0;
    let b = 2.0_f64.powf(am1);
    loop {
        let u = 1.0 - src.uniform64();
        let v = src.uniform64();
        let x = u.powf(-1.0 / am1).floor();
        if x >= i64::MAX as f64 || x < 1.0 {
            continue;
        }

        let t = (1.0 + 1.0 / x).powf(am1);
        if v * x * (t - 1.0) / (b - 1.0) <= t / b {
            return x as i64;
        }
    }
}

/// Geometric variate: number of Bernoulli(`p`) trials up to and including
/// the first success.
#[inline]
pub fn geometric<S: RandomSource + ?Sized>(src: &mut S, p: f64) -> i64 {
    if p >= GEOMETRIC_SEARCH_THRESHOLD {
        geometric_search(src, p)
    } else {
        geometric_inversion(src, p)
    }
}

/// Sequential search of the CDF. Expected cost is `1/p` steps.
pub fn geometric_search<S: RandomSource + ?Sized>(src: &mut S, p: f64) -> i64 {
    let q = 1.0 - p;
    let u = src.uniform64();
    let mut x = 1;
    let mut prod = p;
    let mut sum = p;
    while u > sum {
        prod *= q;
        sum += prod;
        x += 1;
    }
    x
}

/// Closed-form inversion `ceil(ln(1 - U) / ln(1 - p))`.
///
/// The denominator is `ln_1p(-p)`, so success probabilities far below
/// `f64::EPSILON` still give large variates. Results beyond `i64::MAX`
/// saturate.
pub fn geometric_inversion<S: RandomSource + ?Sized>(src: &mut S, p: f64) -> i64 {
    let u = src.uniform64();
    // U == 0 maps to -0.0.
    ((1.0 - u).ln() / (-p).ln_1p()).ceil().max(1.0) as i64
}

/// Log-series (logarithmic) variate with parameter `0 < p < 1`.
///
/// Kemp's (1981) second accelerated generator.
pub fn logseries<S: RandomSource + ?Sized>(src: &mut S, p: f64) -> i64 {
    let r = (1.0 - p).ln();
    loop {
        let v = src.uniform64();
        if v >= p {
            return 1;
        }

        let u = src.uniform64();
        let q = 1.0 - (r * u).exp();
        if v <= q * q {
            let x = (1.0 + v.ln() / q.ln()).floor();
            if x < 1.0 || v == 0.0 {
                continue;
            }
            return x as i64;
        }
        if v >= q {
            return 1;
        }
        return 2;
    }
}

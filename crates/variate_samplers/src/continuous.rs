//! Continuous samplers built from one or two primitive draws.
//!
//! Most of these are direct inversions of the CDF. The exceptions are von
//! Mises (Best & Fisher rejection on the cosine), Wald (Michael, Schucany &
//! Haas transformation with a flip test) and Cauchy (ratio of normals).
//!
//! None of the functions validate their parameters.

use std::f64::consts::PI;

use variate_core::RandomSource;

use crate::gamma::std_exponential;

/// Normal variate with mean `mu` and standard deviation `sigma`.
#[inline]
pub fn gaussian<S: RandomSource + ?Sized>(src: &mut S, mu: f64, sigma: f64) -> f64 {
    mu + sigma * src.gaussian()
}

/// Standard Cauchy variate as the ratio of two independent standard normals.
#[inline]
pub fn std_cauchy<S: RandomSource + ?Sized>(src: &mut S) -> f64 {
    let num = src.gaussian();
    num / src.gaussian()
}

/// Von Mises variate on (−π, π] with location `mu` and concentration `kappa`.
///
/// For `kappa < 1e-8` the distribution is indistinguishable from uniform on
/// the circle and a single uniform draw is used. Otherwise Best & Fisher's
/// (1979) wrapped-Cauchy envelope is used, with the envelope parameter
/// approximated by `1/kappa + kappa` below `kappa = 1e-5`, where the exact
/// expression loses all precision.
pub fn von_mises<S: RandomSource + ?Sized>(src: &mut S, mu: f64, kappa: f64) -> f64 {
    if kappa < 1e-8 {
        return PI * (2.0 * src.uniform64() - 1.0);
    }

    let s = if kappa < 1e-5 {
        1.0 / kappa + kappa
    } else {
        let r = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
        let rho = (r - (2.0 * r).sqrt()) / (2.0 * kappa);
        (1.0 + rho * rho) / (2.0 * rho)
    };

    let w = loop {
        let u = src.uniform64();
        let z = (PI * u).cos();
        let w = (1.0 + s * z) / (s + z);
        let y = kappa * (s - w);
        let v = src.uniform64();
        if y * (2.0 - y) - v >= 0.0 || (y / v).ln() + 1.0 - y >= 0.0 {
            break w;
        }
    };

    let u = src.uniform64();
    let mut result = w.acos();
    if u < 0.5 {
        result = -result;
    }
    result += mu;

    let neg = result < 0.0;
    let wrapped = (result.abs() + PI) % (2.0 * PI) - PI;
    if neg {
        -wrapped
    } else {
        wrapped
    }
}

/// Pareto (Lomax) variate with shape `a`: `exp(E / a) - 1`.
#[inline]
pub fn pareto<S: RandomSource + ?Sized>(src: &mut S, a: f64) -> f64 {
    (std_exponential(src) / a).exp() - 1.0
}

/// Weibull variate with shape `a` and unit scale: `E^(1/a)`.
#[inline]
pub fn weibull<S: RandomSource + ?Sized>(src: &mut S, a: f64) -> f64 {
    std_exponential(src).powf(1.0 / a)
}

/// Power-function variate on [0, 1] with exponent `a`: `(1 - exp(-E))^(1/a)`.
#[inline]
pub fn power<S: RandomSource + ?Sized>(src: &mut S, a: f64) -> f64 {
    (1.0 - (-std_exponential(src)).exp()).powf(1.0 / a)
}

/// Laplace (double exponential) variate.
pub fn laplace<S: RandomSource + ?Sized>(src: &mut S, loc: f64, scale: f64) -> f64 {
    let u = src.uniform64();
    if u < 0.5 {
        loc + scale * (u + u).ln()
    } else {
        loc - scale * (2.0 - u - u).ln()
    }
}

/// Gumbel (type I extreme value) variate.
#[inline]
pub fn gumbel<S: RandomSource + ?Sized>(src: &mut S, loc: f64, scale: f64) -> f64 {
    let u = 1.0 - src.uniform64();
    loc - scale * (-u.ln()).ln()
}

/// Logistic variate.
#[inline]
pub fn logistic<S: RandomSource + ?Sized>(src: &mut S, loc: f64, scale: f64) -> f64 {
    let u = src.uniform64();
    loc + scale * (u / (1.0 - u)).ln()
}

/// Log-normal variate: `exp(N(mu, sigma))`.
#[inline]
pub fn lognormal<S: RandomSource + ?Sized>(src: &mut S, mu: f64, sigma: f64) -> f64 {
    gaussian(src, mu, sigma).exp()
}

/// Rayleigh variate with the given mode (scale).
#[inline]
pub fn rayleigh<S: RandomSource + ?Sized>(src: &mut S, mode: f64) -> f64 {
    mode * (-2.0 * (1.0 - src.uniform64()).ln()).sqrt()
}

/// Wald (inverse Gaussian) variate with mean `mu` and shape `lambda`.
///
/// Draws the smaller root of the chi-square transform and keeps it with
/// probability `mu / (mu + X)`, otherwise returns the conjugate root
/// `mu² / X`.
///
/// The smaller root `mu + mu/(2λ)·(Y − √(4λY + Y²))` is evaluated as
/// `mu·4λY / (Y + √(4λY + Y²))²`, which stays non-negative when λ is small
/// next to Y.
pub fn wald<S: RandomSource + ?Sized>(src: &mut S, mu: f64, lambda: f64) -> f64 {
    let n = src.gaussian();
    let y = mu * n * n;
    let x = if y == 0.0 {
        mu
    } else {
        let s = y + (4.0 * lambda * y + y * y).sqrt();
        mu * 4.0 * lambda * y / (s * s)
    };
    let u = src.uniform64();
    if u <= mu / (mu + x) {
        x
    } else {
        mu * mu / x
    }
}

/// Triangular variate between `left` and `right` peaking at `mode`.
pub fn triangular<S: RandomSource + ?Sized>(src: &mut S, left: f64, mode: f64, right: f64) -> f64 {
    let base = right - left;
    let leftbase = mode - left;
    let ratio = leftbase / base;
    let leftprod = leftbase * base;
    let rightprod = (right - mode) * base;
    let u = src.uniform64();

    if u <= ratio {
        left + (u * leftprod).sqrt()
    } else {
        right - ((1.0 - u) * rightprod).sqrt()
    }
}

//! Special functions needed by the discrete samplers.

use std::f64::consts::PI;

/// Stirling series coefficients, B(2k) / (2k (2k - 1)) for k = 1..=10.
const STIRLING: [f64; 10] = [
    8.333333333333333e-02,
    -2.777777777777778e-03,
    7.936507936507937e-04,
    -5.952380952380952e-04,
    8.417508417508418e-04,
    -1.917526917526918e-03,
    6.410256410256410e-03,
    -2.955065359477124e-02,
    1.796443723688307e-01,
    -1.39243221690590e+00,
];

/// Natural logarithm of the gamma function, ln Γ(x), for `x > 0`.
///
/// Returns exactly 0.0 at x = 1 and x = 2. Arguments below 7 are shifted up
/// by n = ⌈7 − x⌉ so the asymptotic Stirling series is evaluated at
/// x + n ≥ 7, and the shift is undone with the recurrence
/// ln Γ(x) = ln Γ(x + 1) − ln x.
///
/// Accuracy is close to machine precision for every positive argument.
///
/// # Domain
///
/// `x <= 0` is outside the contract: the result is meaningless and no
/// error is reported.
///
/// # Examples
///
/// ```
/// use variate_core::special::loggam;
///
/// assert_eq!(loggam(1.0), 0.0);
/// assert!((loggam(5.0) - 24.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn loggam(x: f64) -> f64 {
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }

    let n = if x <= 7.0 { (7.0 - x).ceil() as i64 } else { 0 };
    let mut x0 = x + n as f64;

    let x2 = 1.0 / (x0 * x0);
    let series = STIRLING[..9]
        .iter()
        .rev()
        .fold(STIRLING[9], |acc, &a| acc * x2 + a);

    let mut gl = series / x0 + 0.5 * (2.0 * PI).ln() + (x0 - 0.5) * x0.ln() - x0;
    for _ in 0..n {
        gl -= (x0 - 1.0).ln();
        x0 -= 1.0;
    }
    gl
}

//! Validated catalogue of every sampler in the crate.
//!
//! [`Distribution`] pairs a sampler with its parameters. Values built via
//! [`Distribution::parse`] have passed [`Distribution::validate`], so
//! [`Distribution::sample`] always stays inside the distribution's support
//! and every rejection loop terminates with probability one.

use std::fmt;

use variate_core::RandomSource;

use crate::continuous;
use crate::discrete;
use crate::error::{require_finite, require_non_negative, require_positive, ParamError};
use crate::gamma;
use crate::hypergeometric;
use crate::poisson;

/// A distribution together with its parameters.
///
/// # Examples
///
/// ```rust
/// use variate_core::VariateRng;
/// use variate_samplers::{Distribution, Variate};
///
/// let dist = Distribution::parse("von-mises", &[0.0, 4.0]).unwrap();
/// assert_eq!(dist, Distribution::VonMises { mu: 0.0, kappa: 4.0 });
///
/// let mut rng = VariateRng::from_seed(7);
/// match dist.sample(&mut rng) {
///     Variate::Continuous(x) => assert!(x.abs() <= std::f64::consts::PI),
///     Variate::Discrete(_) => unreachable!(),
/// }
///
/// assert!(Distribution::parse("gamma", &[-1.0, 1.0]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "distribution", rename_all = "snake_case")
)]
pub enum Distribution {
    /// Exponential with the given scale (mean).
    Exponential {
        /// Scale, `> 0`.
        scale: f64,
    },
    /// Normal with mean `mu` and standard deviation `sigma`.
    Normal {
        /// Mean.
        mu: f64,
        /// Standard deviation, `>= 0`.
        sigma: f64,
    },
    /// Gamma with shape and scale.
    Gamma {
        /// Shape, `> 0`.
        shape: f64,
        /// Scale, `> 0`.
        scale: f64,
    },
    /// Beta on [0, 1].
    Beta {
        /// First shape, `> 0`.
        a: f64,
        /// Second shape, `> 0`.
        b: f64,
    },
    /// Poisson with mean `lam`.
    Poisson {
        /// Mean, in `[0, POISSON_LAM_MAX]`.
        lam: f64,
    },
    /// Standard Cauchy.
    Cauchy,
    /// Student's t with `df` degrees of freedom.
    StudentT {
        /// Degrees of freedom, `> 0`.
        df: f64,
    },
    /// Von Mises on the circle.
    VonMises {
        /// Location.
        mu: f64,
        /// Concentration, `>= 0`.
        kappa: f64,
    },
    /// Pareto II (Lomax) with unit scale.
    Pareto {
        /// Shape, `> 0`.
        a: f64,
    },
    /// Weibull with unit scale.
    Weibull {
        /// Shape, `> 0`.
        a: f64,
    },
    /// Power-function distribution on [0, 1].
    Power {
        /// Exponent, `> 0`.
        a: f64,
    },
    /// Laplace (double exponential).
    Laplace {
        /// Location.
        loc: f64,
        /// Scale, `>= 0`.
        scale: f64,
    },
    /// Gumbel (type I extreme value).
    Gumbel {
        /// Location.
        loc: f64,
        /// Scale, `>= 0`.
        scale: f64,
    },
    /// Logistic.
    Logistic {
        /// Location.
        loc: f64,
        /// Scale, `>= 0`.
        scale: f64,
    },
    /// Log-normal: `exp` of a normal variate.
    #[cfg_attr(feature = "serde", serde(rename = "lognormal"))]
    LogNormal {
        /// Mean of the underlying normal.
        mu: f64,
        /// Standard deviation of the underlying normal, `>= 0`.
        sigma: f64,
    },
    /// Rayleigh.
    Rayleigh {
        /// Mode (scale), `>= 0`.
        mode: f64,
    },
    /// Wald (inverse Gaussian).
    Wald {
        /// Mean, `> 0`.
        mu: f64,
        /// Shape, `> 0`.
        lambda: f64,
    },
    /// Zipf (zeta) on the positive integers.
    Zipf {
        /// Exponent, `> 1`.
        a: f64,
    },
    /// Geometric: trials up to and including the first success.
    Geometric {
        /// Success probability, in `(0, 1]`.
        p: f64,
    },
    /// Hypergeometric: good items in a sample drawn without replacement.
    Hypergeometric {
        /// Good items in the population, `>= 0`.
        good: i64,
        /// Bad items in the population, `>= 0`.
        bad: i64,
        /// Sample size, in `[1, good + bad]`.
        sample: i64,
    },
    /// Triangular between `left` and `right`.
    Triangular {
        /// Lower limit.
        left: f64,
        /// Peak, in `[left, right]`.
        mode: f64,
        /// Upper limit, `> left`.
        right: f64,
    },
    /// Logarithmic series on the positive integers.
    #[cfg_attr(feature = "serde", serde(rename = "logseries"))]
    LogSeries {
        /// Shape, in `(0, 1)`.
        p: f64,
    },
}

/// One variate, continuous or integer valued.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Variate {
    /// Real-valued variate.
    Continuous(f64),
    /// Integer-valued variate.
    Discrete(i64),
}

impl Variate {
    /// Value as `f64`. Integers beyond 2^53 lose precision.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Variate::Continuous(x) => x,
            Variate::Discrete(k) => k as f64,
        }
    }

    /// Integer value, or `None` for a continuous variate.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Variate::Continuous(_) => None,
            Variate::Discrete(k) => Some(k),
        }
    }
}

impl fmt::Display for Variate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variate::Continuous(x) => write!(f, "{}", x),
            Variate::Discrete(k) => write!(f, "{}", k),
        }
    }
}

struct Entry {
    name: &'static str,
    params: &'static [&'static str],
    build: fn(&[f64]) -> Result<Distribution, ParamError>,
}

static CATALOGUE: &[Entry] = &[
    Entry {
        name: "exponential",
        params: &["scale"],
        build: |p| Ok(Distribution::Exponential { scale: p[0] }),
    },
    Entry {
        name: "normal",
        params: &["mu", "sigma"],
        build: |p| Ok(Distribution::Normal { mu: p[0], sigma: p[1] }),
    },
    Entry {
        name: "gamma",
        params: &["shape", "scale"],
        build: |p| {
            Ok(Distribution::Gamma {
                shape: p[0],
                scale: p[1],
            })
        },
    },
    Entry {
        name: "beta",
        params: &["a", "b"],
        build: |p| Ok(Distribution::Beta { a: p[0], b: p[1] }),
    },
    Entry {
        name: "poisson",
        params: &["lam"],
        build: |p| Ok(Distribution::Poisson { lam: p[0] }),
    },
    Entry {
        name: "cauchy",
        params: &[],
        build: |_| Ok(Distribution::Cauchy),
    },
    Entry {
        name: "student_t",
        params: &["df"],
        build: |p| Ok(Distribution::StudentT { df: p[0] }),
    },
    Entry {
        name: "von_mises",
        params: &["mu", "kappa"],
        build: |p| Ok(Distribution::VonMises { mu: p[0], kappa: p[1] }),
    },
    Entry {
        name: "pareto",
        params: &["a"],
        build: |p| Ok(Distribution::Pareto { a: p[0] }),
    },
    Entry {
        name: "weibull",
        params: &["a"],
        build: |p| Ok(Distribution::Weibull { a: p[0] }),
    },
    Entry {
        name: "power",
        params: &["a"],
        build: |p| Ok(Distribution::Power { a: p[0] }),
    },
    Entry {
        name: "laplace",
        params: &["loc", "scale"],
        build: |p| Ok(Distribution::Laplace { loc: p[0], scale: p[1] }),
    },
    Entry {
        name: "gumbel",
        params: &["loc", "scale"],
        build: |p| Ok(Distribution::Gumbel { loc: p[0], scale: p[1] }),
    },
    Entry {
        name: "logistic",
        params: &["loc", "scale"],
        build: |p| Ok(Distribution::Logistic { loc: p[0], scale: p[1] }),
    },
    Entry {
        name: "lognormal",
        params: &["mu", "sigma"],
        build: |p| Ok(Distribution::LogNormal { mu: p[0], sigma: p[1] }),
    },
    Entry {
        name: "rayleigh",
        params: &["mode"],
        build: |p| Ok(Distribution::Rayleigh { mode: p[0] }),
    },
    Entry {
        name: "wald",
        params: &["mu", "lambda"],
        build: |p| Ok(Distribution::Wald { mu: p[0], lambda: p[1] }),
    },
    Entry {
        name: "zipf",
        params: &["a"],
        build: |p| Ok(Distribution::Zipf { a: p[0] }),
    },
    Entry {
        name: "geometric",
        params: &["p"],
        build: |p| Ok(Distribution::Geometric { p: p[0] }),
    },
    Entry {
        name: "hypergeometric",
        params: &["good", "bad", "sample"],
        build: |p| {
            Ok(Distribution::Hypergeometric {
                good: count("good", p[0])?,
                bad: count("bad", p[1])?,
                sample: count("sample", p[2])?,
            })
        },
    },
    Entry {
        name: "triangular",
        params: &["left", "mode", "right"],
        build: |p| {
            Ok(Distribution::Triangular {
                left: p[0],
                mode: p[1],
                right: p[2],
            })
        },
    },
    Entry {
        name: "logseries",
        params: &["p"],
        build: |p| Ok(Distribution::LogSeries { p: p[0] }),
    },
];

/// Alternative spellings accepted by [`Distribution::parse`], after
/// lower-casing and mapping `-` to `_`.
const ALIASES: &[(&str, &str)] = &[
    ("exp", "exponential"),
    ("gaussian", "normal"),
    ("t", "student_t"),
    ("log_normal", "lognormal"),
    ("log_series", "logseries"),
    ("vonmises", "von_mises"),
];

/// Converts an integral `f64` into a count.
fn count(name: &'static str, value: f64) -> Result<i64, ParamError> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(ParamError::invalid(
            name,
            format!("must be an integer, got {}", value),
        ))
    }
}

fn lookup(name: &str) -> Option<&'static Entry> {
    let key = name.trim().to_ascii_lowercase().replace('-', "_");
    let key = ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key.as_str(), |(_, canonical)| *canonical);
    CATALOGUE.iter().find(|entry| entry.name == key)
}

fn require_probability(name: &'static str, p: f64, closed_above: bool) -> Result<(), ParamError> {
    let ok = if closed_above {
        p > 0.0 && p <= 1.0
    } else {
        p > 0.0 && p < 1.0
    };
    if ok {
        Ok(())
    } else {
        let interval = if closed_above { "(0, 1]" } else { "(0, 1)" };
        Err(ParamError::invalid(
            name,
            format!("must be in {}, got {}", interval, p),
        ))
    }
}

fn require_location_scale(loc: f64, scale: f64) -> Result<(), ParamError> {
    require_finite("loc", loc)?;
    require_non_negative("scale", scale)
}

impl Distribution {
    /// Looks up `name` in the catalogue and validates `params` against it.
    ///
    /// Names are case-insensitive and `-` and `_` are interchangeable, so
    /// `"Von-Mises"` and `"von_mises"` both work. Count parameters
    /// (hypergeometric) must be integral.
    ///
    /// # Errors
    ///
    /// - [`ParamError::UnknownDistribution`] for an unrecognised name
    /// - [`ParamError::WrongArity`] if `params` has the wrong length
    /// - [`ParamError::InvalidParameter`] if a value is outside the domain
    pub fn parse(name: &str, params: &[f64]) -> Result<Self, ParamError> {
        let entry =
            lookup(name).ok_or_else(|| ParamError::UnknownDistribution(name.to_string()))?;
        if params.len() != entry.params.len() {
            return Err(ParamError::WrongArity {
                distribution: entry.name,
                expected: entry.params.len(),
                got: params.len(),
            });
        }
        let dist = (entry.build)(params)?;
        dist.validate()?;
        Ok(dist)
    }

    /// Checks that every parameter is inside the distribution's domain.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), ParamError> {
        match *self {
            Distribution::Exponential { scale } => require_positive("scale", scale),
            Distribution::Normal { mu, sigma } | Distribution::LogNormal { mu, sigma } => {
                require_finite("mu", mu)?;
                require_non_negative("sigma", sigma)
            }
            Distribution::Gamma { shape, scale } => {
                require_positive("shape", shape)?;
                require_positive("scale", scale)
            }
            Distribution::Beta { a, b } => {
                require_positive("a", a)?;
                require_positive("b", b)
            }
            Distribution::Poisson { lam } => poisson::check_lam(lam),
            Distribution::Cauchy => Ok(()),
            Distribution::StudentT { df } => require_positive("df", df),
            Distribution::VonMises { mu, kappa } => {
                require_finite("mu", mu)?;
                require_non_negative("kappa", kappa)
            }
            Distribution::Pareto { a }
            | Distribution::Weibull { a }
            | Distribution::Power { a } => require_positive("a", a),
            Distribution::Laplace { loc, scale }
            | Distribution::Gumbel { loc, scale }
            | Distribution::Logistic { loc, scale } => require_location_scale(loc, scale),
            Distribution::Rayleigh { mode } => require_non_negative("mode", mode),
            Distribution::Wald { mu, lambda } => {
                require_positive("mu", mu)?;
                require_positive("lambda", lambda)
            }
            Distribution::Zipf { a } => {
                if a.is_finite() && a > 1.0 {
                    Ok(())
                } else {
                    Err(ParamError::invalid(
                        "a",
                        format!("must be finite and greater than 1, got {}", a),
                    ))
                }
            }
            Distribution::Geometric { p } => require_probability("p", p, true),
            Distribution::Hypergeometric { good, bad, sample } => {
                hypergeometric::check_params(good, bad, sample)
            }
            Distribution::Triangular { left, mode, right } => {
                require_finite("left", left)?;
                require_finite("mode", mode)?;
                require_finite("right", right)?;
                if left > mode {
                    Err(ParamError::invalid(
                        "mode",
                        format!("must be >= left ({}), got {}", left, mode),
                    ))
                } else if mode > right {
                    Err(ParamError::invalid(
                        "mode",
                        format!("must be <= right ({}), got {}", right, mode),
                    ))
                } else if left == right {
                    Err(ParamError::invalid(
                        "right",
                        format!("must be greater than left, got {} == {}", right, left),
                    ))
                } else {
                    Ok(())
                }
            }
            Distribution::LogSeries { p } => require_probability("p", p, false),
        }
    }

    /// Draws one variate.
    ///
    /// Assumes the parameters are valid; see [`Distribution::validate`].
    pub fn sample<S: RandomSource + ?Sized>(&self, src: &mut S) -> Variate {
        use Variate::{Continuous, Discrete};

        match *self {
            Distribution::Exponential { scale } => Continuous(scale * gamma::std_exponential(src)),
            Distribution::Normal { mu, sigma } => Continuous(continuous::gaussian(src, mu, sigma)),
            Distribution::Gamma { shape, scale } => Continuous(gamma::gamma(src, shape, scale)),
            Distribution::Beta { a, b } => Continuous(gamma::beta(src, a, b)),
            Distribution::Poisson { lam } => Discrete(poisson::poisson(src, lam)),
            Distribution::Cauchy => Continuous(continuous::std_cauchy(src)),
            Distribution::StudentT { df } => Continuous(gamma::std_t(src, df)),
            Distribution::VonMises { mu, kappa } => {
                Continuous(continuous::von_mises(src, mu, kappa))
            }
            Distribution::Pareto { a } => Continuous(continuous::pareto(src, a)),
            Distribution::Weibull { a } => Continuous(continuous::weibull(src, a)),
            Distribution::Power { a } => Continuous(continuous::power(src, a)),
            Distribution::Laplace { loc, scale } => {
                Continuous(continuous::laplace(src, loc, scale))
            }
            Distribution::Gumbel { loc, scale } => Continuous(continuous::gumbel(src, loc, scale)),
            Distribution::Logistic { loc, scale } => {
                Continuous(continuous::logistic(src, loc, scale))
            }
            Distribution::LogNormal { mu, sigma } => {
                Continuous(continuous::lognormal(src, mu, sigma))
            }
            Distribution::Rayleigh { mode } => Continuous(continuous::rayleigh(src, mode)),
            Distribution::Wald { mu, lambda } => Continuous(continuous::wald(src, mu, lambda)),
            Distribution::Zipf { a } => Discrete(discrete::zipf(src, a)),
            Distribution::Geometric { p } => Discrete(discrete::geometric(src, p)),
            Distribution::Hypergeometric { good, bad, sample } => {
                Discrete(hypergeometric::hypergeometric(src, good, bad, sample))
            }
            Distribution::Triangular { left, mode, right } => {
                Continuous(continuous::triangular(src, left, mode, right))
            }
            Distribution::LogSeries { p } => Discrete(discrete::logseries(src, p)),
        }
    }

    /// Catalogue name, as accepted by [`Distribution::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Exponential { .. } => "exponential",
            Distribution::Normal { .. } => "normal",
            Distribution::Gamma { .. } => "gamma",
            Distribution::Beta { .. } => "beta",
            Distribution::Poisson { .. } => "poisson",
            Distribution::Cauchy => "cauchy",
            Distribution::StudentT { .. } => "student_t",
            Distribution::VonMises { .. } => "von_mises",
            Distribution::Pareto { .. } => "pareto",
            Distribution::Weibull { .. } => "weibull",
            Distribution::Power { .. } => "power",
            Distribution::Laplace { .. } => "laplace",
            Distribution::Gumbel { .. } => "gumbel",
            Distribution::Logistic { .. } => "logistic",
            Distribution::LogNormal { .. } => "lognormal",
            Distribution::Rayleigh { .. } => "rayleigh",
            Distribution::Wald { .. } => "wald",
            Distribution::Zipf { .. } => "zipf",
            Distribution::Geometric { .. } => "geometric",
            Distribution::Hypergeometric { .. } => "hypergeometric",
            Distribution::Triangular { .. } => "triangular",
            Distribution::LogSeries { .. } => "logseries",
        }
    }

    /// Whether [`Distribution::sample`] returns [`Variate::Discrete`].
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Distribution::Poisson { .. }
                | Distribution::Zipf { .. }
                | Distribution::Geometric { .. }
                | Distribution::Hypergeometric { .. }
                | Distribution::LogSeries { .. }
        )
    }

    /// Parameter values in catalogue order.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            Distribution::Cauchy => vec![],
            Distribution::Exponential { scale } => vec![scale],
            Distribution::Poisson { lam } => vec![lam],
            Distribution::StudentT { df } => vec![df],
            Distribution::Rayleigh { mode } => vec![mode],
            Distribution::Pareto { a }
            | Distribution::Weibull { a }
            | Distribution::Power { a }
            | Distribution::Zipf { a } => vec![a],
            Distribution::Geometric { p } | Distribution::LogSeries { p } => vec![p],
            Distribution::Normal { mu, sigma } | Distribution::LogNormal { mu, sigma } => {
                vec![mu, sigma]
            }
            Distribution::Gamma { shape, scale } => vec![shape, scale],
            Distribution::Beta { a, b } => vec![a, b],
            Distribution::VonMises { mu, kappa } => vec![mu, kappa],
            Distribution::Laplace { loc, scale }
            | Distribution::Gumbel { loc, scale }
            | Distribution::Logistic { loc, scale } => vec![loc, scale],
            Distribution::Wald { mu, lambda } => vec![mu, lambda],
            Distribution::Hypergeometric { good, bad, sample } => {
                vec![good as f64, bad as f64, sample as f64]
            }
            Distribution::Triangular { left, mode, right } => vec![left, mode, right],
        }
    }

    /// Name with bound parameters, e.g. `gamma(shape=2, scale=0.5)`.
    pub fn describe(&self) -> String {
        let names = parameter_names(self.name()).unwrap_or(&[]);
        let bound: Vec<String> = names
            .iter()
            .zip(self.params())
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        format!("{}({})", self.name(), bound.join(", "))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Canonical names of every distribution in the catalogue.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|entry| entry.name)
}

/// Parameter names for `name` (aliases accepted), in the order
/// [`Distribution::parse`] expects them.
pub fn parameter_names(name: &str) -> Option<&'static [&'static str]> {
    lookup(name).map(|entry| entry.params)
}

//! # variate_samplers: Non-Uniform Random Variate Generators
//!
//! ## Layer 2 Role
//!
//! Every sampler turns uniform and standard normal draws from a
//! [`RandomSource`] into one variate of a named distribution, using the
//! classical rejection and inversion algorithms:
//!
//! - [`gamma`]: exponential, gamma (Ahrens-Dieter / Marsaglia-Tsang), beta
//!   (Jöhnk), Student-t
//! - [`poisson`]: multiplicative method and PTRS transformed rejection
//! - [`hypergeometric`]: sequential draws and Stadlober's HRUA*
//! - [`continuous`]: closed-form and rejection samplers for Cauchy, von
//!   Mises, Pareto, Weibull, power, Laplace, Gumbel, logistic, log-normal,
//!   Rayleigh, Wald and triangular
//! - [`discrete`]: Zipf, geometric and log-series
//!
//! ## Raw Functions vs Validated Objects
//!
//! The free functions do not check their parameters: out-of-domain input
//! gives NaN, a wrong value, or a loop that never accepts. Callers that
//! take parameters from outside should go through [`Distribution::parse`]
//! or the precomputed objects ([`Gamma`], [`Poisson`], [`Hypergeometric`]),
//! which validate once and can then be sampled repeatedly without paying the
//! setup cost again.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::VariateRng;
//! use variate_samplers::{gamma, poisson, Poisson};
//!
//! let mut rng = VariateRng::from_seed(12345);
//!
//! let g = gamma::gamma(&mut rng, 2.0, 3.0);
//! assert!(g >= 0.0);
//!
//! let k = poisson::poisson(&mut rng, 4.5);
//! assert!(k >= 0);
//!
//! // Repeated draws with fixed parameters
//! let dist = Poisson::new(250.0).unwrap();
//! let total: i64 = (0..100).map(|_| dist.sample(&mut rng)).sum();
//! assert!(total > 0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Variable names follow the published algorithms.
#![allow(clippy::many_single_char_names)]

pub mod continuous;
pub mod discrete;
pub mod distribution;
pub mod error;
pub mod gamma;
pub mod hypergeometric;
pub mod poisson;

pub use distribution::{Distribution, Variate};
pub use error::ParamError;
pub use gamma::Gamma;
pub use hypergeometric::Hypergeometric;
pub use poisson::{Poisson, POISSON_LAM_MAX};
pub use variate_core::RandomSource;

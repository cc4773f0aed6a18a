//! Error types for parameter validation.
//!
//! The raw sampler functions never return errors; these are raised by the
//! validating constructors and by [`Distribution::parse`](crate::Distribution::parse).

use thiserror::Error;

/// Parameter validation error.
///
/// # Examples
/// ```
/// use variate_samplers::ParamError;
///
/// let err = ParamError::InvalidParameter {
///     name: "shape",
///     value: "must be positive, got -1".to_string(),
/// };
/// assert_eq!(format!("{}", err), "Invalid parameter 'shape': must be positive, got -1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// No distribution is registered under this name.
    #[error("Unknown distribution: {0}")]
    UnknownDistribution(String),

    /// Wrong number of parameters for the distribution.
    #[error("{distribution} takes {expected} parameter(s), got {got}")]
    WrongArity {
        /// Canonical distribution name.
        distribution: &'static str,
        /// Number of parameters the distribution takes.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },
}

impl ParamError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::invalid(
            name,
            format!("must be finite and positive, got {}", value),
        ))
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamError::invalid(
            name,
            format!("must be finite and non-negative, got {}", value),
        ))
    }
}

/// Checks that `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::invalid(name, format!("must be finite, got {}", value)))
    }
}

//! Error types for random source construction.

use thiserror::Error;

/// Errors raised while building a random source.
///
/// # Examples
/// ```
/// use variate_core::SourceError;
///
/// let err = SourceError::UniformOutOfRange { index: 2, value: 1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Uniform draw 2 is 1, outside [0, 1)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// A scripted sequence was empty.
    #[error("Empty {0} sequence: a replay source needs at least one value")]
    EmptySequence(&'static str),

    /// A scripted uniform value falls outside [0, 1).
    #[error("Uniform draw {index} is {value}, outside [0, 1)")]
    UniformOutOfRange {
        /// Position in the scripted sequence
        index: usize,
        /// Offending value
        value: f64,
    },

    /// A scripted normal value is NaN or infinite.
    #[error("Normal draw {index} is not finite: {value}")]
    NonFiniteNormal {
        /// Position in the scripted sequence
        index: usize,
        /// Offending value
        value: f64,
    },
}

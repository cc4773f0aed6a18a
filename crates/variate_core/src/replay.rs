//! Scripted random source for deterministic tests.
//!
//! [`ReplaySource`] yields prescripted uniform and normal values in order,
//! wrapping around when a sequence is exhausted. Samplers are pure functions
//! of their draw sequence, so replaying a script pins their output exactly.

use crate::error::SourceError;
use crate::source::RandomSource;

/// A [`RandomSource`] that replays fixed sequences.
///
/// The uniform and normal scripts are consumed independently. Both wrap
/// around cyclically; the draw counters keep counting past the wrap, which
/// lets tests assert how many draws a sampler consumed.
///
/// # Examples
///
/// ```rust
/// use variate_core::{RandomSource, ReplaySource};
///
/// let mut src = ReplaySource::new(vec![0.25, 0.75], vec![1.5]).unwrap();
/// assert_eq!(src.uniform64(), 0.25);
/// assert_eq!(src.uniform64(), 0.75);
/// assert_eq!(src.uniform64(), 0.25);
/// assert_eq!(src.gaussian(), 1.5);
/// assert_eq!(src.uniforms_drawn(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ReplaySource {
    uniforms: Vec<f64>,
    normals: Vec<f64>,
    uniforms_drawn: usize,
    normals_drawn: usize,
}

impl ReplaySource {
    /// Builds a replay source from uniform and normal scripts.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if either script is empty, a uniform value is
    /// outside [0, 1), or a normal value is not finite.
    pub fn new(uniforms: Vec<f64>, normals: Vec<f64>) -> Result<Self, SourceError> {
        if uniforms.is_empty() {
            return Err(SourceError::EmptySequence("uniform"));
        }
        if normals.is_empty() {
            return Err(SourceError::EmptySequence("normal"));
        }
        if let Some((index, &value)) = uniforms
            .iter()
            .enumerate()
            .find(|(_, u)| !(0.0..1.0).contains(*u))
        {
            return Err(SourceError::UniformOutOfRange { index, value });
        }
        if let Some((index, &value)) = normals.iter().enumerate().find(|(_, z)| !z.is_finite()) {
            return Err(SourceError::NonFiniteNormal { index, value });
        }

        Ok(Self {
            uniforms,
            normals,
            uniforms_drawn: 0,
            normals_drawn: 0,
        })
    }

    /// Builds a source that only scripts uniform draws.
    ///
    /// Normal draws return 0.0.
    pub fn uniforms(uniforms: Vec<f64>) -> Result<Self, SourceError> {
        Self::new(uniforms, vec![0.0])
    }

    /// Number of uniform draws consumed so far.
    #[inline]
    pub fn uniforms_drawn(&self) -> usize {
        self.uniforms_drawn
    }

    /// Number of normal draws consumed so far.
    #[inline]
    pub fn normals_drawn(&self) -> usize {
        self.normals_drawn
    }

    /// Rewinds both scripts and clears the counters.
    pub fn rewind(&mut self) {
        self.uniforms_drawn = 0;
        self.normals_drawn = 0;
    }
}

impl RandomSource for ReplaySource {
    #[inline]
    fn uniform64(&mut self) -> f64 {
        let value = self.uniforms[self.uniforms_drawn % self.uniforms.len()];
        self.uniforms_drawn += 1;
        value
    }

    #[inline]
    fn gaussian(&mut self) -> f64 {
        let value = self.normals[self.normals_drawn % self.normals.len()];
        self.normals_drawn += 1;
        value
    }
}

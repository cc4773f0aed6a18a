//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to any
//! `io::Write` so they can be exercised against in-memory buffers.

pub mod list;
pub mod sample;
pub mod summary;

use tracing::info;
use variate_core::VariateRng;

/// Builds the run's generator, seeding from OS entropy when no seed is set.
///
/// The seed actually used is logged so an unseeded run can be replayed.
pub fn generator(seed: Option<u64>) -> VariateRng {
    let rng = seed.map_or_else(VariateRng::from_entropy, VariateRng::from_seed);
    info!(seed = rng.seed(), "generator ready");
    rng
}

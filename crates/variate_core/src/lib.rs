//! # variate_core: Random Sources for Variate Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! variate_core is the bottom layer of the variates workspace, providing:
//! - The [`RandomSource`] trait: uniform draws in [0, 1) and standard normal draws
//! - [`VariateRng`]: a seeded generator handle owning its own state
//! - [`RngSource`]: an adapter turning any `rand::Rng` into a [`RandomSource`]
//! - [`ReplaySource`]: a scripted source for deterministic tests
//! - A thread-local generator handle (`thread_rng`)
//! - The log-gamma helper used by the discrete samplers (`special`)
//!
//! ## No Global State
//!
//! Generators are explicit values passed by `&mut` reference. The only
//! implicit generator is the opt-in thread-local handle, which is owned by
//! the calling thread and never shared.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::{RandomSource, VariateRng};
//!
//! let mut rng = VariateRng::from_seed(12345);
//! let u = rng.uniform64();
//! assert!((0.0..1.0).contains(&u));
//!
//! let _z = rng.gaussian();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod replay;
pub mod rng;
pub mod source;
pub mod special;
pub mod thread_rng;

pub use error::SourceError;
pub use replay::ReplaySource;
pub use rng::{RngSource, VariateRng};
pub use source::RandomSource;
pub use thread_rng::{seed_thread_rng, with_thread_rng};

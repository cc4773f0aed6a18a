//! Thread-local generator handle.
//!
//! Each thread lazily owns one [`VariateRng`], created on first access from
//! an entropy seed. No generator state is shared between threads, so
//! sampling on several threads never contends on a lock.
//!
//! # Example
//!
//! ```rust
//! use variate_core::{seed_thread_rng, with_thread_rng, RandomSource};
//!
//! seed_thread_rng(42);
//! let u = with_thread_rng(|rng| rng.uniform64());
//! assert!((0.0..1.0).contains(&u));
//! ```

use std::cell::RefCell;

use tracing::debug;

use crate::rng::VariateRng;

thread_local! {
    static THREAD_RNG: RefCell<Option<VariateRng>> = const { RefCell::new(None) };
}

/// Runs `f` with exclusive access to the calling thread's generator.
///
/// The generator is created on first use, seeded from OS entropy unless
/// [`seed_thread_rng`] ran earlier on this thread.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_thread_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut VariateRng) -> R,
{
    THREAD_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let rng = slot.get_or_insert_with(VariateRng::from_entropy);
        f(rng)
    })
}

/// Replaces the calling thread's generator with one seeded by `seed`.
///
/// Other threads are unaffected.
pub fn seed_thread_rng(seed: u64) {
    debug!(seed, "seeding thread-local generator");
    THREAD_RNG.with(|cell| *cell.borrow_mut() = Some(VariateRng::from_seed(seed)));
}

//! Property tests for the random sources and the log-gamma helper.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use variate_core::special::loggam;
use variate_core::{RandomSource, ReplaySource, RngSource, VariateRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_uniforms_stay_in_half_open_unit_interval(seed in any::<u64>()) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..1_000 {
            let u = rng.uniform64();
            prop_assert!((0.0..1.0).contains(&u), "seed {} gave {}", seed, u);
        }
    }

    #[test]
    fn test_normals_are_finite(seed in any::<u64>()) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..1_000 {
            prop_assert!(rng.gaussian().is_finite());
        }
    }

    #[test]
    fn test_same_seed_same_stream(seed in any::<u64>()) {
        let mut a = VariateRng::from_seed(seed);
        let mut b = VariateRng::from_seed(seed);
        for _ in 0..100 {
            prop_assert_eq!(a.uniform64(), b.uniform64());
            prop_assert_eq!(a.gaussian(), b.gaussian());
        }
    }

    #[test]
    fn test_replay_is_cyclic(
        script in prop::collection::vec(0.0..1.0_f64, 1..20),
        draws in 0usize..100,
    ) {
        let mut src = ReplaySource::uniforms(script.clone()).unwrap();
        for i in 0..draws {
            prop_assert_eq!(src.uniform64(), script[i % script.len()]);
        }
        prop_assert_eq!(src.uniforms_drawn(), draws);
        prop_assert_eq!(src.normals_drawn(), 0);
    }

    #[test]
    fn test_loggam_recurrence(x in 0.01..500.0_f64) {
        // ln Γ(x + 1) = ln Γ(x) + ln x
        let lhs = loggam(x + 1.0);
        let rhs = loggam(x) + x.ln();
        prop_assert!(
            (lhs - rhs).abs() <= 1e-10 * lhs.abs().max(1.0),
            "x = {}: {} vs {}", x, lhs, rhs
        );
    }
}

#[test]
fn test_rng_source_wraps_any_rng() {
    let mut src = RngSource::new(StdRng::seed_from_u64(5));
    let n = 100_000;
    let mean = (0..n).map(|_| src.uniform64()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01);

    let mean = (0..n).map(|_| src.gaussian()).sum::<f64>() / n as f64;
    assert!(mean.abs() < 0.02);
}

#[test]
fn test_loggam_half_integers() {
    // Γ(n + 1/2) = (2n)! sqrt(pi) / (4^n n!)
    let sqrt_pi = std::f64::consts::PI.sqrt();
    let mut gamma = sqrt_pi;
    for n in 0..20 {
        let x = n as f64 + 0.5;
        assert_relative_eq!(loggam(x), gamma.ln(), max_relative = 1e-12);
        gamma *= x;
    }
}

#[test]
fn test_boxed_source_forwards() {
    let mut boxed: Box<dyn RandomSource> = Box::new(VariateRng::from_seed(8));
    let mut plain = VariateRng::from_seed(8);
    for _ in 0..10 {
        assert_eq!(boxed.uniform64(), plain.uniform64());
    }
}

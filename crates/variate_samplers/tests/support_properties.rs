//! Every sampler stays inside its support for random parameters and seeds.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use variate_core::{RngSource, VariateRng};
use variate_samplers::continuous::{pareto, power, rayleigh, triangular, von_mises, wald, weibull};
use variate_samplers::discrete::{geometric, logseries, zipf};
use variate_samplers::gamma::{beta, gamma, std_gamma};
use variate_samplers::hypergeometric::hypergeometric;
use variate_samplers::poisson::poisson;
use variate_samplers::{Distribution, Variate};

const DRAWS: usize = 200;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_gamma_non_negative(seed in any::<u64>(), shape in 1e-3..1e3_f64, scale in 1e-3..1e3_f64) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            prop_assert!(std_gamma(&mut rng, shape) >= 0.0);
            prop_assert!(gamma(&mut rng, shape, scale) >= 0.0);
        }
    }

    #[test]
    fn test_beta_in_unit_interval(seed in any::<u64>(), a in 1e-3..50.0_f64, b in 1e-3..50.0_f64) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            let x = beta(&mut rng, a, b);
            prop_assert!((0.0..=1.0).contains(&x), "beta({}, {}) = {}", a, b, x);
        }
    }

    #[test]
    fn test_poisson_non_negative(seed in any::<u64>(), lam in 0.0..1e6_f64) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            prop_assert!(poisson(&mut rng, lam) >= 0);
        }
    }

    #[test]
    fn test_hypergeometric_support(
        seed in any::<u64>(),
        good in 0i64..500,
        bad in 0i64..500,
        fraction in 0.0..1.0_f64,
    ) {
        prop_assume!(good + bad >= 1);
        let popsize = good + bad;
        let sample = 1 + ((popsize - 1) as f64 * fraction) as i64;
        let (lo, hi) = ((sample - bad).max(0), sample.min(good));

        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            let k = hypergeometric(&mut rng, good, bad, sample);
            prop_assert!(
                (lo..=hi).contains(&k),
                "hypergeometric({}, {}, {}) = {} outside [{}, {}]",
                good, bad, sample, k, lo, hi
            );
        }
    }

    #[test]
    fn test_triangular_support(
        seed in any::<u64>(),
        left in -100.0..100.0_f64,
        width in 1e-6..100.0_f64,
        peak in 0.0..=1.0_f64,
    ) {
        let right = left + width;
        let mode = left + peak * width;
        prop_assume!(mode <= right);

        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            let x = triangular(&mut rng, left, mode, right);
            prop_assert!(x >= left && x <= right, "{} not in [{}, {}]", x, left, right);
        }
    }

    #[test]
    fn test_positive_integer_samplers(
        seed in any::<u64>(),
        a in 1.01..10.0_f64,
        p_geom in 1e-3..=1.0_f64,
        p_log in 1e-3..0.999_f64,
    ) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            prop_assert!(zipf(&mut rng, a) >= 1);
            prop_assert!(geometric(&mut rng, p_geom) >= 1);
            prop_assert!(logseries(&mut rng, p_log) >= 1);
        }
    }

    #[test]
    fn test_non_negative_continuous(seed in any::<u64>(), a in 0.05..20.0_f64, mu in 0.01..10.0_f64) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            prop_assert!(pareto(&mut rng, a) >= 0.0);
            prop_assert!(weibull(&mut rng, a) >= 0.0);
            let x = power(&mut rng, a);
            prop_assert!((0.0..=1.0).contains(&x));
            prop_assert!(rayleigh(&mut rng, mu) >= 0.0);
            prop_assert!(wald(&mut rng, mu, a) >= 0.0);
        }
    }

    #[test]
    fn test_von_mises_on_circle(seed in any::<u64>(), mu in -20.0..20.0_f64, kappa in 0.0..100.0_f64) {
        let mut rng = VariateRng::from_seed(seed);
        for _ in 0..DRAWS {
            let x = von_mises(&mut rng, mu, kappa);
            prop_assert!(x.abs() <= std::f64::consts::PI);
        }
    }

    #[test]
    fn test_catalogue_discrete_flag(seed in any::<u64>(), lam in 0.0..100.0_f64) {
        let dist = Distribution::parse("poisson", &[lam]).unwrap();
        let mut rng = VariateRng::from_seed(seed);
        let is_discrete = matches!(dist.sample(&mut rng), Variate::Discrete(_));
        prop_assert!(is_discrete);
    }
}

#[test]
fn test_any_rand_generator_drives_samplers() {
    // VariateRng wraps the same StdRng stream, so the draws coincide.
    let mut wrapped = RngSource::new(StdRng::seed_from_u64(17));
    let mut rng = VariateRng::from_seed(17);
    for _ in 0..DRAWS {
        assert_eq!(gamma(&mut wrapped, 2.5, 1.5), gamma(&mut rng, 2.5, 1.5));
        assert_eq!(poisson(&mut wrapped, 33.0), poisson(&mut rng, 33.0));
        assert_eq!(beta(&mut wrapped, 0.4, 0.6), beta(&mut rng, 0.4, 0.6));
    }
}

//! Property-based tests for the path pricers.
//!
//! Covers the payoff floor, best-performer tie-breaking, reduction of a
//! one-asset basket to a vanilla, flat cliquets, per-period additivity and
//! locality of cliquet periods, antithetic averaging, and scale invariance
//! of the basket payoff.

use approx::relative_eq;
use pricer_core::math::payoff::intrinsic;
use pricer_core::types::OptionDirection;
use pricer_pricing::path::{Trajectory, TrajectoryBundle};
use pricer_pricing::path_pricer::{
    BasketParams, BasketPathPricer, CliquetParams, CliquetPathPricer, PathPricer, PathSample,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = OptionDirection> {
    prop_oneof![Just(OptionDirection::Call), Just(OptionDirection::Put)]
}

fn terminal_bundle(references: &[f64], terminals: &[f64]) -> TrajectoryBundle<f64> {
    let paths = references
        .iter()
        .zip(terminals)
        .map(|(&reference, &terminal)| {
            Trajectory::new(vec![0.0, 1.0], vec![reference, terminal]).unwrap()
        })
        .collect();
    TrajectoryBundle::new(paths).unwrap()
}

fn reset_path(fixings: &[f64]) -> Trajectory<f64> {
    let resets = (1..fixings.len() - 1).collect();
    Trajectory::uniform(1.0, fixings.to_vec())
        .unwrap()
        .with_reset_indices(resets)
        .unwrap()
}

/// Reference prices paired with terminal prices for 1..6 underlyings.
fn basket_inputs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..6).prop_flat_map(|n| {
        (
            prop::collection::vec(1.0f64..500.0, n),
            prop::collection::vec(0.01f64..1000.0, n),
        )
    })
}

proptest! {
    #[test]
    fn prop_basket_payoff_non_negative(
        dir in direction(),
        (references, terminals) in basket_inputs(),
        strike in 1.0f64..1000.0,
        discount in 0.01f64..=1.0,
    ) {
        let pricer = BasketPathPricer::new(BasketParams::new(dir, references.clone(), strike, discount)).unwrap();
        let value = pricer.evaluate_path(&terminal_bundle(&references, &terminals)).unwrap();
        prop_assert!(value >= 0.0);
    }

    #[test]
    fn prop_basket_tie_resolves_to_lowest_index(
        n in 2usize..6,
        first in 0usize..5,
        gap in 1usize..5,
        reference in 1.0f64..500.0,
        performance in 0.5f64..2.0,
    ) {
        let first = first % (n - 1);
        let second = (first + gap).min(n - 1);
        prop_assume!(second > first);

        // Every other underlying underperforms the tied pair
        let mut references = vec![reference; n];
        let mut terminals = vec![reference * performance * 0.5; n];
        terminals[first] = reference * performance;
        terminals[second] = reference * performance;
        references[first] = reference;
        references[second] = reference;

        let pricer = BasketPathPricer::new(BasketParams::new(
            OptionDirection::Call, references.clone(), reference, 1.0,
        )).unwrap();
        let bundle = terminal_bundle(&references, &terminals);
        let (best, _) = pricer.best_performer(bundle.as_slice()).unwrap();
        prop_assert_eq!(best, first);
    }

    #[test]
    fn prop_single_underlying_basket_is_vanilla(
        dir in direction(),
        reference in 1.0f64..500.0,
        terminal in 0.01f64..1000.0,
        strike in 1.0f64..1000.0,
        discount in 0.01f64..=1.0,
    ) {
        let pricer = BasketPathPricer::new(BasketParams::new(dir, vec![reference], strike, discount)).unwrap();
        let path = Trajectory::new(vec![0.0, 1.0], vec![reference, terminal]).unwrap();
        prop_assert_eq!(
            pricer.evaluate_path(&path).unwrap(),
            intrinsic(dir, terminal, strike) * discount
        );
    }

    #[test]
    fn prop_basket_scale_invariance(
        dir in direction(),
        (references, terminals) in basket_inputs(),
        strike in 1.0f64..1000.0,
        discount in 0.01f64..=1.0,
        scale in 0.1f64..100.0,
    ) {
        let base = BasketPathPricer::new(BasketParams::new(dir, references.clone(), strike, discount)).unwrap();
        let base_value = base.evaluate_path(&terminal_bundle(&references, &terminals)).unwrap();

        let scaled_references: Vec<f64> = references.iter().map(|r| r * scale).collect();
        let scaled_terminals: Vec<f64> = terminals.iter().map(|s| s * scale).collect();
        let scaled = BasketPathPricer::new(BasketParams::new(
            dir, scaled_references.clone(), strike * scale, discount,
        )).unwrap();
        let scaled_value = scaled.evaluate_path(&terminal_bundle(&scaled_references, &scaled_terminals)).unwrap();

        prop_assert!(relative_eq!(
            scaled_value / scale, base_value, epsilon = 1e-9, max_relative = 1e-9
        ));
    }

    #[test]
    fn prop_flat_cliquet_is_zero(
        dir in direction(),
        level in 1.0f64..500.0,
        periods in 1usize..12,
        discount in 0.01f64..=1.0,
    ) {
        let pricer = CliquetPathPricer::new(CliquetParams::new(dir, level, 0.0, vec![discount; periods])).unwrap();
        let path = reset_path(&vec![level; periods + 1]);
        prop_assert_eq!(pricer.evaluate_path(&path).unwrap(), 0.0);
    }

    #[test]
    fn prop_cliquet_total_is_sum_of_periods(
        dir in direction(),
        fixings in prop::collection::vec(10.0f64..200.0, 2..10),
        moneyness in -0.2f64..0.2,
    ) {
        let periods = fixings.len() - 1;
        let discounts: Vec<f64> = (1..=periods).map(|k| (-0.02 * k as f64).exp()).collect();
        let pricer = CliquetPathPricer::new(CliquetParams::new(dir, fixings[0], moneyness, discounts.clone())).unwrap();
        let path = reset_path(&fixings);

        let expected: f64 = (1..=periods)
            .map(|k| intrinsic(dir, fixings[k] / fixings[k - 1], 1.0 + moneyness) * discounts[k - 1])
            .sum();
        let total = pricer.evaluate_path(&path).unwrap();
        let by_period: f64 = pricer.period_values(&path).unwrap().iter().sum();

        prop_assert!(relative_eq!(total, expected, epsilon = 1e-12, max_relative = 1e-12));
        prop_assert!(relative_eq!(total, by_period, epsilon = 1e-12, max_relative = 1e-12));
    }

    #[test]
    fn prop_cliquet_period_depends_only_on_previous_fixing(
        fixings in prop::collection::vec(10.0f64..200.0, 4..10),
        shock in 0.5f64..2.0,
        k in 2usize..9,
    ) {
        let periods = fixings.len() - 1;
        let k = 2 + k % (periods - 1);
        let pricer = CliquetPathPricer::new(CliquetParams::new(
            OptionDirection::Call, fixings[0], 0.0, vec![0.97; periods],
        )).unwrap();

        // Perturb every fixing strictly before t_{k-1}
        let mut perturbed = fixings.clone();
        for fixing in perturbed.iter_mut().take(k - 1).skip(1) {
            *fixing *= shock;
        }

        let original = pricer.period_values(&reset_path(&fixings)).unwrap();
        let shifted = pricer.period_values(&reset_path(&perturbed)).unwrap();
        prop_assert_eq!(original[k - 1..].to_vec(), shifted[k - 1..].to_vec());
    }

    #[test]
    fn prop_antithetic_is_pure_average(
        dir in direction(),
        fixings in prop::collection::vec(10.0f64..200.0, 2..8),
        reflected_fixings in prop::collection::vec(10.0f64..200.0, 8),
    ) {
        let periods = fixings.len() - 1;
        let reflected_fixings = &reflected_fixings[..fixings.len()];
        let params = CliquetParams::new(dir, 100.0, 0.0, vec![0.95; periods]);
        let single = CliquetPathPricer::new(params.clone()).unwrap();
        let paired = CliquetPathPricer::new(params.with_antithetic(true)).unwrap();

        let path = reset_path(&fixings);
        let reflected = reset_path(reflected_fixings);

        let expected = (single.evaluate_path(&path).unwrap() + single.evaluate_path(&reflected).unwrap()) / 2.0;
        prop_assert_eq!(paired.evaluate(PathSample::antithetic(&path, &reflected)).unwrap(), expected);
        // Flag cleared on the same path reproduces the single evaluation
        prop_assert_eq!(
            single.evaluate(PathSample::single(&path)).unwrap(),
            single.evaluate_path(&path).unwrap()
        );
    }

    #[test]
    fn prop_evaluation_is_idempotent(
        dir in direction(),
        (references, terminals) in basket_inputs(),
        strike in 1.0f64..1000.0,
    ) {
        let pricer = BasketPathPricer::new(BasketParams::new(dir, references.clone(), strike, 0.9)).unwrap();
        let bundle = terminal_bundle(&references, &terminals);
        prop_assert_eq!(pricer.evaluate_path(&bundle).unwrap(), pricer.evaluate_path(&bundle).unwrap());
    }
}

//! Parallel evaluation of independent samples.
//!
//! Pricers are immutable, so samples are evaluated with no coordination.
//! Results come back in input order; reduction stays with the caller.

use super::{PathPricer, PathPricerError, PathSample};
use num_traits::Float;
use pricer_core::types::PricingError;
use rayon::prelude::*;

/// Evaluates every sample in parallel.
///
/// # Returns
///
/// One discounted payoff per sample, in the order of `samples`.
///
/// # Errors
///
/// A [`PricingError`] whose message names the failing sample index. When
/// several samples fail, the one with the lowest index is reported,
/// whatever the thread scheduling. Partial results are discarded.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionDirection;
/// use pricer_pricing::path::Trajectory;
/// use pricer_pricing::path_pricer::{evaluate_batch, BasketParams, BasketPathPricer, PathSample};
///
/// let pricer = BasketPathPricer::new(BasketParams::new(
///     OptionDirection::Call,
///     vec![100.0],
///     100.0,
///     1.0,
/// ))
/// .unwrap();
///
/// let paths: Vec<Trajectory<f64>> = [95.0, 105.0, 120.0]
///     .iter()
///     .map(|&s| Trajectory::new(vec![0.0, 1.0], vec![100.0, s]).unwrap())
///     .collect();
/// let samples: Vec<_> = paths.iter().map(PathSample::single).collect();
///
/// let values = evaluate_batch(&pricer, &samples).unwrap();
/// assert_eq!(values, vec![0.0, 5.0, 20.0]);
/// ```
pub fn evaluate_batch<T, P, E>(pricer: &E, samples: &[PathSample<'_, P>]) -> Result<Vec<T>, PricingError>
where
    T: Float + Send,
    P: ?Sized + Sync,
    E: PathPricer<T, P>,
{
    let _span = tracing::debug_span!("evaluate_batch", samples = samples.len()).entered();

    let outcomes: Vec<Result<T, PathPricerError>> = samples
        .par_iter()
        .map(|sample| pricer.evaluate(*sample))
        .collect();

    // Sequential pass so the reported failure is the lowest index
    outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| {
            outcome.map_err(|err| {
                tracing::error!(sample = index, instrument = err.instrument(), error = %err, "path evaluation failed");
                at_sample(err.into(), index)
            })
        })
        .collect()
}

fn at_sample(err: PricingError, index: usize) -> PricingError {
    match err {
        PricingError::Configuration {
            instrument,
            message,
        } => PricingError::Configuration {
            instrument,
            message: format!("sample {}: {}", index, message),
        },
        PricingError::NumericalDegeneracy {
            instrument,
            message,
        } => PricingError::NumericalDegeneracy {
            instrument,
            message: format!("sample {}: {}", index, message),
        },
    }
}

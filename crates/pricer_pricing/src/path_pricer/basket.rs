//! European best-of-basket path pricer.
//!
//! At expiry the underlying with the greatest return since inception is
//! selected, and the option is exercised against *that* underlying's
//! terminal price:
//!
//! ```text
//! j      = argmax_i ( S_i(T) / S_i(0) )        lowest index wins ties
//! payoff = D * max(0, ω (S_j(T) - K))
//! ```
//!
//! Selection uses relative performance, exercise uses the absolute level.

use super::sample::evaluate_branches;
use super::validation::{check_discount, check_finite_prices, check_positive, to_f64};
use super::{PathPricer, PathPricerError, PathSample};
use crate::path::{Trajectory, TrajectoryBundle};
use num_traits::Float;
use pricer_core::math::payoff::intrinsic;
use pricer_core::types::OptionDirection;

const INSTRUMENT: &str = "basket";

/// Contract terms of a best-of-basket option.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasketParams<T> {
    /// Call or put
    pub direction: OptionDirection,
    /// Inception reference price of each underlying, in bundle order
    pub reference_prices: Vec<T>,
    /// Strike applied to the best performer's terminal price
    pub strike: T,
    /// Discount factor from expiry to valuation date
    pub discount: T,
    /// Whether samples carry an antithetic branch
    #[cfg_attr(feature = "serde", serde(default))]
    pub antithetic: bool,
}

impl<T: Float> BasketParams<T> {
    /// Creates contract terms without antithetic sampling.
    pub fn new(direction: OptionDirection, reference_prices: Vec<T>, strike: T, discount: T) -> Self {
        Self {
            direction,
            reference_prices,
            strike,
            discount,
            antithetic: false,
        }
    }

    /// Sets the antithetic flag.
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Validates the contract terms.
    ///
    /// # Errors
    ///
    /// Returns [`PathPricerError::InvalidParameter`] if:
    /// - no reference price is given
    /// - a reference price or the strike is not positive and finite
    /// - the discount factor is outside (0, 1]
    pub fn validate(&self) -> Result<(), PathPricerError> {
        if self.reference_prices.is_empty() {
            return Err(PathPricerError::invalid_parameter(
                INSTRUMENT,
                "reference_prices",
                "at least one underlying is required",
            ));
        }
        for (underlying, &reference) in self.reference_prices.iter().enumerate() {
            if !(reference.is_finite() && reference > T::zero()) {
                return Err(PathPricerError::invalid_parameter(
                    INSTRUMENT,
                    "reference_prices",
                    format!(
                        "underlying {}: must be positive and finite, got {}",
                        underlying,
                        to_f64(reference)
                    ),
                ));
            }
        }
        check_positive(INSTRUMENT, "strike", self.strike)?;
        check_discount(INSTRUMENT, "discount", self.discount)
    }
}

/// Path pricer for a European best-of-basket option.
///
/// Holds only validated contract terms; safe to share across threads and
/// to evaluate concurrently on distinct samples.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionDirection;
/// use pricer_pricing::path::{Trajectory, TrajectoryBundle};
/// use pricer_pricing::path_pricer::{BasketParams, BasketPathPricer, PathPricer};
///
/// let pricer = BasketPathPricer::new(BasketParams::new(
///     OptionDirection::Call,
///     vec![100.0, 50.0],
///     110.0,
///     0.95,
/// ))
/// .unwrap();
///
/// let bundle = TrajectoryBundle::new(vec![
///     Trajectory::new(vec![0.0, 1.0], vec![100.0, 150.0]).unwrap(),
///     Trajectory::new(vec![0.0, 1.0], vec![50.0, 60.0]).unwrap(),
/// ])
/// .unwrap();
///
/// let value: f64 = pricer.evaluate_path(&bundle).unwrap();
/// assert!((value - 38.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BasketPathPricer<T: Float> {
    params: BasketParams<T>,
}

impl<T: Float> BasketPathPricer<T> {
    /// Creates a pricer from validated contract terms.
    ///
    /// # Errors
    ///
    /// See [`BasketParams::validate`].
    pub fn new(params: BasketParams<T>) -> Result<Self, PathPricerError> {
        params.validate()?;
        tracing::debug!(
            instrument = INSTRUMENT,
            underlyings = params.reference_prices.len(),
            direction = %params.direction,
            antithetic = params.antithetic,
            "constructed path pricer"
        );
        Ok(Self { params })
    }

    /// Contract terms.
    #[inline]
    pub fn params(&self) -> &BasketParams<T> {
        &self.params
    }

    /// Number of underlyings the pricer expects.
    #[inline]
    pub fn n_underlyings(&self) -> usize {
        self.params.reference_prices.len()
    }

    /// Whether samples must carry an antithetic branch.
    #[inline]
    pub fn is_antithetic(&self) -> bool {
        self.params.antithetic
    }

    /// Identifies the best performer of one branch.
    ///
    /// Returns the underlying index and its terminal price. Returns are
    /// compared exactly; on a tie the lowest index is kept.
    ///
    /// # Errors
    ///
    /// - [`PathPricerError::UnderlyingCountMismatch`] if `paths` does not
    ///   hold one trajectory per reference price
    /// - [`PathPricerError::NonFinitePrice`] for a NaN or infinite price
    ///   anywhere on any trajectory, not only at expiry
    pub fn best_performer(&self, paths: &[Trajectory<T>]) -> Result<(usize, T), PathPricerError> {
        let mismatch = PathPricerError::UnderlyingCountMismatch {
            instrument: INSTRUMENT,
            expected: self.n_underlyings(),
            found: paths.len(),
        };
        if paths.len() != self.n_underlyings() {
            return Err(mismatch);
        }

        let mut best: Option<(usize, T, T)> = None;
        for (underlying, (path, &reference)) in paths
            .iter()
            .zip(&self.params.reference_prices)
            .enumerate()
        {
            check_finite_prices(INSTRUMENT, underlying, path)?;
            let terminal = path.terminal();
            let performance = terminal / reference;
            match best {
                Some((_, leader, _)) if performance <= leader => {}
                _ => best = Some((underlying, performance, terminal)),
            }
        }

        best.map(|(underlying, _, terminal)| (underlying, terminal))
            .ok_or(mismatch)
    }

    fn price_branch(&self, paths: &[Trajectory<T>]) -> Result<T, PathPricerError> {
        let (_, terminal) = self.best_performer(paths)?;
        let payoff = intrinsic(self.params.direction, terminal, self.params.strike);
        Ok(payoff * self.params.discount)
    }
}

impl<T: Float + Send + Sync> PathPricer<T, TrajectoryBundle<T>> for BasketPathPricer<T> {
    fn evaluate(&self, sample: PathSample<'_, TrajectoryBundle<T>>) -> Result<T, PathPricerError> {
        evaluate_branches(sample, self.params.antithetic, INSTRUMENT, |bundle| {
            self.price_branch(bundle.as_slice())
        })
    }
}

/// A lone trajectory is a one-underlying basket.
impl<T: Float + Send + Sync> PathPricer<T, Trajectory<T>> for BasketPathPricer<T> {
    fn evaluate(&self, sample: PathSample<'_, Trajectory<T>>) -> Result<T, PathPricerError> {
        evaluate_branches(sample, self.params.antithetic, INSTRUMENT, |path| {
            self.price_branch(std::slice::from_ref(path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bundle(terminals: &[f64], references: &[f64]) -> TrajectoryBundle<f64> {
        let paths = terminals
            .iter()
            .zip(references)
            .map(|(&terminal, &reference)| {
                Trajectory::new(vec![0.0, 1.0], vec![reference, terminal]).unwrap()
            })
            .collect();
        TrajectoryBundle::new(paths).unwrap()
    }

    fn pricer(direction: OptionDirection, references: Vec<f64>, strike: f64) -> BasketPathPricer<f64> {
        BasketPathPricer::new(BasketParams::new(direction, references, strike, 0.95)).unwrap()
    }

    #[test]
    fn test_best_performer_by_relative_return() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let paths = bundle(&[120.0, 80.0], &[100.0, 50.0]);

        // Returns 1.20 and 1.60: underlying 1 wins despite the lower price
        assert_eq!(pricer.best_performer(paths.as_slice()).unwrap(), (1, 80.0));
    }

    #[test]
    fn test_best_performer_out_of_the_money() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let paths = bundle(&[120.0, 80.0], &[100.0, 50.0]);
        assert_eq!(pricer.evaluate_path(&paths).unwrap(), 0.0);
    }

    #[test]
    fn test_best_performer_in_the_money() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let paths = bundle(&[150.0, 60.0], &[100.0, 50.0]);
        assert_relative_eq!(pricer.evaluate_path(&paths).unwrap(), 38.0, epsilon = 1e-12);
    }

    #[test]
    fn test_put_on_best_performer() {
        let pricer = pricer(OptionDirection::Put, vec![100.0, 50.0], 110.0);
        let paths = bundle(&[120.0, 80.0], &[100.0, 50.0]);
        // Best performer terminal 80, put pays 30 discounted
        assert_relative_eq!(pricer.evaluate_path(&paths).unwrap(), 28.5, epsilon = 1e-12);
    }

    #[test]
    fn test_tie_keeps_lowest_index() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0, 25.0], 10.0);
        let paths = bundle(&[110.0, 55.0, 27.5], &[100.0, 50.0, 25.0]);
        let (index, terminal) = pricer.best_performer(paths.as_slice()).unwrap();
        assert_eq!(index, 0);
        assert_eq!(terminal, 110.0);
    }

    #[test]
    fn test_underlying_count_mismatch() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let paths = bundle(&[120.0, 80.0, 90.0], &[100.0, 50.0, 60.0]);
        let err = pricer.evaluate_path(&paths).unwrap_err();
        assert_eq!(
            err,
            PathPricerError::UnderlyingCountMismatch {
                instrument: "basket",
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_non_finite_terminal_is_error() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let paths = bundle(&[f64::NAN, 80.0], &[100.0, 50.0]);
        let err = pricer.evaluate_path(&paths).unwrap_err();
        assert!(matches!(
            err,
            PathPricerError::NonFinitePrice {
                underlying: 0,
                sample: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_before_expiry_is_error() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let times = vec![0.0, 0.5, 1.0];
        let paths = TrajectoryBundle::new(vec![
            Trajectory::new(times.clone(), vec![f64::NAN, f64::INFINITY, 150.0]).unwrap(),
            Trajectory::new(times, vec![50.0, f64::NAN, 60.0]).unwrap(),
        ])
        .unwrap();

        // Terminal prices alone would give 38.0
        let err = pricer.evaluate_path(&paths).unwrap_err();
        assert!(matches!(
            err,
            PathPricerError::NonFinitePrice {
                underlying: 0,
                sample: 0,
                ..
            }
        ));
        assert!(err.is_numerical());
    }

    #[test]
    fn test_non_finite_intermediate_on_later_underlying() {
        let pricer = pricer(OptionDirection::Call, vec![100.0, 50.0], 110.0);
        let times = vec![0.0, 0.5, 1.0];
        let paths = TrajectoryBundle::new(vec![
            Trajectory::new(times.clone(), vec![100.0, 120.0, 150.0]).unwrap(),
            Trajectory::new(times, vec![50.0, f64::NEG_INFINITY, 60.0]).unwrap(),
        ])
        .unwrap();

        let err = pricer.evaluate_path(&paths).unwrap_err();
        assert!(matches!(
            err,
            PathPricerError::NonFinitePrice {
                underlying: 1,
                sample: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_single_trajectory_is_vanilla() {
        let pricer = pricer(OptionDirection::Call, vec![100.0], 100.0);
        let path = Trajectory::new(vec![0.0, 0.5, 1.0], vec![100.0, 90.0, 112.0]).unwrap();
        assert_relative_eq!(pricer.evaluate_path(&path).unwrap(), 12.0 * 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_antithetic_average() {
        let pricer = BasketPathPricer::new(
            BasketParams::new(OptionDirection::Call, vec![100.0, 50.0], 110.0, 0.95)
                .with_antithetic(true),
        )
        .unwrap();
        let path = bundle(&[150.0, 60.0], &[100.0, 50.0]);
        let reflected = bundle(&[70.0, 40.0], &[100.0, 50.0]);

        let value = pricer
            .evaluate(PathSample::antithetic(&path, &reflected))
            .unwrap();
        assert_relative_eq!(value, 19.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            BasketParams::new(OptionDirection::Call, vec![], 110.0, 0.95),
            BasketParams::new(OptionDirection::Call, vec![100.0, 0.0], 110.0, 0.95),
            BasketParams::new(OptionDirection::Call, vec![100.0], -1.0, 0.95),
            BasketParams::new(OptionDirection::Call, vec![100.0], 110.0, 0.0),
            BasketParams::new(OptionDirection::Call, vec![100.0], 110.0, 1.2),
            BasketParams::new(OptionDirection::Call, vec![f64::NAN], 110.0, 0.95),
        ];
        for params in cases {
            let err = BasketPathPricer::new(params).unwrap_err();
            assert!(matches!(err, PathPricerError::InvalidParameter { instrument: "basket", .. }));
        }
    }

    #[test]
    fn test_accessors() {
        let pricer = pricer(OptionDirection::Put, vec![100.0, 50.0], 110.0);
        assert_eq!(pricer.n_underlyings(), 2);
        assert!(!pricer.is_antithetic());
        assert_eq!(pricer.params().strike, 110.0);
    }
}

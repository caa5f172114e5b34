//! Path pricers for path-dependent Monte Carlo payoffs.
//!
//! A path pricer turns one simulated sample into one discounted payoff.
//! Pricers hold immutable contract terms only; averaging across samples
//! is left to the caller's accumulator.
//!
//! # Key Components
//!
//! - [`PathPricer`]: Capability trait, generic over the consumed path shape
//! - [`PathSample`]: Single path or explicit antithetic pair
//! - [`BasketPathPricer`]: European best-of-basket
//! - [`CliquetPathPricer`]: Periodic reset option
//! - [`PathPricerKind`]: Closed set of pricers for static dispatch
//! - [`evaluate_batch`]: Parallel evaluation of many samples
//!
//! # Design Philosophy
//!
//! - **Static dispatch**: Enum-based variant selection, no trait objects in
//!   the sampling loop
//! - **Fail loudly**: Grid mismatches and non-finite prices are errors,
//!   never floored to a zero payoff
//! - **Borrowed paths**: Samples are borrowed for one call and never retained

mod basket;
mod batch;
mod cliquet;
mod error;
mod kind;
mod sample;
mod validation;

pub use basket::{BasketParams, BasketPathPricer};
pub use batch::evaluate_batch;
pub use cliquet::{CliquetParams, CliquetPathPricer};
pub use error::PathPricerError;
pub use kind::{ContractTerms, PathPricerKind};
pub use sample::{evaluate_branches, PathSample};

use num_traits::Float;

/// Evaluates one Monte Carlo sample into a discounted payoff.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
/// * `P` - Path shape consumed (`Trajectory<T>` or `TrajectoryBundle<T>`)
///
/// # Contract
///
/// - The result is a single discounted amount, always `>= 0`
/// - Repeated calls with the same sample return the same value
/// - No state is carried between calls
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for parallel Monte Carlo.
pub trait PathPricer<T: Float, P: ?Sized>: Send + Sync {
    /// Prices one sample.
    ///
    /// # Errors
    ///
    /// Returns [`PathPricerError`] when the sample does not match the
    /// pricer's configuration or contains non-finite prices.
    fn evaluate(&self, sample: PathSample<'_, P>) -> Result<T, PathPricerError>;

    /// Prices a single path without antithetic pairing.
    fn evaluate_path(&self, path: &P) -> Result<T, PathPricerError> {
        self.evaluate(PathSample::Single(path))
    }
}

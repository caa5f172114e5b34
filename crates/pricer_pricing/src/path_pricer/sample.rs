//! Antithetic variance reduction.
//!
//! A [`PathSample`] carries either one simulated path or an explicitly
//! paired original/reflected branch. Pairing is a typed parameter rather
//! than a positional convention, so a mis-paired generator cannot be
//! silently priced as two independent paths.

use super::PathPricerError;
use num_traits::Float;

/// One Monte Carlo sample handed to a path pricer.
///
/// # Type Parameters
///
/// * `P` - Path shape (`Trajectory` or `TrajectoryBundle`)
///
/// # Examples
///
/// ```
/// use pricer_pricing::path::Trajectory;
/// use pricer_pricing::path_pricer::PathSample;
///
/// let up = Trajectory::new(vec![0.0, 1.0], vec![100.0, 110.0]).unwrap();
/// let down = Trajectory::new(vec![0.0, 1.0], vec![100.0, 91.0]).unwrap();
///
/// let sample = PathSample::antithetic(&up, &down);
/// assert!(sample.is_antithetic());
/// assert_eq!(sample.reflected().map(|p| p.terminal()), Some(91.0));
/// ```
#[derive(Debug)]
pub enum PathSample<'a, P: ?Sized> {
    /// A single simulated path.
    Single(&'a P),
    /// A simulated path together with its reflection.
    Antithetic {
        /// Original branch
        path: &'a P,
        /// Reflected branch (diffusion negated)
        reflected: &'a P,
    },
}

impl<P: ?Sized> Clone for PathSample<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for PathSample<'_, P> {}

impl<'a, P: ?Sized> PathSample<'a, P> {
    /// Wraps a single path.
    #[inline]
    pub fn single(path: &'a P) -> Self {
        PathSample::Single(path)
    }

    /// Pairs a path with its reflected branch.
    #[inline]
    pub fn antithetic(path: &'a P, reflected: &'a P) -> Self {
        PathSample::Antithetic { path, reflected }
    }

    /// Returns whether the sample carries two branches.
    #[inline]
    pub fn is_antithetic(&self) -> bool {
        matches!(self, PathSample::Antithetic { .. })
    }

    /// Original branch.
    #[inline]
    pub fn primary(&self) -> &'a P {
        match *self {
            PathSample::Single(path) | PathSample::Antithetic { path, .. } => path,
        }
    }

    /// Reflected branch, if any.
    #[inline]
    pub fn reflected(&self) -> Option<&'a P> {
        match *self {
            PathSample::Single(_) => None,
            PathSample::Antithetic { reflected, .. } => Some(reflected),
        }
    }
}

/// Evaluates `payoff` on each branch of `sample` and averages the results.
///
/// Both branches go through the same `payoff` closure, so discounting is
/// identical on each; only the price path differs.
///
/// # Errors
///
/// [`PathPricerError::AntitheticMismatch`] if the sample shape disagrees with
/// `antithetic`, or the first error raised by `payoff`.
pub fn evaluate_branches<T, P, F>(
    sample: PathSample<'_, P>,
    antithetic: bool,
    instrument: &'static str,
    mut payoff: F,
) -> Result<T, PathPricerError>
where
    T: Float,
    P: ?Sized,
    F: FnMut(&P) -> Result<T, PathPricerError>,
{
    if sample.is_antithetic() != antithetic {
        return Err(PathPricerError::AntitheticMismatch {
            expected: antithetic,
            instrument,
        });
    }

    match sample {
        PathSample::Single(path) => payoff(path),
        PathSample::Antithetic { path, reflected } => {
            let original = payoff(path)?;
            let mirrored = payoff(reflected)?;
            Ok((original + mirrored) / (T::one() + T::one()))
        }
    }
}

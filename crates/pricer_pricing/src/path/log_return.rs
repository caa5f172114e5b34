//! Log-return path convention with an explicit antithetic branch.
//!
//! Path generators commonly emit, per time step, a deterministic drift
//! term and a stochastic diffusion term in log space. The antithetic
//! branch of such a path keeps the drift and negates the diffusion, which
//! preserves the marginal law of each step while anti-correlating the pair.

use super::trajectory::{validate_resets, validate_time_grid};
use super::{PathError, Trajectory};
use num_traits::Float;

/// A simulated path stored as per-step drift and diffusion log-returns.
///
/// Step `k` moves the price from `t[k]` to `t[k + 1]` by the factor
/// `exp(drift[k] + diffusion[k])`.
///
/// # Examples
///
/// ```
/// use pricer_pricing::path::LogReturnPath;
///
/// let path = LogReturnPath::new(
///     vec![0.0, 0.5, 1.0],
///     vec![0.01, 0.01],
///     vec![0.05, -0.02],
/// )
/// .unwrap();
///
/// let (original, reflected) = path.antithetic_pair(100.0);
/// assert!((original.prices()[1] - 100.0 * 0.06_f64.exp()).abs() < 1e-12);
/// assert!((reflected.prices()[1] - 100.0 * (-0.04_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LogReturnPath<T: Float> {
    times: Vec<f64>,
    drift: Vec<T>,
    diffusion: Vec<T>,
    resets: Vec<usize>,
}

impl<T: Float> LogReturnPath<T> {
    /// Creates a log-return path.
    ///
    /// `times` includes inception, so both `drift` and `diffusion` must hold
    /// exactly `times.len() - 1` terms.
    pub fn new(times: Vec<f64>, drift: Vec<T>, diffusion: Vec<T>) -> Result<Self, PathError> {
        validate_time_grid(&times)?;
        let steps = times.len() - 1;
        if drift.len() != steps || diffusion.len() != steps {
            return Err(PathError::ComponentMismatch {
                steps,
                drift: drift.len(),
                diffusion: diffusion.len(),
            });
        }
        Ok(Self {
            times,
            drift,
            diffusion,
            resets: Vec::new(),
        })
    }

    /// Returns a copy of this path with the given reset sample indices.
    pub fn with_reset_indices(self, resets: Vec<usize>) -> Result<Self, PathError> {
        validate_resets(&resets, self.times.len())?;
        Ok(Self { resets, ..self })
    }

    /// Number of time steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.drift.len()
    }

    /// Time grid, inception included.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Price trajectory of the original branch starting from `spot`.
    pub fn to_trajectory(&self, spot: T) -> Trajectory<T> {
        self.build(spot, T::one())
    }

    /// Price trajectory of the reflected branch starting from `spot`.
    pub fn reflected_trajectory(&self, spot: T) -> Trajectory<T> {
        self.build(spot, -T::one())
    }

    /// Both branches, original first.
    pub fn antithetic_pair(&self, spot: T) -> (Trajectory<T>, Trajectory<T>) {
        (self.to_trajectory(spot), self.reflected_trajectory(spot))
    }

    fn build(&self, spot: T, diffusion_sign: T) -> Trajectory<T> {
        let mut prices = Vec::with_capacity(self.times.len());
        let mut price = spot;
        prices.push(price);
        for (&drift, &diffusion) in self.drift.iter().zip(&self.diffusion) {
            price = price * (drift + diffusion_sign * diffusion).exp();
            prices.push(price);
        }
        Trajectory::from_validated_parts(self.times.clone(), prices, self.resets.clone())
    }
}

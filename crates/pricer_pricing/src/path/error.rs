//! Error types for trajectory construction.

use thiserror::Error;

/// Structural errors raised while building trajectories and bundles.
///
/// These indicate a path generator that does not honour the trajectory
/// contract; they are never recoverable at the pricer level.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Fewer than two samples (inception and expiry are both required).
    #[error("Trajectory needs at least 2 samples, got {len}")]
    TooShort {
        /// Number of samples supplied
        len: usize,
    },

    /// Time grid and price series have different lengths.
    #[error("Length mismatch: {times} timestamps vs {prices} prices")]
    LengthMismatch {
        /// Number of timestamps
        times: usize,
        /// Number of prices
        prices: usize,
    },

    /// Timestamp is NaN or infinite.
    #[error("Non-finite timestamp at index {index}")]
    NonFiniteTime {
        /// Sample index
        index: usize,
    },

    /// Timestamps are not strictly increasing.
    #[error("Timestamps must be strictly increasing: t[{index}] = {time} does not exceed {previous}")]
    NonIncreasingTime {
        /// Sample index of the offending timestamp
        index: usize,
        /// Offending timestamp
        time: f64,
        /// Preceding timestamp
        previous: f64,
    },

    /// Reset index is not an intermediate sample.
    #[error("Reset index {index} is not an intermediate sample of a {len}-sample trajectory")]
    ResetOutOfRange {
        /// Offending reset index
        index: usize,
        /// Number of samples in the trajectory
        len: usize,
    },

    /// Reset indices are not strictly increasing.
    #[error("Reset indices must be strictly increasing: {index} follows {previous}")]
    UnorderedReset {
        /// Offending reset index
        index: usize,
        /// Preceding reset index
        previous: usize,
    },

    /// Bundle without any trajectory.
    #[error("Trajectory bundle must contain at least one trajectory")]
    EmptyBundle,

    /// Bundle member on a different time grid or reset schedule.
    #[error("Trajectory {index} does not share the bundle time grid and reset dates")]
    GridMismatch {
        /// Index of the offending trajectory in the bundle
        index: usize,
    },

    /// Drift and diffusion components do not match the step count.
    #[error("Log-return components mismatch: {steps} steps, {drift} drift terms, {diffusion} diffusion terms")]
    ComponentMismatch {
        /// Number of steps implied by the time grid
        steps: usize,
        /// Number of drift terms
        drift: usize,
        /// Number of diffusion terms
        diffusion: usize,
    },
}

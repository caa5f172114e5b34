//! # Pricer Pricing (Layer 3: Monte Carlo Path Pricers)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns simulated paths into discounted payoff samples:
//! - Trajectory types consumed from an external path generator (`path`)
//! - Path pricers for best-of-basket and cliquet options (`path_pricer`)
//! - Antithetic variance reduction via explicit path pairs
//! - Parallel evaluation of independent samples (rayon)
//!
//! Path simulation and aggregation of the samples into a price estimate
//! are owned by the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionDirection;
//! use pricer_pricing::path::Trajectory;
//! use pricer_pricing::path_pricer::{CliquetParams, CliquetPathPricer, PathPricer, PathSample};
//!
//! let pricer = CliquetPathPricer::new(
//!     CliquetParams::new(OptionDirection::Call, 100.0, 0.0, vec![0.98, 0.96]).with_antithetic(true),
//! )
//! .unwrap();
//!
//! let path = Trajectory::with_resets(vec![0.0, 0.5, 1.0], vec![100.0, 110.0, 99.0], vec![1]).unwrap();
//! let reflected = Trajectory::with_resets(vec![0.0, 0.5, 1.0], vec![100.0, 91.0, 101.0], vec![1]).unwrap();
//!
//! let sample = pricer.evaluate(PathSample::antithetic(&path, &reflected)).unwrap();
//! assert!(sample > 0.0);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (construction at `debug`, rejected
//! parameters at `warn`, failed batch samples at `error`) and never installs
//! a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for contract terms ([`path_pricer::ContractTerms`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod path;
pub mod path_pricer;

// Re-export commonly used items for convenience
pub use path::{LogReturnPath, PathError, Trajectory, TrajectoryBundle};
pub use path_pricer::{
    evaluate_batch, BasketParams, BasketPathPricer, CliquetParams, CliquetPathPricer,
    ContractTerms, PathPricer, PathPricerError, PathPricerKind, PathSample,
};

//! # pricer_core: Foundation Layer for Monte Carlo Path Pricers
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Generic floating-point trait (`traits::Float`)
//! - Option direction (`types::OptionDirection`)
//! - The shared payoff primitive (`math::payoff::intrinsic`)
//! - Error categories reported to Monte Carlo drivers (`types::PricingError`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::payoff::intrinsic;
//! use pricer_core::types::OptionDirection;
//!
//! let call = intrinsic(OptionDirection::Call, 110.0_f64, 100.0);
//! assert_eq!(call, 10.0);
//!
//! let put = intrinsic(OptionDirection::Put, 110.0_f64, 100.0);
//! assert_eq!(put, 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionDirection`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

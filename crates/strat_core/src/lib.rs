//! # strat_core: Foundation for the Options-Strategy Engine
//!
//! Bottom layer of the two-crate workspace, providing:
//! - Normal-distribution functions (`math::distributions`)
//! - Option-leg and market-context value types (`types`)
//! - The `Bound` sum type for explicitly tagged unbounded profit/loss
//! - Domain error types (`types::error`)
//!
//! ## Zero Engine Dependencies
//!
//! This layer has no dependency on the engine crate, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation of value types
//!
//! ## Usage Examples
//!
//! ```rust
//! use strat_core::math::distributions::norm_cdf;
//! use strat_core::types::{Bound, MarketContext};
//!
//! let ctx = MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap();
//! assert_eq!(ctx.atm_strike(), 185.0);
//!
//! let phi = norm_cdf(0.0_f64);
//! assert!((phi - 0.5).abs() < 1e-7);
//!
//! // Unbounded is a tagged value, never an IEEE infinity
//! let profit = Bound::Unbounded;
//! assert!(profit.is_unbounded());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

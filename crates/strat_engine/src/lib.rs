//! # strat_engine: Options-Strategy Analysis
//!
//! Closed-form analysis of multi-leg option strategies:
//! - Black-Scholes pricing and Greeks for one leg (`analytical`)
//! - A static catalog of named strategy shapes (`catalog`)
//! - Per-strategy max profit/loss, breakevens, and aggregate Greeks
//!   (`metrics`)
//! - Expiration payoff curves (`payoff`)
//! - Lognormal probability-of-profit estimates (`probability`)
//! - Candidate assembly and sorting (`ranker`)
//!
//! ## Design Principles
//!
//! - **Stateless**: every operation is a pure function of its arguments;
//!   nothing is cached between calls, so concurrent use needs no locking.
//! - **Closed-form only**: no iterative solvers, no convergence failures.
//!   European exercise only.
//! - **Explicit bounds**: unbounded profit/loss is the tagged
//!   [`Bound::Unbounded`](strat_core::types::Bound) value, never an IEEE
//!   infinity.
//! - **Atomic results**: a strategy either yields complete, valid metrics
//!   or an error; there are no partial results.
//!
//! ## Usage Example
//!
//! ```rust
//! use strat_core::types::MarketContext;
//! use strat_engine::catalog::{Outlook, RiskTolerance};
//! use strat_engine::ranker::{rank, SortKey};
//!
//! let ctx = MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap();
//! let ranked = rank(
//!     &ctx,
//!     Outlook::Neutral,
//!     RiskTolerance::Moderate,
//!     SortKey::ProbabilityOfProfit,
//! )
//! .unwrap();
//!
//! assert!(!ranked.is_empty());
//! for analysis in &ranked {
//!     let pop = analysis.metrics.probability_of_profit;
//!     assert!((0.0..=100.0).contains(&pop));
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod catalog;
pub mod error;
pub mod metrics;
pub mod payoff;
pub mod probability;
pub mod ranker;

pub use analytical::BlackScholes;
pub use catalog::{Complexity, Outlook, RiskTolerance, StrategyKey};
pub use error::StrategyError;
pub use metrics::{compute_metrics, StrategyMetrics};
pub use payoff::PayoffPoint;
pub use ranker::{rank, SortKey, StrategyAnalysis};

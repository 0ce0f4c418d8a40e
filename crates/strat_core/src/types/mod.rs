//! Value types shared across the strategy engine.
//!
//! This module provides:
//! - `OptionLeg`, `LegKind`, `Action`, `ExpiryTag`: one leg of a strategy
//! - `MarketContext`: validated, immutable pricing inputs
//! - `Bound`: explicitly tagged bounded/unbounded profit and loss
//! - `Greeks`: aggregate first-order sensitivities
//! - `DomainError`: rejection of invalid market inputs

pub mod bound;
pub mod context;
pub mod error;
pub mod greeks;
pub mod leg;

pub use bound::Bound;
pub use context::{MarketContext, DEFAULT_RISK_FREE_RATE, SPREAD_WIDTH};
pub use error::DomainError;
pub use greeks::Greeks;
pub use leg::{Action, ExpiryTag, LegKind, OptionLeg};

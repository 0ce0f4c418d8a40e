//! Error types for market-input validation.

use thiserror::Error;

/// Rejection of invalid market inputs.
///
/// Every public computation validates its inputs up front and refuses to
/// run on out-of-domain values, so `NaN` and IEEE infinities never
/// propagate into results.
///
/// # Examples
/// ```
/// use strat_core::types::DomainError;
///
/// let err = DomainError::InvalidSpot { spot: -10.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Volatility outside (0, 5].
    #[error("Invalid implied volatility: σ = {volatility} (must be in (0, 5])")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Fewer than one day to expiration.
    #[error("Invalid days to expiration: {days} (must be >= 1)")]
    InvalidExpiry {
        /// The rejected day count
        days: u32,
    },

    /// Fewer than one contract.
    #[error("Invalid contract count: {contracts} (must be >= 1)")]
    InvalidContracts {
        /// The rejected contract count
        contracts: u32,
    },
}

//! Error types for strategy analysis.

use strat_core::types::DomainError;
use thiserror::Error;

/// Errors from strategy analysis operations.
///
/// # Variants
/// - `Domain`: invalid market inputs, forwarded from `strat_core`
/// - `UnknownStrategy`: a strategy key string that names no catalog entry
///
/// # Examples
/// ```
/// use strat_engine::catalog::StrategyKey;
/// use strat_engine::StrategyError;
///
/// let err = "jade_lizard".parse::<StrategyKey>().unwrap_err();
/// assert!(matches!(err, StrategyError::UnknownStrategy { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StrategyError {
    /// Invalid market inputs.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A strategy key that is not in the catalog.
    #[error("Unknown strategy key: {key:?}")]
    UnknownStrategy {
        /// The unrecognised key string.
        key: String,
    },
}

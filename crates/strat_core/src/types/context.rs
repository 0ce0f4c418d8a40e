//! Validated market inputs for one computation.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Default annualised risk-free rate when the caller supplies none.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.0525;

/// Fixed strike distance used by the closed-form spread formulas.
pub const SPREAD_WIDTH: f64 = 5.0;

/// Strike rounding increment for the ATM strike.
const STRIKE_STEP: f64 = 5.0;

/// Distance from the ATM strike to the OTM call/put strikes.
const OTM_OFFSET: f64 = 10.0;

/// Immutable market inputs for one strategy computation.
///
/// Validated at construction; the engine never mutates a context and
/// never fetches market data itself. Spot and volatility are supplied
/// by the caller.
///
/// Strikes are derived with fixed offset rules (a documented
/// simplification, there is no real option chain): the ATM strike is the
/// spot rounded to the nearest 5, OTM strikes sit 10 points away.
///
/// # Examples
/// ```
/// use strat_core::types::MarketContext;
///
/// let ctx = MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap();
/// assert_eq!(ctx.atm_strike(), 185.0);
/// assert_eq!(ctx.otm_call_strike(), 195.0);
/// assert_eq!(ctx.otm_put_strike(), 175.0);
///
/// // Out-of-domain inputs are refused
/// assert!(MarketContext::new("AAPL", -1.0, 0.25, 30, 1).is_err());
/// assert!(MarketContext::new("AAPL", 185.50, 0.0, 30, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    /// Underlying ticker symbol (informational only).
    pub symbol: String,
    /// Spot price, > 0.
    pub spot: f64,
    /// Annualised implied volatility, in (0, 5].
    pub implied_vol: f64,
    /// Calendar days to expiration, >= 1.
    pub days_to_expiration: u32,
    /// Annualised risk-free rate.
    pub risk_free_rate: f64,
    /// Number of contracts per leg unit, >= 1.
    pub contracts: u32,
}

impl MarketContext {
    /// Creates a validated context with the default risk-free rate.
    ///
    /// # Errors
    /// - `DomainError::InvalidSpot` if `spot <= 0`
    /// - `DomainError::InvalidVolatility` if `implied_vol` is outside (0, 5]
    /// - `DomainError::InvalidExpiry` if `days_to_expiration < 1`
    /// - `DomainError::InvalidContracts` if `contracts < 1`
    pub fn new(
        symbol: impl Into<String>,
        spot: f64,
        implied_vol: f64,
        days_to_expiration: u32,
        contracts: u32,
    ) -> Result<Self, DomainError> {
        if !(spot > 0.0) {
            return Err(DomainError::InvalidSpot { spot });
        }
        if !(implied_vol > 0.0 && implied_vol <= 5.0) {
            return Err(DomainError::InvalidVolatility {
                volatility: implied_vol,
            });
        }
        if days_to_expiration < 1 {
            return Err(DomainError::InvalidExpiry {
                days: days_to_expiration,
            });
        }
        if contracts < 1 {
            return Err(DomainError::InvalidContracts { contracts });
        }

        Ok(Self {
            symbol: symbol.into(),
            spot,
            implied_vol,
            days_to_expiration,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            contracts,
        })
    }

    /// Overrides the risk-free rate.
    pub fn with_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }

    /// Time to expiration in years (calendar days / 365).
    #[inline]
    pub fn years_to_expiry(&self) -> f64 {
        f64::from(self.days_to_expiration) / 365.0
    }

    /// At-the-money strike: spot rounded to the nearest 5.
    #[inline]
    pub fn atm_strike(&self) -> f64 {
        (self.spot / STRIKE_STEP).round() * STRIKE_STEP
    }

    /// Out-of-the-money call strike: ATM + 10.
    #[inline]
    pub fn otm_call_strike(&self) -> f64 {
        self.atm_strike() + OTM_OFFSET
    }

    /// Out-of-the-money put strike: ATM - 10.
    #[inline]
    pub fn otm_put_strike(&self) -> f64 {
        self.atm_strike() - OTM_OFFSET
    }
}

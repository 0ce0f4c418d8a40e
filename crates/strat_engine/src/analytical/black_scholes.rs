//! Black-Scholes pricing and Greeks for one vanilla option leg.
//!
//! ## Mathematical Formulas
//!
//! **Call**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**:  P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ - σ√T.
//!
//! At `expiry <= 0` prices collapse to intrinsic value rather than
//! dividing by zero in `d1`.

use strat_core::math::distributions::{norm_cdf, norm_pdf};
use strat_core::types::{DomainError, Greeks, LegKind};

/// Cutoff below which an expiry is treated as already expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for one underlying: spot, rate, and volatility
/// fixed at construction, priced per (strike, expiry).
///
/// # Examples
/// ```
/// use strat_engine::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Creates a model for the given spot, annualised rate, and
    /// annualised volatility.
    ///
    /// # Errors
    /// - `DomainError::InvalidSpot` if `spot <= 0`
    /// - `DomainError::InvalidVolatility` if `volatility <= 0`
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, DomainError> {
        if !(spot > 0.0) {
            return Err(DomainError::InvalidSpot { spot });
        }
        if !(volatility > 0.0) {
            return Err(DomainError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// The spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// At expiry the term degenerates to ±∞; a large finite stand-in is
    /// returned so the CDF saturates at 0 or 1.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if self.spot > strike {
                100.0
            } else if self.spot < strike {
                -100.0
            } else {
                0.0
            };
        }
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price; intrinsic value at `expiry <= 0`.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (self.spot - strike).max(0.0);
        }
        let discount = (-self.rate * expiry).exp();
        self.spot * norm_cdf(self.d1(strike, expiry))
            - strike * discount * norm_cdf(self.d2(strike, expiry))
    }

    /// European put price; intrinsic value at `expiry <= 0`.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (strike - self.spot).max(0.0);
        }
        let discount = (-self.rate * expiry).exp();
        strike * discount * norm_cdf(-self.d2(strike, expiry))
            - self.spot * norm_cdf(-self.d1(strike, expiry))
    }

    /// Price of a call or put leg kind.
    ///
    /// # Panics
    /// Panics if called with `LegKind::Stock`; stock legs carry no
    /// premium and are never priced through the model.
    #[inline]
    pub fn price(&self, kind: LegKind, strike: f64, expiry: f64) -> f64 {
        match kind {
            LegKind::Call => self.price_call(strike, expiry),
            LegKind::Put => self.price_put(strike, expiry),
            LegKind::Stock => unreachable!("stock legs have no model premium"),
        }
    }

    /// All five Greeks for one option leg, in reporting conventions:
    /// theta per calendar day, vega and rho per 1-point move.
    ///
    /// At `expiry <= 0` everything but delta is 0 and delta is the
    /// intrinsic step (0, ±1).
    pub fn greeks(&self, strike: f64, expiry: f64, is_call: bool) -> Greeks {
        if expiry <= EXPIRY_EPSILON {
            let delta = if is_call {
                if self.spot > strike {
                    1.0
                } else {
                    0.0
                }
            } else if self.spot < strike {
                -1.0
            } else {
                0.0
            };
            return Greeks {
                delta,
                ..Greeks::default()
            };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();
        let pdf_d1 = norm_pdf(d1);

        let delta = if is_call {
            norm_cdf(d1)
        } else {
            norm_cdf(d1) - 1.0
        };

        let gamma = pdf_d1 / (self.spot * self.volatility * sqrt_t);

        // Annualised theta: -(S·σ·φ(d₁))/(2√T) ∓ r·K·e^(-rT)·N(±d₂)
        let decay = -(self.spot * self.volatility * pdf_d1) / (2.0 * sqrt_t);
        let theta_annual = if is_call {
            decay - self.rate * strike * discount * norm_cdf(d2)
        } else {
            decay + self.rate * strike * discount * norm_cdf(-d2)
        };

        let vega_annual = self.spot * sqrt_t * pdf_d1;

        let rho_annual = if is_call {
            strike * expiry * discount * norm_cdf(d2)
        } else {
            -strike * expiry * discount * norm_cdf(-d2)
        };

        Greeks {
            delta,
            gamma,
            theta: theta_annual / 365.0,
            vega: vega_annual / 100.0,
            rho: rho_annual / 100.0,
        }
    }
}

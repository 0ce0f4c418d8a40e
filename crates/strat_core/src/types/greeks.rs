//! Aggregate option sensitivities.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// First-order option sensitivities.
///
/// Conventions used throughout the engine: theta is per calendar day
/// (annualised value / 365), vega and rho are per 1-point move in
/// volatility and rate (annualised value / 100).
///
/// Per-leg Greeks aggregate with `+` after scaling by the leg's action
/// sign and quantity; stock legs contribute delta = ±1 and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: f64,
    /// ∂²V/∂S².
    pub gamma: f64,
    /// ∂V/∂t per calendar day.
    pub theta: f64,
    /// ∂V/∂σ per volatility point.
    pub vega: f64,
    /// ∂V/∂r per rate point.
    pub rho: f64,
}

impl Greeks {
    /// The delta-only contribution of a stock leg (`sign` = ±1 × quantity).
    pub fn stock_delta(sign: f64) -> Self {
        Greeks {
            delta: sign,
            ..Greeks::default()
        }
    }

    /// Every sensitivity multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Greeks {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }
}

impl Add for Greeks {
    type Output = Greeks;

    fn add(self, rhs: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
            rho: self.rho + rhs.rho,
        }
    }
}

impl Sum for Greeks {
    fn sum<I: Iterator<Item = Greeks>>(iter: I) -> Greeks {
        iter.fold(Greeks::default(), Add::add)
    }
}

//! Expiration payoff curves for arbitrary leg sets.
//!
//! Pure sampling of net P&L at expiration across a price range; nothing
//! is cached, every call regenerates the curve for its own inputs.

use serde::{Deserialize, Serialize};
use strat_core::types::OptionLeg;

/// Shares per option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Default half-width of the sampled range as a fraction of the center.
pub const DEFAULT_RANGE_PCT: f64 = 0.3;

/// Default number of curve samples.
pub const DEFAULT_SAMPLES: usize = 100;

/// One sampled point of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Underlying price at expiration.
    pub price: f64,
    /// Net profit/loss of the whole position at that price.
    pub pnl: f64,
}

/// Net P&L of a leg set at one expiration price.
///
/// Per leg: intrinsic value minus premium if bought, premium minus
/// intrinsic if sold, times quantity; the sum scales by the contract
/// multiplier and `contracts`.
pub fn pnl_at(legs: &[OptionLeg], price: f64, contracts: u32) -> f64 {
    let per_share: f64 = legs
        .iter()
        .map(|leg| {
            let intrinsic = leg.intrinsic_at(price);
            leg.action.sign() * (intrinsic - leg.premium) * f64::from(leg.quantity)
        })
        .sum();
    per_share * CONTRACT_MULTIPLIER * f64::from(contracts)
}

/// Samples the payoff curve over `[center·(1-pct), center·(1+pct)]`
/// with the default range and sample count.
///
/// # Examples
/// ```
/// use strat_core::types::{Action, LegKind, OptionLeg};
/// use strat_engine::payoff::curve;
///
/// let long_call = vec![OptionLeg::new(LegKind::Call, Action::Buy, 100.0, 3.0)];
/// let points = curve(&long_call, 100.0, 1);
/// assert_eq!(points.len(), 100);
/// assert!(points.first().unwrap().price < points.last().unwrap().price);
/// ```
pub fn curve(legs: &[OptionLeg], center_price: f64, contracts: u32) -> Vec<PayoffPoint> {
    curve_with(legs, center_price, DEFAULT_RANGE_PCT, DEFAULT_SAMPLES, contracts)
}

/// Samples the payoff curve with explicit range and sample count.
///
/// Points are ordered by ascending price and include both range ends.
pub fn curve_with(
    legs: &[OptionLeg],
    center_price: f64,
    range_pct: f64,
    samples: usize,
    contracts: u32,
) -> Vec<PayoffPoint> {
    let lo = center_price * (1.0 - range_pct);
    let hi = center_price * (1.0 + range_pct);
    let last = samples.saturating_sub(1).max(1) as f64;

    (0..samples.max(1))
        .map(|i| {
            let price = lo + (hi - lo) * (i as f64) / last;
            PayoffPoint {
                price,
                pnl: pnl_at(legs, price, contracts),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strat_core::types::{Action, LegKind};

    fn long_call() -> Vec<OptionLeg> {
        vec![OptionLeg::new(LegKind::Call, Action::Buy, 100.0, 3.0)]
    }

    #[test]
    fn long_call_pnl() {
        let legs = long_call();
        // OTM at expiry: lose the premium
        assert_relative_eq!(pnl_at(&legs, 90.0, 1), -300.0);
        // Breakeven at strike + premium
        assert_relative_eq!(pnl_at(&legs, 103.0, 1), 0.0);
        // Deep ITM
        assert_relative_eq!(pnl_at(&legs, 120.0, 1), 1700.0);
    }

    #[test]
    fn short_leg_flips_sign() {
        let legs = vec![OptionLeg::new(LegKind::Put, Action::Sell, 100.0, 4.0)];
        assert_relative_eq!(pnl_at(&legs, 110.0, 1), 400.0);
        assert_relative_eq!(pnl_at(&legs, 90.0, 1), -600.0);
    }

    #[test]
    fn stock_leg_uses_cost_basis() {
        let legs = vec![OptionLeg::new(LegKind::Stock, Action::Buy, 95.0, 0.0)];
        assert_relative_eq!(pnl_at(&legs, 100.0, 1), 500.0);
        assert_relative_eq!(pnl_at(&legs, 90.0, 1), -500.0);
    }

    #[test]
    fn quantity_and_contracts_scale_linearly() {
        let one = long_call();
        let two = vec![one[0].clone().with_quantity(2)];
        assert_relative_eq!(pnl_at(&two, 120.0, 1), 2.0 * pnl_at(&one, 120.0, 1));
        assert_relative_eq!(pnl_at(&one, 120.0, 3), 3.0 * pnl_at(&one, 120.0, 1));
    }

    #[test]
    fn curve_covers_the_requested_range() {
        let points = curve(&long_call(), 100.0, 1);
        assert_eq!(points.len(), DEFAULT_SAMPLES);
        assert_relative_eq!(points[0].price, 70.0, epsilon = 1e-9);
        assert_relative_eq!(points.last().unwrap().price, 130.0, epsilon = 1e-9);
        assert!(points.windows(2).all(|w| w[0].price < w[1].price));
    }

    #[test]
    fn curve_with_custom_sampling() {
        let points = curve_with(&long_call(), 200.0, 0.1, 11, 1);
        assert_eq!(points.len(), 11);
        assert_relative_eq!(points[0].price, 180.0, epsilon = 1e-9);
        assert_relative_eq!(points[10].price, 220.0, epsilon = 1e-9);
        // Even spacing
        assert_relative_eq!(points[1].price - points[0].price, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn regenerated_curves_are_independent() {
        let a = curve(&long_call(), 100.0, 1);
        let b = curve(&long_call(), 100.0, 1);
        assert_eq!(a, b);
        let shifted = curve(&long_call(), 110.0, 1);
        assert_ne!(a, shifted);
    }
}

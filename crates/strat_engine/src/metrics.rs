//! Per-strategy closed-form metrics.
//!
//! Builds concrete legs from the catalog template, then derives max
//! profit/loss, breakevens, aggregate Greeks, probability of profit, and
//! risk/reward from each family's closed-form relationship. No payoff
//! sampling or root finding is involved; every number comes straight
//! from the strike/premium algebra of the shape.

use serde::{Deserialize, Serialize};
use strat_core::types::{
    Bound, ExpiryTag, Greeks, LegKind, MarketContext, OptionLeg, SPREAD_WIDTH,
};
use tracing::debug;

use crate::analytical::BlackScholes;
use crate::catalog::definitions::{build_legs, CALENDAR_FAR_OFFSET};
use crate::catalog::StrategyKey;
use crate::error::StrategyError;
use crate::payoff::CONTRACT_MULTIPLIER;
use crate::probability::{self, profit_region};

/// Fully computed metrics for one strategy in one market context.
///
/// Dollar amounts (`max_profit`, `max_loss`) are position-level: per-share
/// values × 100 × contracts. Breakevens stay in underlying-price terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// Catalog key this was computed for.
    pub key: StrategyKey,
    /// The concrete legs, with model premiums.
    pub legs: Vec<OptionLeg>,
    /// Maximum profit at expiration.
    pub max_profit: Bound,
    /// Maximum loss at expiration.
    pub max_loss: Bound,
    /// Breakeven underlying prices, ascending.
    pub breakevens: Vec<f64>,
    /// Aggregate position Greeks.
    pub greeks: Greeks,
    /// Probability of profit at expiration, in [0, 100].
    pub probability_of_profit: f64,
    /// `max_profit / max_loss` when both are bounded; `Unbounded` when
    /// profit is unbounded; 0 when only the loss is unbounded.
    pub risk_reward: Bound,
}

/// Computes the full metrics for one strategy.
///
/// Atomic: either every field is valid or an error is returned; partial
/// results never escape.
///
/// # Errors
/// `StrategyError::Domain` if the context's spot or volatility is outside
/// the pricing domain (already impossible for a validated
/// [`MarketContext`], but re-checked at the pricing seam).
///
/// # Examples
/// ```
/// use strat_core::types::{Bound, MarketContext};
/// use strat_engine::catalog::StrategyKey;
/// use strat_engine::metrics::compute_metrics;
///
/// let ctx = MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap();
/// let m = compute_metrics(StrategyKey::Straddle, &ctx).unwrap();
///
/// assert_eq!(m.max_profit, Bound::Unbounded);
/// assert_eq!(m.breakevens.len(), 2);
/// assert!(m.breakevens[0] < m.breakevens[1]);
/// ```
pub fn compute_metrics(
    key: StrategyKey,
    ctx: &MarketContext,
) -> Result<StrategyMetrics, StrategyError> {
    let pricer = BlackScholes::new(ctx.spot, ctx.risk_free_rate, ctx.implied_vol)?;
    let legs = build_legs(key, ctx, &pricer);
    let scale = CONTRACT_MULTIPLIER * f64::from(ctx.contracts);

    let (max_profit, max_loss, mut breakevens) = family_metrics(key, ctx, &legs, scale);
    breakevens.sort_by(f64::total_cmp);

    let greeks = aggregate_greeks(&legs, &pricer, ctx.years_to_expiry());
    let probability_of_profit = probability::estimate(
        profit_region(key),
        &breakevens,
        ctx.spot,
        ctx.implied_vol,
        ctx.years_to_expiry(),
    );
    let risk_reward = risk_reward(max_profit, max_loss);

    debug!(
        strategy = %key,
        symbol = %ctx.symbol,
        pop = probability_of_profit,
        "computed strategy metrics"
    );

    Ok(StrategyMetrics {
        key,
        legs,
        max_profit,
        max_loss,
        breakevens,
        greeks,
        probability_of_profit,
        risk_reward,
    })
}

/// Closed-form (max profit, max loss, breakevens) per strategy family.
///
/// Relies on the fixed leg order of [`build_legs`]. Per-share amounts are
/// multiplied by `scale` (= 100 × contracts) on the way out.
fn family_metrics(
    key: StrategyKey,
    ctx: &MarketContext,
    legs: &[OptionLeg],
    scale: f64,
) -> (Bound, Bound, Vec<f64>) {
    let spot = ctx.spot;
    let atm = ctx.atm_strike();
    let otm_call = ctx.otm_call_strike();
    let otm_put = ctx.otm_put_strike();

    match key {
        // Vertical debit spreads: width bounds the win, the debit bounds
        // the loss.
        StrategyKey::CallSpread => {
            let debit = legs[0].premium - legs[1].premium;
            (
                Bound::Bounded((SPREAD_WIDTH - debit) * scale),
                Bound::Bounded(debit * scale),
                vec![atm + debit],
            )
        }
        StrategyKey::PutSpread => {
            let debit = legs[0].premium - legs[1].premium;
            (
                Bound::Bounded((SPREAD_WIDTH - debit) * scale),
                Bound::Bounded(debit * scale),
                vec![atm - debit],
            )
        }
        StrategyKey::BearCallSpread => {
            let credit = legs[0].premium - legs[1].premium;
            (
                Bound::Bounded(credit * scale),
                Bound::Bounded((SPREAD_WIDTH - credit) * scale),
                vec![atm + credit],
            )
        }

        // Single legs.
        StrategyKey::LongCall => {
            let premium = legs[0].premium;
            (
                Bound::Unbounded,
                Bound::Bounded(premium * scale),
                vec![atm + premium],
            )
        }
        StrategyKey::LongPut => {
            let premium = legs[0].premium;
            (
                Bound::Bounded((atm - premium) * scale),
                Bound::Bounded(premium * scale),
                vec![atm - premium],
            )
        }

        // Stock combinations; the stock leg is struck at spot.
        StrategyKey::CoveredCall => {
            let credit = legs[1].premium;
            (
                Bound::Bounded((otm_call - spot + credit) * scale),
                Bound::Bounded((spot - credit) * scale),
                vec![spot - credit],
            )
        }
        StrategyKey::ProtectivePut => {
            let premium = legs[1].premium;
            (
                Bound::Unbounded,
                Bound::Bounded((spot - otm_put + premium) * scale),
                vec![spot + premium],
            )
        }
        StrategyKey::Collar => {
            let net_credit = legs[2].premium - legs[1].premium;
            (
                Bound::Bounded((otm_call - spot + net_credit) * scale),
                Bound::Bounded((spot - otm_put - net_credit) * scale),
                vec![spot - net_credit],
            )
        }

        StrategyKey::SyntheticLong => {
            // Payoff is S - atm - net everywhere; loses everything only
            // at S = 0.
            let net_debit = legs[0].premium - legs[1].premium;
            (
                Bound::Unbounded,
                Bound::Bounded((atm + net_debit) * scale),
                vec![atm + net_debit],
            )
        }

        // Long volatility.
        StrategyKey::Straddle => {
            let cost = legs[0].premium + legs[1].premium;
            (
                Bound::Unbounded,
                Bound::Bounded(cost * scale),
                vec![atm - cost, atm + cost],
            )
        }
        StrategyKey::Strangle => {
            let cost = legs[0].premium + legs[1].premium;
            (
                Bound::Unbounded,
                Bound::Bounded(cost * scale),
                vec![otm_put - cost, otm_call + cost],
            )
        }

        // Short volatility, naked.
        StrategyKey::ShortStraddle => {
            let credit = legs[0].premium + legs[1].premium;
            (
                Bound::Bounded(credit * scale),
                Bound::Unbounded,
                vec![atm - credit, atm + credit],
            )
        }
        StrategyKey::ShortStrangle => {
            let credit = legs[0].premium + legs[1].premium;
            (
                Bound::Bounded(credit * scale),
                Bound::Unbounded,
                vec![otm_put - credit, otm_call + credit],
            )
        }

        // Short volatility, winged. Loss is the wing span minus the
        // credit; breakevens sit one credit either side of the short
        // strike(s).
        StrategyKey::IronCondor => {
            let credit =
                legs[0].premium - legs[1].premium + legs[2].premium - legs[3].premium;
            (
                Bound::Bounded(credit * scale),
                Bound::Bounded((SPREAD_WIDTH - credit) * scale),
                vec![otm_put - credit, otm_call + credit],
            )
        }
        StrategyKey::IronButterfly => {
            let credit =
                legs[0].premium + legs[1].premium - legs[2].premium - legs[3].premium;
            let wing_span = otm_call - atm;
            (
                Bound::Bounded(credit * scale),
                Bound::Bounded((wing_span - credit) * scale),
                vec![atm - credit, atm + credit],
            )
        }

        StrategyKey::CalendarSpread => {
            // At the near expiry the long leg still has time value, so
            // the shape has no closed-form breakeven; report the net
            // debit as the loss and the harvested near premium as the
            // profit ceiling.
            let debit = legs[1].premium - legs[0].premium;
            (
                Bound::Bounded(legs[0].premium * scale),
                Bound::Bounded(debit * scale),
                Vec::new(),
            )
        }

        StrategyKey::RatioSpread => {
            // Peak profit at the short strike; the extra short call is
            // naked above it.
            let quantity = f64::from(legs[1].quantity);
            let net_debit = legs[0].premium - quantity * legs[1].premium;
            let peak = (otm_call - atm) - net_debit;
            let upper = otm_call + peak;
            let mut breakevens = vec![upper];
            if net_debit > 0.0 {
                // A net-debit ratio also loses on the downside
                breakevens.push(atm + net_debit);
            }
            (
                Bound::Bounded(peak * scale),
                Bound::Unbounded,
                breakevens,
            )
        }
    }
}

/// Sum of per-leg Greeks, signed by action and scaled by quantity.
///
/// Stock legs contribute delta = ±1 only; far-tagged legs price with the
/// calendar offset added to the context expiry.
fn aggregate_greeks(legs: &[OptionLeg], pricer: &BlackScholes, years: f64) -> Greeks {
    legs.iter()
        .map(|leg| {
            let weight = leg.action.sign() * f64::from(leg.quantity);
            match leg.kind {
                LegKind::Stock => Greeks::stock_delta(weight),
                LegKind::Call | LegKind::Put => {
                    let expiry = match leg.expiry_tag {
                        Some(ExpiryTag::Far) => years + CALENDAR_FAR_OFFSET,
                        _ => years,
                    };
                    pricer
                        .greeks(leg.strike, expiry, leg.kind == LegKind::Call)
                        .scaled(weight)
                }
            }
        })
        .sum()
}

/// The explicit risk/reward rule.
///
/// Unbounded profit dominates; an unbounded loss with bounded profit
/// reports 0; a zero loss with bounded profit is a free trade, reported
/// as unbounded.
fn risk_reward(max_profit: Bound, max_loss: Bound) -> Bound {
    match (max_profit, max_loss) {
        (Bound::Unbounded, _) => Bound::Unbounded,
        (Bound::Bounded(_), Bound::Unbounded) => Bound::Bounded(0.0),
        (Bound::Bounded(profit), Bound::Bounded(loss)) => {
            if loss.abs() < f64::EPSILON {
                Bound::Unbounded
            } else {
                Bound::Bounded(profit / loss)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ctx() -> MarketContext {
        MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap()
    }

    fn pricer(ctx: &MarketContext) -> BlackScholes {
        BlackScholes::new(ctx.spot, ctx.risk_free_rate, ctx.implied_vol).unwrap()
    }

    // ==========================================================
    // Concrete scenarios
    // ==========================================================

    #[test]
    fn call_spread_scenario() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let debit = bs.price_call(185.0, t) - bs.price_call(195.0, t);

        let m = compute_metrics(StrategyKey::CallSpread, &ctx).unwrap();
        assert_eq!(m.max_loss, Bound::Bounded(debit * 100.0));
        assert_eq!(m.max_profit, Bound::Bounded((5.0 - debit) * 100.0));
        assert_eq!(m.breakevens, vec![185.0 + debit]);
    }

    #[test]
    fn long_straddle_scenario() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let cost = bs.price_call(185.0, t) + bs.price_put(185.0, t);

        let m = compute_metrics(StrategyKey::Straddle, &ctx).unwrap();
        assert_eq!(m.max_profit, Bound::Unbounded);
        assert_eq!(m.max_loss, Bound::Bounded(cost * 100.0));
        assert_relative_eq!(m.breakevens[0], 185.0 - cost, epsilon = 1e-12);
        assert_relative_eq!(m.breakevens[1], 185.0 + cost, epsilon = 1e-12);
    }

    #[test]
    fn short_strangle_scenario() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let credit = bs.price_call(195.0, t) + bs.price_put(175.0, t);

        let m = compute_metrics(StrategyKey::ShortStrangle, &ctx).unwrap();
        assert_eq!(m.max_profit, Bound::Bounded(credit * 100.0));
        assert_eq!(m.max_loss, Bound::Unbounded);
        assert_relative_eq!(m.breakevens[0], 175.0 - credit, epsilon = 1e-12);
        assert_relative_eq!(m.breakevens[1], 195.0 + credit, epsilon = 1e-12);
    }

    // ==========================================================
    // Invariants across the whole catalog
    // ==========================================================

    #[test]
    fn breakevens_always_ascending_and_pop_in_range() {
        let ctx = ctx();
        for key in StrategyKey::ALL {
            let m = compute_metrics(key, &ctx).unwrap();
            assert!(
                m.breakevens.windows(2).all(|w| w[0] <= w[1]),
                "{key} breakevens not sorted"
            );
            assert!(
                (0.0..=100.0).contains(&m.probability_of_profit),
                "{key} PoP out of range"
            );
        }
    }

    #[test]
    fn contracts_scale_bounded_amounts_linearly() {
        let one = ctx();
        let five = MarketContext::new("AAPL", 185.50, 0.25, 30, 5).unwrap();
        for key in StrategyKey::ALL {
            let a = compute_metrics(key, &one).unwrap();
            let b = compute_metrics(key, &five).unwrap();
            match (a.max_profit, b.max_profit) {
                (Bound::Bounded(x), Bound::Bounded(y)) => {
                    assert_relative_eq!(y, 5.0 * x, epsilon = 1e-9)
                }
                (profit_a, profit_b) => assert_eq!(profit_a, profit_b),
            }
            match (a.max_loss, b.max_loss) {
                (Bound::Bounded(x), Bound::Bounded(y)) => {
                    assert_relative_eq!(y, 5.0 * x, epsilon = 1e-9)
                }
                (loss_a, loss_b) => assert_eq!(loss_a, loss_b),
            }
            // Breakevens are price-level and unaffected
            assert_eq!(a.breakevens, b.breakevens);
        }
    }

    #[test]
    fn no_infinities_leak_into_results() {
        let ctx = ctx();
        for key in StrategyKey::ALL {
            let m = compute_metrics(key, &ctx).unwrap();
            if let Bound::Bounded(v) = m.max_profit {
                assert!(v.is_finite(), "{key} bounded profit not finite");
            }
            if let Bound::Bounded(v) = m.max_loss {
                assert!(v.is_finite(), "{key} bounded loss not finite");
            }
            assert!(m.breakevens.iter().all(|b| b.is_finite()));
            assert!(m.greeks.delta.is_finite());
            assert!(m.probability_of_profit.is_finite());
        }
    }

    // ==========================================================
    // Risk/reward rule
    // ==========================================================

    #[test]
    fn risk_reward_rule() {
        assert_eq!(
            risk_reward(Bound::Unbounded, Bound::Bounded(100.0)),
            Bound::Unbounded
        );
        assert_eq!(
            risk_reward(Bound::Unbounded, Bound::Unbounded),
            Bound::Unbounded
        );
        assert_eq!(
            risk_reward(Bound::Bounded(300.0), Bound::Unbounded),
            Bound::Bounded(0.0)
        );
        assert_eq!(
            risk_reward(Bound::Bounded(300.0), Bound::Bounded(100.0)),
            Bound::Bounded(3.0)
        );
        assert_eq!(
            risk_reward(Bound::Bounded(300.0), Bound::Bounded(0.0)),
            Bound::Unbounded
        );
    }

    #[test]
    fn unbounded_loss_strategies_report_zero_ratio() {
        let ctx = ctx();
        for key in [
            StrategyKey::ShortStraddle,
            StrategyKey::ShortStrangle,
            StrategyKey::RatioSpread,
        ] {
            let m = compute_metrics(key, &ctx).unwrap();
            assert_eq!(m.risk_reward, Bound::Bounded(0.0), "{key}");
        }
    }

    // ==========================================================
    // Greeks aggregation
    // ==========================================================

    #[test]
    fn stock_legs_contribute_delta_only() {
        let ctx = ctx();
        let m = compute_metrics(StrategyKey::CoveredCall, &ctx).unwrap();
        let bs = pricer(&ctx);
        let short_call = bs.greeks(195.0, ctx.years_to_expiry(), true);
        // Covered call delta = 1 (stock) - call delta
        assert_relative_eq!(m.greeks.delta, 1.0 - short_call.delta, epsilon = 1e-12);
        // Gamma comes only from the short call, negated
        assert_relative_eq!(m.greeks.gamma, -short_call.gamma, epsilon = 1e-12);
    }

    #[test]
    fn straddle_greeks_add_across_legs() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let m = compute_metrics(StrategyKey::Straddle, &ctx).unwrap();
        let call = bs.greeks(185.0, t, true);
        let put = bs.greeks(185.0, t, false);
        assert_relative_eq!(m.greeks.delta, call.delta + put.delta, epsilon = 1e-12);
        assert_relative_eq!(m.greeks.vega, call.vega + put.vega, epsilon = 1e-12);
        // Long straddle: positive vega, negative theta
        assert!(m.greeks.vega > 0.0);
        assert!(m.greeks.theta < 0.0);
    }

    #[test]
    fn ratio_spread_weights_the_short_leg_twice() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let m = compute_metrics(StrategyKey::RatioSpread, &ctx).unwrap();
        let long = bs.greeks(185.0, t, true);
        let short = bs.greeks(195.0, t, true);
        assert_relative_eq!(
            m.greeks.delta,
            long.delta - 2.0 * short.delta,
            epsilon = 1e-12
        );
    }

    #[test]
    fn calendar_far_leg_uses_longer_expiry() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let m = compute_metrics(StrategyKey::CalendarSpread, &ctx).unwrap();
        let near = bs.greeks(185.0, t, true);
        let far = bs.greeks(185.0, t + CALENDAR_FAR_OFFSET, true);
        assert_relative_eq!(m.greeks.vega, far.vega - near.vega, epsilon = 1e-12);
        // Net long the far leg: calendar is vega positive
        assert!(m.greeks.vega > 0.0);
    }

    // ==========================================================
    // Family formulas per strategy shape
    // ==========================================================

    #[test]
    fn iron_condor_credit_and_wings() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let credit = bs.price_put(175.0, t) - bs.price_put(170.0, t) + bs.price_call(195.0, t)
            - bs.price_call(200.0, t);

        let m = compute_metrics(StrategyKey::IronCondor, &ctx).unwrap();
        assert_relative_eq!(
            m.max_profit.bounded().unwrap(),
            credit * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            m.max_loss.bounded().unwrap(),
            (5.0 - credit) * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(m.breakevens[0], 175.0 - credit, epsilon = 1e-12);
        assert_relative_eq!(m.breakevens[1], 195.0 + credit, epsilon = 1e-12);
    }

    #[test]
    fn iron_butterfly_loss_is_wing_span_minus_credit() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let credit = bs.price_call(185.0, t) + bs.price_put(185.0, t)
            - bs.price_put(175.0, t)
            - bs.price_call(195.0, t);

        let m = compute_metrics(StrategyKey::IronButterfly, &ctx).unwrap();
        assert_relative_eq!(
            m.max_loss.bounded().unwrap(),
            (10.0 - credit) * 100.0,
            epsilon = 1e-9
        );
        // The loss must be a real loss
        assert!(m.max_loss.bounded().unwrap() > 0.0);
    }

    #[test]
    fn calendar_spread_has_no_breakevens_and_fifty_pop() {
        let ctx = ctx();
        let m = compute_metrics(StrategyKey::CalendarSpread, &ctx).unwrap();
        assert!(m.breakevens.is_empty());
        assert_eq!(m.probability_of_profit, 50.0);
        assert!(m.max_loss.bounded().unwrap() > 0.0);
    }

    #[test]
    fn ratio_spread_breakevens() {
        let ctx = ctx();
        let t = ctx.years_to_expiry();
        let bs = pricer(&ctx);
        let net = bs.price_call(185.0, t) - 2.0 * bs.price_call(195.0, t);
        let peak = 10.0 - net;

        let m = compute_metrics(StrategyKey::RatioSpread, &ctx).unwrap();
        assert_eq!(m.max_profit, Bound::Bounded(peak * 100.0));
        assert!(m.breakevens.contains(&(195.0 + peak)));
        if net > 0.0 {
            assert!(m.breakevens.contains(&(185.0 + net)));
        }
    }

    #[test]
    fn metrics_serialize_to_json() {
        let ctx = ctx();
        let m = compute_metrics(StrategyKey::LongCall, &ctx).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["key"], "long_call");
        assert_eq!(json["max_profit"], "unbounded");
        assert!(json["max_loss"].is_number());
    }
}

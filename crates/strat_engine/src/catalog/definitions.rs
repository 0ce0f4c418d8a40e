//! Per-key strategy definitions and leg templates.
//!
//! Each catalog entry is a registry record: static descriptive fields
//! plus a leg template that is a pure function of the market context.
//! New strategies are added by extending `StrategyKey`, this table, and
//! the metric/probability families that consume it; no monolithic branch
//! duplicates the strike derivation.

use strat_core::types::{Action, ExpiryTag, LegKind, MarketContext, OptionLeg, SPREAD_WIDTH};

use super::{BoundKind, Complexity, StrategyKey};
use crate::analytical::BlackScholes;

/// Extra time on the far leg of a calendar spread, in years (30 days).
pub const CALENDAR_FAR_OFFSET: f64 = 30.0 / 365.0;

/// Short legs written per long leg in a ratio spread.
pub const RATIO_SHORT_QUANTITY: u32 = 2;

/// One registry record of the strategy catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyDefinition {
    /// Catalog key.
    pub key: StrategyKey,
    /// Display name.
    pub name: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Number of legs the template produces.
    pub leg_count: u8,
    /// Management complexity.
    pub complexity: Complexity,
    /// Whether max profit is finite.
    pub max_profit_kind: BoundKind,
    /// Whether max loss is finite.
    pub max_loss_kind: BoundKind,
}

/// The registry record for one key.
pub fn definition(key: StrategyKey) -> StrategyDefinition {
    use BoundKind::{Bounded, Unbounded};
    use Complexity::{Complex, Easy, Moderate};

    match key {
        StrategyKey::CoveredCall => StrategyDefinition {
            key,
            name: "Covered Call",
            description: "Hold stock and sell an OTM call against it for income",
            leg_count: 2,
            complexity: Easy,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::Collar => StrategyDefinition {
            key,
            name: "Collar",
            description: "Hold stock, buy an OTM put for protection, sell an OTM call to fund it",
            leg_count: 3,
            complexity: Moderate,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::CallSpread => StrategyDefinition {
            key,
            name: "Bull Call Spread",
            description: "Buy an ATM call, sell an OTM call to reduce the debit",
            leg_count: 2,
            complexity: Easy,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::SyntheticLong => StrategyDefinition {
            key,
            name: "Synthetic Long",
            description: "Buy an ATM call and sell an ATM put to replicate long stock",
            leg_count: 2,
            complexity: Moderate,
            max_profit_kind: Unbounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::LongCall => StrategyDefinition {
            key,
            name: "Long Call",
            description: "Buy an ATM call for unlimited upside with bounded risk",
            leg_count: 1,
            complexity: Easy,
            max_profit_kind: Unbounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::ProtectivePut => StrategyDefinition {
            key,
            name: "Protective Put",
            description: "Hold stock and buy an OTM put as downside insurance",
            leg_count: 2,
            complexity: Easy,
            max_profit_kind: Unbounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::PutSpread => StrategyDefinition {
            key,
            name: "Bear Put Spread",
            description: "Buy an ATM put, sell an OTM put to reduce the debit",
            leg_count: 2,
            complexity: Easy,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::BearCallSpread => StrategyDefinition {
            key,
            name: "Bear Call Spread",
            description: "Sell an ATM call, buy an OTM call to cap the risk",
            leg_count: 2,
            complexity: Moderate,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::LongPut => StrategyDefinition {
            key,
            name: "Long Put",
            description: "Buy an ATM put to profit from a decline with bounded risk",
            leg_count: 1,
            complexity: Easy,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::IronCondor => StrategyDefinition {
            key,
            name: "Iron Condor",
            description: "Sell an OTM strangle and buy further wings for defined risk",
            leg_count: 4,
            complexity: Complex,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::IronButterfly => StrategyDefinition {
            key,
            name: "Iron Butterfly",
            description: "Sell an ATM straddle and buy OTM wings for defined risk",
            leg_count: 4,
            complexity: Complex,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::CalendarSpread => StrategyDefinition {
            key,
            name: "Calendar Spread",
            description: "Sell a near-dated ATM call, buy a far-dated one to harvest decay",
            leg_count: 2,
            complexity: Complex,
            max_profit_kind: Bounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::Straddle => StrategyDefinition {
            key,
            name: "Long Straddle",
            description: "Buy an ATM call and put to profit from a large move either way",
            leg_count: 2,
            complexity: Moderate,
            max_profit_kind: Unbounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::Strangle => StrategyDefinition {
            key,
            name: "Long Strangle",
            description: "Buy OTM call and put for a cheaper bet on a large move",
            leg_count: 2,
            complexity: Moderate,
            max_profit_kind: Unbounded,
            max_loss_kind: Bounded,
        },
        StrategyKey::ShortStraddle => StrategyDefinition {
            key,
            name: "Short Straddle",
            description: "Sell an ATM call and put to collect premium in a flat market",
            leg_count: 2,
            complexity: Complex,
            max_profit_kind: Bounded,
            max_loss_kind: Unbounded,
        },
        StrategyKey::ShortStrangle => StrategyDefinition {
            key,
            name: "Short Strangle",
            description: "Sell OTM call and put for premium with a wider profit zone",
            leg_count: 2,
            complexity: Complex,
            max_profit_kind: Bounded,
            max_loss_kind: Unbounded,
        },
        StrategyKey::RatioSpread => StrategyDefinition {
            key,
            name: "Call Ratio Spread",
            description: "Buy one ATM call, sell two OTM calls; profits peak at the short strike",
            leg_count: 2,
            complexity: Complex,
            max_profit_kind: Bounded,
            max_loss_kind: Unbounded,
        },
    }
}

/// Builds the concrete legs for `key` in the given context.
///
/// Strikes come from the context's fixed offset rules; every non-stock
/// leg's premium comes from the pricer. Stock legs are struck at spot
/// with premium 0. The calendar spread's far leg prices with an extra 30
/// days of time and carries [`ExpiryTag::Far`].
///
/// Leg order is fixed per key; the metrics calculator relies on it.
pub fn build_legs(key: StrategyKey, ctx: &MarketContext, pricer: &BlackScholes) -> Vec<OptionLeg> {
    let t = ctx.years_to_expiry();
    let atm = ctx.atm_strike();
    let otm_call = ctx.otm_call_strike();
    let otm_put = ctx.otm_put_strike();

    let call = |strike: f64| pricer.price_call(strike, t);
    let put = |strike: f64| pricer.price_put(strike, t);
    let stock = || OptionLeg::new(LegKind::Stock, Action::Buy, ctx.spot, 0.0);

    match key {
        StrategyKey::CoveredCall => vec![
            stock(),
            OptionLeg::new(LegKind::Call, Action::Sell, otm_call, call(otm_call)),
        ],
        StrategyKey::Collar => vec![
            stock(),
            OptionLeg::new(LegKind::Put, Action::Buy, otm_put, put(otm_put)),
            OptionLeg::new(LegKind::Call, Action::Sell, otm_call, call(otm_call)),
        ],
        StrategyKey::CallSpread => vec![
            OptionLeg::new(LegKind::Call, Action::Buy, atm, call(atm)),
            OptionLeg::new(LegKind::Call, Action::Sell, otm_call, call(otm_call)),
        ],
        StrategyKey::SyntheticLong => vec![
            OptionLeg::new(LegKind::Call, Action::Buy, atm, call(atm)),
            OptionLeg::new(LegKind::Put, Action::Sell, atm, put(atm)),
        ],
        StrategyKey::LongCall => vec![OptionLeg::new(LegKind::Call, Action::Buy, atm, call(atm))],
        StrategyKey::ProtectivePut => vec![
            stock(),
            OptionLeg::new(LegKind::Put, Action::Buy, otm_put, put(otm_put)),
        ],
        StrategyKey::PutSpread => vec![
            OptionLeg::new(LegKind::Put, Action::Buy, atm, put(atm)),
            OptionLeg::new(LegKind::Put, Action::Sell, otm_put, put(otm_put)),
        ],
        StrategyKey::BearCallSpread => vec![
            OptionLeg::new(LegKind::Call, Action::Sell, atm, call(atm)),
            OptionLeg::new(LegKind::Call, Action::Buy, otm_call, call(otm_call)),
        ],
        StrategyKey::LongPut => vec![OptionLeg::new(LegKind::Put, Action::Buy, atm, put(atm))],
        StrategyKey::IronCondor => vec![
            OptionLeg::new(LegKind::Put, Action::Sell, otm_put, put(otm_put)),
            OptionLeg::new(
                LegKind::Put,
                Action::Buy,
                otm_put - SPREAD_WIDTH,
                put(otm_put - SPREAD_WIDTH),
            ),
            OptionLeg::new(LegKind::Call, Action::Sell, otm_call, call(otm_call)),
            OptionLeg::new(
                LegKind::Call,
                Action::Buy,
                otm_call + SPREAD_WIDTH,
                call(otm_call + SPREAD_WIDTH),
            ),
        ],
        StrategyKey::IronButterfly => vec![
            OptionLeg::new(LegKind::Call, Action::Sell, atm, call(atm)),
            OptionLeg::new(LegKind::Put, Action::Sell, atm, put(atm)),
            OptionLeg::new(LegKind::Put, Action::Buy, otm_put, put(otm_put)),
            OptionLeg::new(LegKind::Call, Action::Buy, otm_call, call(otm_call)),
        ],
        StrategyKey::CalendarSpread => vec![
            OptionLeg::new(LegKind::Call, Action::Sell, atm, call(atm))
                .with_expiry_tag(ExpiryTag::Near),
            OptionLeg::new(
                LegKind::Call,
                Action::Buy,
                atm,
                pricer.price_call(atm, t + CALENDAR_FAR_OFFSET),
            )
            .with_expiry_tag(ExpiryTag::Far),
        ],
        StrategyKey::Straddle => vec![
            OptionLeg::new(LegKind::Call, Action::Buy, atm, call(atm)),
            OptionLeg::new(LegKind::Put, Action::Buy, atm, put(atm)),
        ],
        StrategyKey::Strangle => vec![
            OptionLeg::new(LegKind::Call, Action::Buy, otm_call, call(otm_call)),
            OptionLeg::new(LegKind::Put, Action::Buy, otm_put, put(otm_put)),
        ],
        StrategyKey::ShortStraddle => vec![
            OptionLeg::new(LegKind::Call, Action::Sell, atm, call(atm)),
            OptionLeg::new(LegKind::Put, Action::Sell, atm, put(atm)),
        ],
        StrategyKey::ShortStrangle => vec![
            OptionLeg::new(LegKind::Call, Action::Sell, otm_call, call(otm_call)),
            OptionLeg::new(LegKind::Put, Action::Sell, otm_put, put(otm_put)),
        ],
        StrategyKey::RatioSpread => vec![
            OptionLeg::new(LegKind::Call, Action::Buy, atm, call(atm)),
            OptionLeg::new(LegKind::Call, Action::Sell, otm_call, call(otm_call))
                .with_quantity(RATIO_SHORT_QUANTITY),
        ],
    }
}

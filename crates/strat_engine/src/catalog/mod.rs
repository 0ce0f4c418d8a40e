//! Static strategy catalog.
//!
//! A deterministic lookup from (market outlook × risk tolerance) to an
//! ordered list of named multi-leg strategy shapes, plus descriptive
//! metadata and leg templates per key. No state, no randomness: the same
//! inputs always recommend the same strategies in the same order.

pub mod definitions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StrategyError;

pub use definitions::{build_legs, definition, StrategyDefinition};

/// Directional view on the underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    /// Expecting the underlying to rise.
    Bullish,
    /// Expecting the underlying to fall.
    Bearish,
    /// Expecting the underlying to stay near its current price.
    Neutral,
    /// Expecting a large move in either direction.
    HighVol,
}

/// Appetite for open-ended risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    /// Defined-risk, income-oriented shapes.
    Conservative,
    /// Balanced debit/credit shapes.
    Moderate,
    /// Accepts unbounded-loss shapes.
    Aggressive,
}

/// How hard a strategy is to manage. Orders Easy < Moderate < Complex.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// One or two legs, one expiry.
    Easy,
    /// Two or three legs, defined risk.
    Moderate,
    /// Four legs, ratios, or multiple expiries.
    Complex,
}

/// Whether a strategy's max profit or loss is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// Finite at expiration.
    Bounded,
    /// No finite bound.
    Unbounded,
}

/// Catalog key for one strategy shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKey {
    /// Long stock + short OTM call.
    CoveredCall,
    /// Long stock + long OTM put + short OTM call.
    Collar,
    /// Bull call spread (long ATM call, short OTM call).
    CallSpread,
    /// Long ATM call + short ATM put.
    SyntheticLong,
    /// Long ATM call.
    LongCall,
    /// Long stock + long OTM put.
    ProtectivePut,
    /// Bear put spread (long ATM put, short OTM put).
    PutSpread,
    /// Short ATM call, long OTM call.
    BearCallSpread,
    /// Long ATM put.
    LongPut,
    /// Short OTM strangle wrapped in long wings.
    IronCondor,
    /// Short ATM straddle wrapped in long wings.
    IronButterfly,
    /// Short near-dated ATM call, long far-dated ATM call.
    CalendarSpread,
    /// Long ATM call + long ATM put.
    Straddle,
    /// Long OTM call + long OTM put.
    Strangle,
    /// Short ATM call + short ATM put.
    ShortStraddle,
    /// Short OTM call + short OTM put.
    ShortStrangle,
    /// Long 1 ATM call, short 2 OTM calls.
    RatioSpread,
}

impl StrategyKey {
    /// Every catalog key, in display order.
    pub const ALL: [StrategyKey; 17] = [
        StrategyKey::CoveredCall,
        StrategyKey::Collar,
        StrategyKey::CallSpread,
        StrategyKey::SyntheticLong,
        StrategyKey::LongCall,
        StrategyKey::ProtectivePut,
        StrategyKey::PutSpread,
        StrategyKey::BearCallSpread,
        StrategyKey::LongPut,
        StrategyKey::IronCondor,
        StrategyKey::IronButterfly,
        StrategyKey::CalendarSpread,
        StrategyKey::Straddle,
        StrategyKey::Strangle,
        StrategyKey::ShortStraddle,
        StrategyKey::ShortStrangle,
        StrategyKey::RatioSpread,
    ];

    /// The snake_case key string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKey::CoveredCall => "covered_call",
            StrategyKey::Collar => "collar",
            StrategyKey::CallSpread => "call_spread",
            StrategyKey::SyntheticLong => "synthetic_long",
            StrategyKey::LongCall => "long_call",
            StrategyKey::ProtectivePut => "protective_put",
            StrategyKey::PutSpread => "put_spread",
            StrategyKey::BearCallSpread => "bear_call_spread",
            StrategyKey::LongPut => "long_put",
            StrategyKey::IronCondor => "iron_condor",
            StrategyKey::IronButterfly => "iron_butterfly",
            StrategyKey::CalendarSpread => "calendar_spread",
            StrategyKey::Straddle => "straddle",
            StrategyKey::Strangle => "strangle",
            StrategyKey::ShortStraddle => "short_straddle",
            StrategyKey::ShortStrangle => "short_strangle",
            StrategyKey::RatioSpread => "ratio_spread",
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKey {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| StrategyError::UnknownStrategy { key: s.to_string() })
    }
}

/// Descriptive metadata for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyMetadata {
    /// Display name.
    pub name: &'static str,
    /// One-sentence description of the shape and when to use it.
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

/// Ordered strategy candidates for an outlook/risk cell.
///
/// The table is static and exhaustive over all 12 cells; every catalog
/// key is reachable from at least one cell.
///
/// # Examples
/// ```
/// use strat_engine::catalog::{recommend, Outlook, RiskTolerance, StrategyKey};
///
/// let keys = recommend(Outlook::Bullish, RiskTolerance::Conservative);
/// assert_eq!(keys[0], StrategyKey::CoveredCall);
/// ```
pub fn recommend(outlook: Outlook, risk: RiskTolerance) -> &'static [StrategyKey] {
    use Outlook::*;
    use RiskTolerance::*;
    use StrategyKey::*;

    match (outlook, risk) {
        (Bullish, Conservative) => &[CoveredCall, Collar, CallSpread],
        (Bullish, Moderate) => &[LongCall, CallSpread, SyntheticLong],
        (Bullish, Aggressive) => &[LongCall, SyntheticLong, RatioSpread],
        (Bearish, Conservative) => &[ProtectivePut, PutSpread, BearCallSpread],
        (Bearish, Moderate) => &[LongPut, PutSpread, BearCallSpread],
        (Bearish, Aggressive) => &[LongPut, BearCallSpread, RatioSpread],
        (Neutral, Conservative) => &[IronCondor, CoveredCall],
        (Neutral, Moderate) => &[IronCondor, IronButterfly, CalendarSpread],
        (Neutral, Aggressive) => &[ShortStraddle, ShortStrangle, IronButterfly],
        (HighVol, Conservative) => &[CalendarSpread, IronCondor],
        (HighVol, Moderate) => &[Straddle, Strangle],
        (HighVol, Aggressive) => &[Straddle, Strangle, RatioSpread],
    }
}

/// Metadata for one catalog key.
pub fn metadata(key: StrategyKey) -> StrategyMetadata {
    let def = definition(key);
    StrategyMetadata {
        name: def.name,
        description: def.description,
        leg_count: def.leg_count,
        complexity: def.complexity,
        max_profit_kind: def.max_profit_kind,
        max_loss_kind: def.max_loss_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const OUTLOOKS: [Outlook; 4] = [
        Outlook::Bullish,
        Outlook::Bearish,
        Outlook::Neutral,
        Outlook::HighVol,
    ];
    const RISKS: [RiskTolerance; 3] = [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Aggressive,
    ];

    #[test]
    fn every_cell_is_populated_and_deterministic() {
        for outlook in OUTLOOKS {
            for risk in RISKS {
                let a = recommend(outlook, risk);
                let b = recommend(outlook, risk);
                assert!(!a.is_empty());
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn every_key_is_reachable() {
        let mut reachable = HashSet::new();
        for outlook in OUTLOOKS {
            for risk in RISKS {
                reachable.extend(recommend(outlook, risk).iter().copied());
            }
        }
        for key in StrategyKey::ALL {
            assert!(reachable.contains(&key), "{key} is never recommended");
        }
    }

    #[test]
    fn unbounded_loss_shapes_need_aggressive_risk() {
        for outlook in OUTLOOKS {
            for risk in [RiskTolerance::Conservative, RiskTolerance::Moderate] {
                for key in recommend(outlook, risk) {
                    assert_ne!(
                        metadata(*key).max_loss_kind,
                        BoundKind::Unbounded,
                        "{key} has unbounded loss but is recommended for {risk:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn key_string_round_trip() {
        for key in StrategyKey::ALL {
            assert_eq!(key.as_str().parse::<StrategyKey>().unwrap(), key);
        }
        assert!("iron_turtle".parse::<StrategyKey>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&StrategyKey::BearCallSpread).unwrap();
        assert_eq!(json, "\"bear_call_spread\"");
    }

    #[test]
    fn complexity_ordering() {
        assert!(Complexity::Easy < Complexity::Moderate);
        assert!(Complexity::Moderate < Complexity::Complex);
    }

    #[test]
    fn metadata_matches_template_leg_count() {
        use strat_core::types::MarketContext;

        use crate::analytical::BlackScholes;

        let ctx = MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap();
        let pricer =
            BlackScholes::new(ctx.spot, ctx.risk_free_rate, ctx.implied_vol).unwrap();
        for key in StrategyKey::ALL {
            let legs = build_legs(key, &ctx, &pricer);
            assert_eq!(
                legs.len(),
                metadata(key).leg_count as usize,
                "leg count mismatch for {key}"
            );
        }
    }
}

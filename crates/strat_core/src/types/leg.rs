//! Option-leg value types.

use serde::{Deserialize, Serialize};

/// What a leg is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    /// A call option.
    Call,
    /// A put option.
    Put,
    /// The underlying itself (synthetic stock leg, premium 0).
    Stock,
}

/// Direction of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Long the leg.
    Buy,
    /// Short the leg.
    Sell,
}

impl Action {
    /// +1.0 for `Buy`, -1.0 for `Sell`; used to sign P&L and Greeks.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Action::Buy => 1.0,
            Action::Sell => -1.0,
        }
    }
}

/// Expiry bucket for multi-expiry strategies (calendar spreads).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryTag {
    /// The context expiry.
    Near,
    /// One month beyond the context expiry.
    Far,
}

/// One concrete leg of a multi-leg strategy.
///
/// For `Stock` legs the premium is 0 and `strike` doubles as the cost
/// basis. `expiry_tag` is `None` for single-expiry strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Call, put, or stock.
    pub kind: LegKind,
    /// Buy or sell.
    pub action: Action,
    /// Strike price (cost basis for stock legs).
    pub strike: f64,
    /// Premium paid/received per share; 0 for stock legs.
    pub premium: f64,
    /// Number of contracts (or 100-share blocks for stock legs).
    pub quantity: u32,
    /// Expiry bucket for calendar-style strategies.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expiry_tag: Option<ExpiryTag>,
}

impl OptionLeg {
    /// A single-quantity option or stock leg with no expiry tag.
    pub fn new(kind: LegKind, action: Action, strike: f64, premium: f64) -> Self {
        Self {
            kind,
            action,
            strike,
            premium,
            quantity: 1,
            expiry_tag: None,
        }
    }

    /// Sets the leg quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the expiry bucket.
    pub fn with_expiry_tag(mut self, tag: ExpiryTag) -> Self {
        self.expiry_tag = Some(tag);
        self
    }

    /// Intrinsic value of this leg at underlying price `price`.
    ///
    /// Calls pay max(0, p - K), puts max(0, K - p), stock legs p - basis
    /// (the only leg kind that can go negative).
    #[inline]
    pub fn intrinsic_at(&self, price: f64) -> f64 {
        match self.kind {
            LegKind::Call => (price - self.strike).max(0.0),
            LegKind::Put => (self.strike - price).max(0.0),
            LegKind::Stock => price - self.strike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_signs() {
        assert_eq!(Action::Buy.sign(), 1.0);
        assert_eq!(Action::Sell.sign(), -1.0);
    }

    #[test]
    fn intrinsic_values() {
        let call = OptionLeg::new(LegKind::Call, Action::Buy, 100.0, 2.0);
        assert_eq!(call.intrinsic_at(110.0), 10.0);
        assert_eq!(call.intrinsic_at(90.0), 0.0);

        let put = OptionLeg::new(LegKind::Put, Action::Sell, 100.0, 2.0);
        assert_eq!(put.intrinsic_at(90.0), 10.0);
        assert_eq!(put.intrinsic_at(110.0), 0.0);

        let stock = OptionLeg::new(LegKind::Stock, Action::Buy, 100.0, 0.0);
        assert_eq!(stock.intrinsic_at(90.0), -10.0);
        assert_eq!(stock.intrinsic_at(110.0), 10.0);
    }

    #[test]
    fn serde_snake_case_and_optional_tag() {
        let leg = OptionLeg::new(LegKind::Call, Action::Sell, 195.0, 1.8);
        let json = serde_json::to_value(&leg).unwrap();
        assert_eq!(json["kind"], "call");
        assert_eq!(json["action"], "sell");
        assert!(json.get("expiry_tag").is_none());

        let tagged = leg.with_expiry_tag(ExpiryTag::Far);
        let json = serde_json::to_value(&tagged).unwrap();
        assert_eq!(json["expiry_tag"], "far");
    }
}

//! Candidate assembly and sorting.
//!
//! Pulls the recommended keys for an outlook/risk cell, computes full
//! metrics and a payoff curve for each, and sorts by a caller-chosen
//! key. Pure over its inputs; the chosen sort order is the caller's
//! state, re-sorting an existing list is just another call.

use serde::{Deserialize, Serialize};
use strat_core::types::MarketContext;
use tracing::debug;

use crate::catalog::{self, Complexity, Outlook, RiskTolerance, StrategyKey};
use crate::error::StrategyError;
use crate::metrics::{compute_metrics, StrategyMetrics};
use crate::payoff::{self, PayoffPoint};

/// Sortable columns of the ranked result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Strategy display name, ascending.
    Name,
    /// Max profit, best first (`Unbounded` sorts before every finite win).
    MaxProfit,
    /// Max loss, smallest first (`Unbounded` sorts last).
    MaxLoss,
    /// Probability of profit, highest first.
    ProbabilityOfProfit,
    /// Risk/reward ratio, highest first.
    RiskReward,
    /// Complexity, easiest first.
    Complexity,
}

/// One fully computed strategy candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyAnalysis {
    /// Catalog key.
    pub key: StrategyKey,
    /// Display name.
    pub name: &'static str,
    /// Management complexity.
    pub complexity: Complexity,
    /// Closed-form metrics.
    pub metrics: StrategyMetrics,
    /// Expiration payoff curve centred on spot.
    pub payoff: Vec<PayoffPoint>,
}

/// Computes and ranks every recommended strategy for the given cell.
///
/// # Errors
/// Forwards any [`StrategyError`] from metric computation; the result is
/// all-or-nothing, a single failing candidate fails the whole call.
///
/// # Examples
/// ```
/// use strat_core::types::MarketContext;
/// use strat_engine::catalog::{Outlook, RiskTolerance};
/// use strat_engine::ranker::{rank, SortKey};
///
/// let ctx = MarketContext::new("AAPL", 185.50, 0.25, 30, 1).unwrap();
/// let ranked = rank(&ctx, Outlook::HighVol, RiskTolerance::Moderate, SortKey::MaxLoss).unwrap();
///
/// // Sorted by smallest defined risk first
/// assert!(ranked.len() >= 2);
/// ```
pub fn rank(
    ctx: &MarketContext,
    outlook: Outlook,
    risk: RiskTolerance,
    sort_key: SortKey,
) -> Result<Vec<StrategyAnalysis>, StrategyError> {
    let keys = catalog::recommend(outlook, risk);
    debug!(?outlook, ?risk, candidates = keys.len(), "ranking strategies");

    let mut results = Vec::with_capacity(keys.len());
    for &key in keys {
        let metrics = compute_metrics(key, ctx)?;
        let payoff = payoff::curve(&metrics.legs, ctx.spot, ctx.contracts);
        let def = catalog::definition(key);
        results.push(StrategyAnalysis {
            key,
            name: def.name,
            complexity: def.complexity,
            metrics,
            payoff,
        });
    }

    sort_analyses(&mut results, sort_key);
    Ok(results)
}

/// Sorts an analysis list in place by the given key.
///
/// Profit, probability, and risk/reward sort descending (best first);
/// loss, name, and complexity sort ascending.
pub fn sort_analyses(list: &mut [StrategyAnalysis], sort_key: SortKey) {
    match sort_key {
        SortKey::Name => list.sort_by(|a, b| a.name.cmp(b.name)),
        SortKey::MaxProfit => {
            list.sort_by(|a, b| b.metrics.max_profit.total_cmp(&a.metrics.max_profit))
        }
        SortKey::MaxLoss => {
            list.sort_by(|a, b| a.metrics.max_loss.total_cmp(&b.metrics.max_loss))
        }
        SortKey::ProbabilityOfProfit => list.sort_by(|a, b| {
            b.metrics
                .probability_of_profit
                .total_cmp(&a.metrics.probability_of_profit)
        }),
        SortKey::RiskReward => {
            list.sort_by(|a, b| b.metrics.risk_reward.total_cmp(&a.metrics.risk_reward))
        }
        SortKey::Complexity => list.sort_by(|a, b| a.complexity.cmp(&b.complexity)),
    }
}

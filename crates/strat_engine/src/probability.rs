//! Probability-of-profit estimation.
//!
//! A deliberate approximation: the breakeven distance is converted to a
//! z-score with `z = (breakeven/spot - 1) / (σ√T)` and pushed through the
//! standard normal CDF. This treats the simple return as normal rather
//! than modelling the full lognormal terminal distribution, which is
//! accurate enough for ranking strategies at dashboard granularity.

use strat_core::math::distributions::norm_cdf;

use crate::catalog::StrategyKey;

/// When breakevens are absent or don't match the region shape, report a
/// coin flip rather than failing.
const FALLBACK_POP: f64 = 50.0;

/// Where a strategy makes money relative to its breakevens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitRegion {
    /// Profits above a single breakeven (e.g. long call).
    Above,
    /// Profits below a single breakeven (e.g. long put).
    Below,
    /// Profits between two breakevens (e.g. iron condor).
    Between,
    /// Profits beyond two breakevens (e.g. long straddle).
    Outside,
}

/// The profit region for one catalog key.
pub fn profit_region(key: StrategyKey) -> ProfitRegion {
    use StrategyKey::*;
    match key {
        LongCall | CoveredCall | Collar | CallSpread | SyntheticLong | ProtectivePut => {
            ProfitRegion::Above
        }
        LongPut | PutSpread | BearCallSpread => ProfitRegion::Below,
        IronCondor | IronButterfly | ShortStraddle | ShortStrangle | RatioSpread
        | CalendarSpread => ProfitRegion::Between,
        Straddle | Strangle => ProfitRegion::Outside,
    }
}

/// Estimated probability of profit at expiration, in [0, 100].
///
/// `breakevens` must be sorted ascending. One breakeven uses the single
/// tail matching the region; two breakevens use the contained or outside
/// mass. Zero breakevens, a region/count mismatch, or degenerate
/// `σ√T` all fall back to 50.
pub fn estimate(
    region: ProfitRegion,
    breakevens: &[f64],
    spot: f64,
    sigma: f64,
    years: f64,
) -> f64 {
    let denom = sigma * years.sqrt();
    if !(denom > 0.0) || !(spot > 0.0) {
        return FALLBACK_POP;
    }

    let z = |breakeven: f64| (breakeven / spot - 1.0) / denom;

    let pop = match (breakevens, region) {
        ([b], ProfitRegion::Above) => 100.0 * (1.0 - norm_cdf(z(*b))),
        ([b], ProfitRegion::Below) => 100.0 * norm_cdf(z(*b)),
        ([lower, upper], ProfitRegion::Between) => {
            100.0 * (norm_cdf(z(*upper)) - norm_cdf(z(*lower)))
        }
        ([lower, upper], ProfitRegion::Outside) => {
            100.0 * ((1.0 - norm_cdf(z(*upper))) + norm_cdf(z(*lower)))
        }
        _ => FALLBACK_POP,
    };

    pop.clamp(0.0, 100.0)
}

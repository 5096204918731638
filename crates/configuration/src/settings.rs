use core_types::{BonusRule, RevenueRule};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: Analysis,
    pub strategies: Strategies,
}

/// Contains parameters for the report itself, independent of any strategy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Analysis {
    /// How many of a seller's best-selling products appear in the report.
    pub top_products_limit: usize,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
        }
    }
}

/// Selects the active strategies and carries their parameter sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Strategies {
    /// Which revenue formula the aggregator applies to each line item.
    pub revenue_rule: RevenueRule,
    /// Which bonus formula the ranker applies to each seller.
    pub bonus_rule: BonusRule,
    pub profit_rank_bonus: ProfitRankBonusParams,
}

impl Default for Strategies {
    fn default() -> Self {
        Self {
            revenue_rule: RevenueRule::Simple,
            bonus_rule: BonusRule::ProfitRank,
            profit_rank_bonus: ProfitRankBonusParams::default(),
        }
    }
}

/// Parameters for the profit-ranked bonus strategy.
///
/// The defaults encode the documented payout policy: 15% of profit for the
/// top seller, 10% for second and third place, nothing for last place, and
/// 5% for everyone in between.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfitRankBonusParams {
    /// Fraction of profit paid to the seller ranked first.
    pub first_place_rate: Decimal,
    /// Fraction of profit paid to sellers ranked second or third.
    pub podium_rate: Decimal,
    /// Fraction of profit paid to every other seller except last place.
    pub default_rate: Decimal,
}

impl Default for ProfitRankBonusParams {
    fn default() -> Self {
        Self {
            first_place_rate: dec!(0.15),
            podium_rate: dec!(0.10),
            default_rate: dec!(0.05),
        }
    }
}

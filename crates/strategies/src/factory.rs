use crate::error::StrategyError;
use crate::profit_rank_bonus::ProfitRankBonus;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::Config;
use core_types::{BonusRule, RevenueRule};

/// Creates a revenue strategy instance for the given rule.
///
/// The match is exhaustive: the compiler will error if a new `RevenueRule`
/// is added but not handled here.
pub fn create_revenue_strategy(
    rule: RevenueRule,
    _config: &Config,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    match rule {
        RevenueRule::Simple => Ok(Box::new(SimpleRevenue::new())),
    }
}

/// Creates a bonus strategy instance for the given rule, with its
/// parameters taken from the provided configuration.
pub fn create_bonus_strategy(
    rule: BonusRule,
    config: &Config,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    match rule {
        BonusRule::ProfitRank => {
            let params = config.strategies.profit_rank_bonus.clone();
            Ok(Box::new(ProfitRankBonus::new(params)?))
        }
    }
}

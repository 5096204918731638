use crate::BonusStrategy;
use crate::error::StrategyError;
use configuration::ProfitRankBonusParams;
use core_types::SellerTotals;
use rust_decimal::Decimal;

/// The tiered, rank-driven bonus formula.
///
/// Payout is a fraction of the seller's accumulated profit, chosen by the
/// seller's position in the profit ranking. Branches are evaluated in order
/// and the first match wins: first place, then second/third, then last
/// place, then everyone else. With a single seller, rank 0 and last place
/// coincide and the first-place branch takes precedence.
pub struct ProfitRankBonus {
    params: ProfitRankBonusParams,
}

impl ProfitRankBonus {
    /// Creates a new `ProfitRankBonus` with the given tier rates.
    ///
    /// It performs validation to ensure the rates are logical.
    pub fn new(params: ProfitRankBonusParams) -> Result<Self, StrategyError> {
        if params.first_place_rate < Decimal::ZERO
            || params.podium_rate < Decimal::ZERO
            || params.default_rate < Decimal::ZERO
        {
            return Err(StrategyError::InvalidParameters(
                "Bonus tier rates must not be negative".to_string(),
            ));
        }

        Ok(Self { params })
    }
}

impl Default for ProfitRankBonus {
    /// The documented payout policy; default rates are always valid, so no
    /// validation is needed here.
    fn default() -> Self {
        Self {
            params: ProfitRankBonusParams::default(),
        }
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn rank_bonus(
        &self,
        rank: usize,
        total: usize,
        seller: &SellerTotals,
    ) -> Result<Decimal, StrategyError> {
        let rate = if rank == 0 {
            self.params.first_place_rate
        } else if rank == 1 || rank == 2 {
            self.params.podium_rate
        } else if rank + 1 == total {
            return Ok(Decimal::ZERO);
        } else {
            self.params.default_rate
        };

        let bonus = seller.profit * rate;
        tracing::debug!(
            "ProfitRankBonus: seller {} rank {}/{} -> bonus {}",
            seller.id,
            rank,
            total,
            bonus
        );
        Ok(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seller_with_profit(profit: Decimal) -> SellerTotals {
        SellerTotals {
            id: "S1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            revenue: dec!(1000),
            profit,
            sales_count: 4,
        }
    }

    fn default_strategy() -> ProfitRankBonus {
        ProfitRankBonus::new(ProfitRankBonusParams::default()).unwrap()
    }

    #[test]
    fn first_place_earns_fifteen_percent_of_profit() {
        let bonus = default_strategy()
            .rank_bonus(0, 5, &seller_with_profit(dec!(200)))
            .unwrap();
        assert_eq!(bonus, dec!(30));
    }

    #[test]
    fn second_and_third_place_earn_ten_percent() {
        let strategy = default_strategy();
        let seller = seller_with_profit(dec!(200));
        assert_eq!(strategy.rank_bonus(1, 5, &seller).unwrap(), dec!(20));
        assert_eq!(strategy.rank_bonus(2, 5, &seller).unwrap(), dec!(20));
    }

    #[test]
    fn last_place_earns_nothing() {
        let bonus = default_strategy()
            .rank_bonus(4, 5, &seller_with_profit(dec!(200)))
            .unwrap();
        assert_eq!(bonus, Decimal::ZERO);
    }

    #[test]
    fn middle_ranks_earn_five_percent() {
        let bonus = default_strategy()
            .rank_bonus(3, 5, &seller_with_profit(dec!(200)))
            .unwrap();
        assert_eq!(bonus, dec!(10));
    }

    // A single seller is both first and last; the first-place branch wins.
    #[test]
    fn sole_seller_is_paid_as_first_place() {
        let bonus = default_strategy()
            .rank_bonus(0, 1, &seller_with_profit(dec!(30)))
            .unwrap();
        assert_eq!(bonus, dec!(4.5));
    }

    // With three sellers the podium branch fires before the last-place
    // branch, so rank 2 is still paid the podium rate.
    #[test]
    fn third_of_three_is_paid_podium_rate_not_zero() {
        let bonus = default_strategy()
            .rank_bonus(2, 3, &seller_with_profit(dec!(100)))
            .unwrap();
        assert_eq!(bonus, dec!(10));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let params = ProfitRankBonusParams {
            first_place_rate: dec!(-0.1),
            ..ProfitRankBonusParams::default()
        };
        assert!(matches!(
            ProfitRankBonus::new(params),
            Err(StrategyError::InvalidParameters(_))
        ));
    }

    // A losing seller in first place gets a negative bonus; the formula is
    // a straight fraction of profit, whatever its sign.
    #[test]
    fn negative_profit_yields_negative_bonus() {
        let bonus = default_strategy()
            .rank_bonus(0, 5, &seller_with_profit(dec!(-40)))
            .unwrap();
        assert_eq!(bonus, dec!(-6));
    }
}

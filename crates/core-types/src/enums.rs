use serde::{Deserialize, Serialize};

/// Identifies which revenue formula the pipeline should apply per line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueRule {
    /// Discounted sale price: `sale_price * quantity * (1 - discount / 100)`.
    Simple,
}

/// Identifies which bonus formula the pipeline should apply per ranked seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusRule {
    /// Tiered payout driven by the seller's position in the profit ranking.
    ProfitRank,
}

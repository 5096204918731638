//! # Salesboard Strategy Library
//!
//! This crate contains the pluggable business formulas for the sales
//! analytics pipeline. It defines the `RevenueStrategy` and `BonusStrategy`
//! traits and provides the built-in implementations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   datasets, files, or output formatting. It depends only on `core-types`
//!   and `configuration`.
//! - **Strategy Agnostic Pipeline:** By using the two traits, the analytics
//!   engine can apply any revenue or bonus formula without knowing its
//!   internal details.
//! - **Extensibility:** Adding a formula involves creating a new module,
//!   implementing the trait, and adding it to the rule enum and `factory`.
//!
//! ## Public API
//!
//! The primary public components are:
//! - `RevenueStrategy` / `BonusStrategy`: the traits all formulas implement.
//! - `create_revenue_strategy` / `create_bonus_strategy`: factory functions.
//! - The concrete strategy structs themselves (e.g., `SimpleRevenue`).

// Declare all the modules that constitute this crate.
pub mod error;
pub mod factory;
pub mod profit_rank_bonus;
pub mod simple_revenue;

// Re-export the key components to create a clean, public-facing API.
pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use profit_rank_bonus::ProfitRankBonus;
pub use simple_revenue::SimpleRevenue;

// Re-export the rule identifiers from core_types.
pub use core_types::{BonusRule, RevenueRule};

use core_types::{LineItem, Product, SellerTotals};
use rust_decimal::Decimal;

/// The formula that turns one line item into a revenue amount.
///
/// The aggregator calls this once per line item with the raw item and the
/// product it resolved from the catalog. Implementations must be
/// deterministic and free of side effects as far as the pipeline can
/// observe; the returned amount feeds directly into the seller's profit.
///
/// The `Send + Sync` bounds allow a strategy instance to be shared if a
/// caller ever partitions the aggregation across threads.
pub trait RevenueStrategy: Send + Sync {
    fn item_revenue(&self, item: &LineItem, product: &Product) -> Result<Decimal, StrategyError>;
}

/// The formula that assigns a bonus to one ranked seller.
///
/// The ranker calls this once per seller after sorting by profit, passing
/// the seller's zero-based `rank`, the `total` number of sellers, and a
/// read-only view of the seller's accumulated totals.
pub trait BonusStrategy: Send + Sync {
    fn rank_bonus(
        &self,
        rank: usize,
        total: usize,
        seller: &SellerTotals,
    ) -> Result<Decimal, StrategyError>;
}

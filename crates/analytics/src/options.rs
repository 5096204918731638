use strategies::{BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue};

/// The options bundle handed to the engine alongside the dataset.
///
/// The two strategy slots are deliberately optional: the engine validates
/// their presence up front and reports a missing one as a distinct error,
/// rather than making absence unrepresentable. `Default` wires in the
/// built-in formulas (`SimpleRevenue`, `ProfitRankBonus` with the
/// documented tier rates) and a top-products limit of 10.
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
    /// How many of a seller's best-selling products appear in the report.
    pub top_products_limit: usize,
}

impl AnalysisOptions {
    pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

    /// Creates an options bundle with explicit strategies and the default
    /// top-products limit.
    pub fn new(revenue: Box<dyn RevenueStrategy>, bonus: Box<dyn BonusStrategy>) -> Self {
        Self {
            calculate_revenue: Some(revenue),
            calculate_bonus: Some(bonus),
            top_products_limit: Self::DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(
            Box::new(SimpleRevenue::new()),
            Box::new(ProfitRankBonus::default()),
        )
    }
}

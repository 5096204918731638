use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use crate::report::{ProductQuantity, SellerReport};
use core_types::{Product, SalesData, SellerTotals};
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use strategies::{BonusStrategy, RevenueStrategy};

/// A stateless calculator for deriving seller performance from sales data.
///
/// One call to [`analyze`](Self::analyze) runs the full pipeline: validate,
/// index, aggregate, rank, report. The engine holds no state between calls;
/// all intermediate accumulators live and die inside a single invocation.
#[derive(Debug, Default)]
pub struct SalesAnalyticsEngine {}

/// Mutable per-seller running totals, owned by one pipeline invocation.
///
/// Created zeroed by the indexer, accrued onto by the aggregator, assigned a
/// bonus by the ranker, and consumed by the reporter. Never exposed outside
/// this module.
struct SellerAccumulator {
    totals: SellerTotals,
    /// sku -> number of line items referencing it (NOT summed quantities).
    /// Insertion-ordered so that top-product ties break by first appearance.
    products_sold: IndexMap<String, u64>,
    bonus: Decimal,
}

impl SalesAnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for analyzing sales data.
    ///
    /// # Arguments
    ///
    /// * `data` - The complete dataset: sellers, product catalog, purchase records.
    /// * `options` - The strategy bundle plus report parameters.
    ///
    /// # Returns
    ///
    /// A `Result` containing one `SellerReport` per seller, ordered by
    /// descending profit, or an `AnalyticsError`. Validation failures are
    /// reported before any aggregation work begins; no partial results are
    /// ever returned.
    pub fn analyze(
        &self,
        data: &SalesData,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        let (revenue_strategy, bonus_strategy) = self.validate(data, options)?;

        let (mut accumulators, seller_index) = self.index_sellers(data);
        let product_index = self.index_products(data);

        self.aggregate(
            data,
            &seller_index,
            &product_index,
            &mut accumulators,
            revenue_strategy,
        )?;
        self.rank_and_assign_bonuses(&mut accumulators, bonus_strategy)?;

        Ok(self.finalize(accumulators, options.top_products_limit))
    }

    /// Checks the dataset shape and the presence of both strategies.
    ///
    /// Pure check, no side effects. Resolves the two optional strategy slots
    /// into plain trait references for the rest of the pipeline.
    fn validate<'a>(
        &self,
        data: &SalesData,
        options: &'a AnalysisOptions,
    ) -> Result<(&'a dyn RevenueStrategy, &'a dyn BonusStrategy), AnalyticsError> {
        if data.sellers.is_empty() {
            return Err(AnalyticsError::InvalidData(
                "'sellers' must not be empty".to_string(),
            ));
        }
        if data.products.is_empty() {
            return Err(AnalyticsError::InvalidData(
                "'products' must not be empty".to_string(),
            ));
        }
        if data.purchase_records.is_empty() {
            return Err(AnalyticsError::InvalidData(
                "'purchase_records' must not be empty".to_string(),
            ));
        }

        let revenue_strategy = options.calculate_revenue.as_deref().ok_or_else(|| {
            AnalyticsError::InvalidStrategy("no revenue strategy supplied".to_string())
        })?;
        let bonus_strategy = options.calculate_bonus.as_deref().ok_or_else(|| {
            AnalyticsError::InvalidStrategy("no bonus strategy supplied".to_string())
        })?;

        Ok((revenue_strategy, bonus_strategy))
    }

    /// Builds one zeroed accumulator per seller, in input order, plus the
    /// `seller_id -> accumulator position` index.
    ///
    /// Duplicate ids are not rejected: the index entry is overwritten, so
    /// all of a duplicated id's purchases accrue to its last occurrence
    /// (last-write-wins).
    fn index_sellers(&self, data: &SalesData) -> (Vec<SellerAccumulator>, HashMap<String, usize>) {
        let accumulators: Vec<SellerAccumulator> = data
            .sellers
            .iter()
            .map(|seller| SellerAccumulator {
                totals: SellerTotals::zeroed(seller),
                products_sold: IndexMap::new(),
                bonus: Decimal::ZERO,
            })
            .collect();

        let mut seller_index = HashMap::with_capacity(accumulators.len());
        for (position, accumulator) in accumulators.iter().enumerate() {
            seller_index.insert(accumulator.totals.id.clone(), position);
        }

        (accumulators, seller_index)
    }

    /// Builds the `sku -> product` index in a single pass over the catalog.
    /// Duplicate skus follow the same last-write-wins rule as seller ids.
    fn index_products<'a>(&self, data: &'a SalesData) -> HashMap<&'a str, &'a Product> {
        let mut product_index = HashMap::with_capacity(data.products.len());
        for product in &data.products {
            product_index.insert(product.sku.as_str(), product);
        }
        product_index
    }

    /// Walks every purchase record and its line items, accruing revenue,
    /// profit, sales count, and per-sku sold counts onto each seller.
    ///
    /// Iteration follows input order (records, then items within a record)
    /// so results are reproducible run to run.
    fn aggregate(
        &self,
        data: &SalesData,
        seller_index: &HashMap<String, usize>,
        product_index: &HashMap<&str, &Product>,
        accumulators: &mut [SellerAccumulator],
        revenue_strategy: &dyn RevenueStrategy,
    ) -> Result<(), AnalyticsError> {
        for record in &data.purchase_records {
            let position = *seller_index
                .get(record.seller_id.as_str())
                .ok_or_else(|| AnalyticsError::UnknownSeller(record.seller_id.clone()))?;
            let seller = &mut accumulators[position];

            // Once per receipt, not per item.
            seller.totals.sales_count += 1;
            seller.totals.revenue += record.total_amount;

            for item in &record.items {
                let product = *product_index
                    .get(item.sku.as_str())
                    .ok_or_else(|| AnalyticsError::UnknownSku(item.sku.clone()))?;

                let cost = product.purchase_price * Decimal::from(item.quantity);
                let item_revenue = revenue_strategy.item_revenue(item, product)?;
                // May pull the total down when an item sells below cost.
                seller.totals.profit += item_revenue - cost;

                // Counts line items referencing the sku, not summed quantities.
                *seller.products_sold.entry(item.sku.clone()).or_insert(0) += 1;
            }
        }

        tracing::debug!(
            "Aggregated {} purchase records across {} sellers",
            data.purchase_records.len(),
            accumulators.len()
        );
        Ok(())
    }

    /// Sorts sellers by descending profit, then asks the bonus strategy for
    /// each seller's payout given its rank.
    ///
    /// The sort is stable: sellers with equal profit keep their input order.
    fn rank_and_assign_bonuses(
        &self,
        accumulators: &mut [SellerAccumulator],
        bonus_strategy: &dyn BonusStrategy,
    ) -> Result<(), AnalyticsError> {
        accumulators.sort_by(|a, b| b.totals.profit.cmp(&a.totals.profit));

        let total = accumulators.len();
        for (rank, seller) in accumulators.iter_mut().enumerate() {
            seller.bonus = bonus_strategy.rank_bonus(rank, total, &seller.totals)?;
        }

        Ok(())
    }

    /// Converts the ranked accumulators into immutable report records:
    /// derives each seller's top products and rounds the monetary fields.
    fn finalize(
        &self,
        accumulators: Vec<SellerAccumulator>,
        top_products_limit: usize,
    ) -> Vec<SellerReport> {
        accumulators
            .into_iter()
            .map(|seller| {
                let name = seller.totals.full_name();

                let mut top_products: Vec<ProductQuantity> = seller
                    .products_sold
                    .into_iter()
                    .map(|(sku, quantity)| ProductQuantity { sku, quantity })
                    .collect();
                // Stable sort: equal counts keep first-insertion order.
                top_products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
                top_products.truncate(top_products_limit);

                SellerReport {
                    seller_id: seller.totals.id,
                    name,
                    revenue: round_currency(seller.totals.revenue),
                    profit: round_currency(seller.totals.profit),
                    sales_count: seller.totals.sales_count,
                    top_products,
                    bonus: round_currency(seller.bonus),
                }
            })
            .collect()
    }
}

/// Rounds a monetary amount to two decimal places, half away from zero.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

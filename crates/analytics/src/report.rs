use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of a seller's top-products list: a sku and how many line items
/// referenced it across the seller's purchase records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub sku: String,
    pub quantity: u64,
}

/// The final, immutable performance record for one seller.
///
/// This struct is the output of the `SalesAnalyticsEngine` and serves as the
/// data transfer object for results throughout the application. `revenue`,
/// `profit`, and `bonus` are rounded to exactly two decimal places;
/// `sales_count` is an exact integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<ProductQuantity>,
    pub bonus: Decimal,
}

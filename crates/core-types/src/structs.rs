use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A seller as it appears in the source dataset. Immutable input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A product card from the catalog. Immutable input record.
///
/// Only `sku` and `purchase_price` matter to the analytics pipeline;
/// `name` and `category` are descriptive and carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub purchase_price: Decimal,
}

/// One product entry within a purchase record.
///
/// `discount` is a percentage in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub sale_price: Decimal,
    pub discount: Decimal,
    pub quantity: u32,
}

/// A single receipt: one seller, a total amount, and the items sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// Descriptive only; the pipeline never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,
    pub total_amount: Decimal,
    pub items: Vec<LineItem>,
}

/// The complete in-memory dataset the pipeline operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// A read-only view of one seller's running totals.
///
/// This is what a `BonusStrategy` sees when the ranker asks it for a payout:
/// identity plus the accumulated figures, never the pipeline's internal
/// accumulator itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerTotals {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
}

impl SellerTotals {
    /// Creates a zeroed totals record for the given seller.
    pub fn zeroed(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            first_name: seller.first_name.clone(),
            last_name: seller.last_name.clone(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
        }
    }

    /// The seller's display name, `"{first_name} {last_name}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

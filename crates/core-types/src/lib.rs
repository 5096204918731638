pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusRule, RevenueRule};
pub use structs::{LineItem, Product, PurchaseRecord, SalesData, Seller, SellerTotals};

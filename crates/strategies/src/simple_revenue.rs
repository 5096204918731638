use crate::RevenueStrategy;
use crate::error::StrategyError;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The discounted sale-price revenue formula.
///
/// Revenue for a line item is the sale price times quantity, reduced by the
/// item's percentage discount: `sale_price * quantity * (1 - discount/100)`.
/// The product card is accepted for signature compatibility but this formula
/// never reads it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn item_revenue(&self, item: &LineItem, _product: &Product) -> Result<Decimal, StrategyError> {
        let discount_factor = Decimal::ONE - item.discount / dec!(100);
        let revenue = item.sale_price * Decimal::from(item.quantity) * discount_factor;
        tracing::trace!(
            "SimpleRevenue: sku {} qty {} discount {}% -> {}",
            item.sku,
            item.quantity,
            item.discount,
            revenue
        );
        Ok(revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sale_price: Decimal, discount: Decimal, quantity: u32) -> LineItem {
        LineItem {
            sku: "SKU_001".to_string(),
            sale_price,
            discount,
            quantity,
        }
    }

    fn any_product() -> Product {
        Product {
            sku: "SKU_001".to_string(),
            name: String::new(),
            category: String::new(),
            purchase_price: dec!(10),
        }
    }

    #[test]
    fn undiscounted_item_yields_price_times_quantity() {
        let revenue = SimpleRevenue::new()
            .item_revenue(&item(dec!(25), dec!(0), 2), &any_product())
            .unwrap();
        assert_eq!(revenue, dec!(50));
    }

    #[test]
    fn discount_is_a_percentage_of_the_gross_amount() {
        let revenue = SimpleRevenue::new()
            .item_revenue(&item(dec!(100), dec!(15), 3), &any_product())
            .unwrap();
        assert_eq!(revenue, dec!(255));
    }

    #[test]
    fn full_discount_yields_zero_revenue() {
        let revenue = SimpleRevenue::new()
            .item_revenue(&item(dec!(40), dec!(100), 5), &any_product())
            .unwrap();
        assert_eq!(revenue, Decimal::ZERO);
    }
}

//! End-to-end run of the pipeline over a JSON dataset, the same shape the
//! application feeds it.

use analytics::{AnalysisOptions, SalesAnalyticsEngine};
use core_types::SalesData;
use rust_decimal_macros::dec;

const DATASET: &str = r#"{
    "sellers": [
        { "id": "seller_1", "first_name": "Ivan", "last_name": "Petrov" },
        { "id": "seller_2", "first_name": "Maria", "last_name": "Ivanova" },
        { "id": "seller_3", "first_name": "Oleg", "last_name": "Sidorov" }
    ],
    "products": [
        { "sku": "SKU_001", "name": "Kettle", "category": "kitchen", "purchase_price": 12.50 },
        { "sku": "SKU_002", "name": "Toaster", "category": "kitchen", "purchase_price": 20.00 },
        { "sku": "SKU_003", "name": "Lamp", "category": "home", "purchase_price": 7.00 }
    ],
    "purchase_records": [
        {
            "seller_id": "seller_1",
            "receipt_date": "2024-03-01",
            "total_amount": 100.00,
            "items": [
                { "sku": "SKU_001", "sale_price": 25.00, "discount": 0, "quantity": 2 },
                { "sku": "SKU_002", "sale_price": 50.00, "discount": 0, "quantity": 1 }
            ]
        },
        {
            "seller_id": "seller_2",
            "receipt_date": "2024-03-01",
            "total_amount": 45.00,
            "items": [
                { "sku": "SKU_003", "sale_price": 15.00, "discount": 0, "quantity": 3 }
            ]
        },
        {
            "seller_id": "seller_3",
            "receipt_date": "2024-03-02",
            "total_amount": 27.00,
            "items": [
                { "sku": "SKU_003", "sale_price": 15.00, "discount": 10, "quantity": 2 }
            ]
        },
        {
            "seller_id": "seller_1",
            "receipt_date": "2024-03-02",
            "total_amount": 25.00,
            "items": [
                { "sku": "SKU_001", "sale_price": 25.00, "discount": 0, "quantity": 1 }
            ]
        }
    ]
}"#;

#[test]
fn analyzes_a_json_dataset_end_to_end() {
    let data: SalesData = serde_json::from_str(DATASET).unwrap();
    let reports = SalesAnalyticsEngine::new()
        .analyze(&data, &AnalysisOptions::default())
        .unwrap();

    assert_eq!(reports.len(), 3);

    // seller_1: revenue 125, profit (50-25) + (50-20) + (25-12.5) = 67.50,
    // two receipts, SKU_001 on two separate lines.
    let first = &reports[0];
    assert_eq!(first.seller_id, "seller_1");
    assert_eq!(first.name, "Ivan Petrov");
    assert_eq!(first.revenue, dec!(125.00));
    assert_eq!(first.profit, dec!(67.50));
    assert_eq!(first.sales_count, 2);
    assert_eq!(first.top_products[0].sku, "SKU_001");
    assert_eq!(first.top_products[0].quantity, 2);
    assert_eq!(first.bonus, dec!(10.13)); // 67.50 * 0.15 = 10.125, rounded up

    // seller_2: profit 45 - 21 = 24, second place, 10%.
    let second = &reports[1];
    assert_eq!(second.seller_id, "seller_2");
    assert_eq!(second.profit, dec!(24.00));
    assert_eq!(second.bonus, dec!(2.40));

    // seller_3: profit 27 - 14 = 13, third of three. The podium branch
    // fires before the last-place branch, so the payout is 10%, not zero.
    let third = &reports[2];
    assert_eq!(third.seller_id, "seller_3");
    assert_eq!(third.profit, dec!(13.00));
    assert_eq!(third.bonus, dec!(1.30));

    let revenue_total: rust_decimal::Decimal = reports.iter().map(|r| r.revenue).sum();
    assert_eq!(revenue_total, dec!(197.00));
}

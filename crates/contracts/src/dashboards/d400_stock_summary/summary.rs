use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::a002_inventory_item::InventoryItem;
use crate::domain::a004_stock_threshold::ThresholdBook;

/// Bucket name for items without a brand.
pub const UNBRANDED: &str = "Unbranded";

/// One bar of the "stock by brand" chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandStockSummary {
    pub brand: String,
    pub total_quantity: u64,
    pub item_count: usize,
    pub low_stock_count: usize,
}

impl BrandStockSummary {
    /// Bar width relative to the largest brand, 0..=100.
    pub fn share_of(&self, max_quantity: u64) -> u8 {
        if max_quantity == 0 {
            return 0;
        }
        ((self.total_quantity.min(max_quantity) * 100) / max_quantity) as u8
    }
}

/// Groups items by brand (trimmed, case-insensitive; the first spelling wins)
/// and sorts by total quantity descending, then brand name.
pub fn summarize_by_brand(items: &[InventoryItem], book: &ThresholdBook) -> Vec<BrandStockSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<BrandStockSummary> = Vec::new();

    for item in items {
        let brand = item
            .brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(UNBRANDED);
        let slot = *index.entry(brand.to_lowercase()).or_insert_with(|| {
            rows.push(BrandStockSummary {
                brand: brand.to_string(),
                total_quantity: 0,
                item_count: 0,
                low_stock_count: 0,
            });
            rows.len() - 1
        });
        let row = &mut rows[slot];
        row.total_quantity += u64::from(item.quantity);
        row.item_count += 1;
        if book.is_low_stock(item) {
            row.low_stock_count += 1;
        }
    }

    rows.sort_by(|a, b| {
        b.total_quantity
            .cmp(&a.total_quantity)
            .then_with(|| a.brand.to_lowercase().cmp(&b.brand.to_lowercase()))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_stock_threshold::{BrandThreshold, ThresholdSettings};

    fn item(id: &str, brand: Option<&str>, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            brand: brand.map(str::to_string),
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_groups_and_sorts() {
        let book = ThresholdBook::new(
            &ThresholdSettings {
                global_threshold: Some(10),
            },
            &[BrandThreshold {
                id: None,
                brand: "Adani".to_string(),
                threshold: 50,
            }],
            &[],
        );
        let items = vec![
            item("1", Some("Waaree"), 40),
            item("2", Some("adani "), 30),
            item("3", Some("Adani"), 70),
            item("4", None, 5),
            item("5", Some("waaree"), 60),
            item("6", Some(""), 3),
        ];

        let rows = summarize_by_brand(&items, &book);
        let names: Vec<&str> = rows.iter().map(|r| r.brand.as_str()).collect();
        // Adani and Waaree tie on 100; the name breaks the tie
        assert_eq!(names, vec!["adani", "Waaree", UNBRANDED]);

        assert_eq!(rows[0].total_quantity, 100);
        assert_eq!(rows[0].item_count, 2);
        assert_eq!(rows[0].low_stock_count, 1);
        assert_eq!(rows[1].low_stock_count, 0);
        assert_eq!(rows[2].item_count, 2);
        assert_eq!(rows[2].low_stock_count, 2);
    }

    #[test]
    fn test_share_of() {
        let row = BrandStockSummary {
            brand: "Waaree".to_string(),
            total_quantity: 25,
            item_count: 1,
            low_stock_count: 0,
        };
        assert_eq!(row.share_of(100), 25);
        assert_eq!(row.share_of(0), 0);
        assert!(summarize_by_brand(&[], &ThresholdBook::default()).is_empty());
    }
}

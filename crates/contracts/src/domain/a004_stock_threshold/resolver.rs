//! Low-stock threshold resolution: product overrides brand overrides global.

use std::collections::HashMap;

use super::aggregate::{BrandThreshold, ProductThreshold, ThresholdSettings};
use crate::domain::a002_inventory_item::InventoryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSource {
    Product,
    Brand,
    Global,
}

impl ThresholdSource {
    pub fn label(&self) -> &'static str {
        match self {
            ThresholdSource::Product => "Product",
            ThresholdSource::Brand => "Brand",
            ThresholdSource::Global => "Global",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedThreshold {
    pub value: u32,
    pub source: ThresholdSource,
}

#[derive(Debug, Clone, Default)]
pub struct ThresholdBook {
    global: Option<u32>,
    by_brand: HashMap<String, u32>,
    by_product: HashMap<String, u32>,
}

fn brand_key(brand: &str) -> String {
    brand.trim().to_lowercase()
}

impl ThresholdBook {
    pub fn new(
        settings: &ThresholdSettings,
        brands: &[BrandThreshold],
        products: &[ProductThreshold],
    ) -> Self {
        Self {
            global: settings.global_threshold,
            by_brand: brands
                .iter()
                .map(|b| (brand_key(&b.brand), b.threshold))
                .collect(),
            by_product: products
                .iter()
                .map(|p| (p.item_id.clone(), p.threshold))
                .collect(),
        }
    }

    pub fn resolve(&self, item: &InventoryItem) -> Option<ResolvedThreshold> {
        if let Some(value) = self.by_product.get(&item.id) {
            return Some(ResolvedThreshold {
                value: *value,
                source: ThresholdSource::Product,
            });
        }
        if let Some(value) = item
            .brand
            .as_deref()
            .and_then(|b| self.by_brand.get(&brand_key(b)))
        {
            return Some(ResolvedThreshold {
                value: *value,
                source: ThresholdSource::Brand,
            });
        }
        self.global.map(|value| ResolvedThreshold {
            value,
            source: ThresholdSource::Global,
        })
    }

    /// An item with no threshold at any tier is never low on stock.
    pub fn is_low_stock(&self, item: &InventoryItem) -> bool {
        self.resolve(item)
            .map_or(false, |t| item.quantity <= t.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, brand: &str, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            brand: Some(brand.to_string()),
            quantity,
            ..Default::default()
        }
    }

    fn book() -> ThresholdBook {
        ThresholdBook::new(
            &ThresholdSettings {
                global_threshold: Some(10),
            },
            &[BrandThreshold {
                id: None,
                brand: "Waaree".to_string(),
                threshold: 20,
            }],
            &[ProductThreshold {
                id: None,
                item_id: "x".to_string(),
                threshold: 5,
            }],
        )
    }

    #[test]
    fn test_product_threshold_wins() {
        let book = book();
        let resolved = book.resolve(&item("x", "Waaree", 0)).unwrap();
        assert_eq!(resolved.source, ThresholdSource::Product);
        assert_eq!(resolved.value, 5);

        assert!(book.is_low_stock(&item("x", "Waaree", 5)));
        assert!(!book.is_low_stock(&item("x", "Waaree", 6)));
        assert!(!book.is_low_stock(&item("x", "Waaree", 10)));
        assert!(!book.is_low_stock(&item("x", "Waaree", 20)));
    }

    #[test]
    fn test_brand_then_global() {
        let book = book();
        let resolved = book.resolve(&item("y", " waaree ", 0)).unwrap();
        assert_eq!(resolved.source, ThresholdSource::Brand);
        assert_eq!(resolved.value, 20);

        let resolved = book.resolve(&item("z", "Adani", 0)).unwrap();
        assert_eq!(resolved.source, ThresholdSource::Global);
        assert!(book.is_low_stock(&item("z", "Adani", 10)));
        assert!(!book.is_low_stock(&item("z", "Adani", 11)));
    }

    #[test]
    fn test_product_overrides_regardless_of_other_tiers() {
        for (global, brand) in [(None, None), (Some(1), None), (Some(50), Some(100)), (None, Some(2))] {
            let book = ThresholdBook::new(
                &ThresholdSettings {
                    global_threshold: global,
                },
                &brand
                    .map(|t| {
                        vec![BrandThreshold {
                            id: None,
                            brand: "Waaree".to_string(),
                            threshold: t,
                        }]
                    })
                    .unwrap_or_default(),
                &[ProductThreshold {
                    id: None,
                    item_id: "x".to_string(),
                    threshold: 7,
                }],
            );
            assert_eq!(
                book.resolve(&item("x", "Waaree", 0)),
                Some(ResolvedThreshold {
                    value: 7,
                    source: ThresholdSource::Product
                })
            );
        }
    }

    #[test]
    fn test_no_threshold_anywhere() {
        let book = ThresholdBook::default();
        assert_eq!(book.resolve(&item("x", "Waaree", 0)), None);
        assert!(!book.is_low_stock(&item("x", "Waaree", 0)));
    }
}

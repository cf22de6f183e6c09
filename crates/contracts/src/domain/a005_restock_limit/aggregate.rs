use serde::{Deserialize, Serialize};

use crate::domain::a002_inventory_item::InventoryItem;
use crate::shared::serde_utils::u32_lenient;
use crate::shared::validation::{parse_in_range, require, require_str, FormError};

pub const MAX_RESTOCK_QUANTITY: u64 = 1_000_000;

/// Minimum/maximum order quantity of a SKU for one warehouse (state → cluster → district).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockLimit {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub state_id: Option<String>,
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub district_id: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub district_name: Option<String>,
    pub sku_code: String,
    #[serde(default, deserialize_with = "u32_lenient")]
    pub min_quantity: u32,
    #[serde(default, deserialize_with = "u32_lenient")]
    pub max_quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockStatus {
    BelowMinimum,
    WithinLimits,
    AboveMaximum,
}

impl RestockLimit {
    pub fn status_for(&self, on_hand: u32) -> RestockStatus {
        if on_hand < self.min_quantity {
            RestockStatus::BelowMinimum
        } else if on_hand > self.max_quantity {
            RestockStatus::AboveMaximum
        } else {
            RestockStatus::WithinLimits
        }
    }

    /// Quantity to order to bring stock back up to the maximum; zero when not below minimum.
    pub fn suggested_order(&self, on_hand: u32) -> u32 {
        match self.status_for(on_hand) {
            RestockStatus::BelowMinimum => self.max_quantity.saturating_sub(on_hand),
            _ => 0,
        }
    }

    /// Units of this SKU held in the limit's district, saturating at `u32::MAX`.
    pub fn on_hand(&self, items: &[InventoryItem]) -> u32 {
        let total: u64 = items
            .iter()
            .filter(|i| i.sku_code.as_deref().map(str::trim) == Some(self.sku_code.trim()))
            .filter(|i| i.district_id.is_some() && i.district_id == self.district_id)
            .map(|i| u64::from(i.quantity))
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    pub fn location_label(&self) -> String {
        [&self.state_name, &self.cluster_name, &self.district_name]
            .iter()
            .filter_map(|v| v.as_deref())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Form for creating or updating a limit; quantities are kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestockLimitDto {
    pub id: Option<String>,
    pub state_id: Option<String>,
    pub cluster_id: Option<String>,
    pub district_id: Option<String>,
    pub sku_code: String,
    pub min_quantity: String,
    pub max_quantity: String,
}

/// Wire body of `POST/PUT /inventory/restock-limits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockLimitPayload {
    pub state_id: String,
    pub cluster_id: String,
    pub district_id: String,
    pub sku_code: String,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl RestockLimitDto {
    pub fn from_limit(limit: &RestockLimit) -> Self {
        Self {
            id: Some(limit.id.clone()),
            state_id: limit.state_id.clone(),
            cluster_id: limit.cluster_id.clone(),
            district_id: limit.district_id.clone(),
            sku_code: limit.sku_code.clone(),
            min_quantity: limit.min_quantity.to_string(),
            max_quantity: limit.max_quantity.to_string(),
        }
    }

    pub fn validate(&self) -> Result<RestockLimitPayload, FormError> {
        let state_id = require(&self.state_id, "State")?;
        let cluster_id = require(&self.cluster_id, "Cluster")?;
        let district_id = require(&self.district_id, "District")?;
        let sku_code = require_str(&self.sku_code, "SKU")?;
        let min_quantity =
            parse_in_range(&self.min_quantity, "Minimum quantity", 0, MAX_RESTOCK_QUANTITY)? as u32;
        let max_quantity =
            parse_in_range(&self.max_quantity, "Maximum quantity", 1, MAX_RESTOCK_QUANTITY)? as u32;
        if min_quantity > max_quantity {
            return Err(FormError::Invalid(
                "Minimum quantity cannot exceed maximum quantity".to_string(),
            ));
        }
        Ok(RestockLimitPayload {
            state_id,
            cluster_id,
            district_id,
            sku_code,
            min_quantity,
            max_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(min: &str, max: &str) -> RestockLimitDto {
        RestockLimitDto {
            id: None,
            state_id: Some("gj".to_string()),
            cluster_id: Some("surat".to_string()),
            district_id: Some("olpad".to_string()),
            sku_code: "W-580".to_string(),
            min_quantity: min.to_string(),
            max_quantity: max.to_string(),
        }
    }

    #[test]
    fn test_validate_limits() {
        let payload = dto("10", "50").validate().unwrap();
        assert_eq!(payload.min_quantity, 10);
        assert_eq!(payload.max_quantity, 50);

        assert!(matches!(dto("60", "50").validate(), Err(FormError::Invalid(_))));
        assert!(dto("0", "0").validate().is_err());

        let mut missing = dto("1", "2");
        missing.cluster_id = None;
        assert_eq!(missing.validate(), Err(FormError::Required("Cluster")));
    }

    #[test]
    fn test_status_and_suggestion() {
        let limit = RestockLimit {
            id: "r1".to_string(),
            sku_code: "W-580".to_string(),
            min_quantity: 10,
            max_quantity: 50,
            state_name: Some("Gujarat".to_string()),
            district_name: Some("Olpad".to_string()),
            ..Default::default()
        };
        assert_eq!(limit.status_for(4), RestockStatus::BelowMinimum);
        assert_eq!(limit.suggested_order(4), 46);
        assert_eq!(limit.status_for(10), RestockStatus::WithinLimits);
        assert_eq!(limit.suggested_order(30), 0);
        assert_eq!(limit.status_for(51), RestockStatus::AboveMaximum);
        assert_eq!(limit.location_label(), "Gujarat / Olpad");

        let stock = |district: &str, quantity| InventoryItem {
            sku_code: Some("W-580".to_string()),
            district_id: Some(district.to_string()),
            quantity,
            ..Default::default()
        };
        let mut scoped = limit.clone();
        scoped.district_id = Some("olpad".to_string());
        let items = vec![stock("olpad", 3), stock("olpad", 4), stock("kamrej", 90)];
        assert_eq!(scoped.on_hand(&items), 7);
        assert_eq!(limit.on_hand(&items), 0);

        let flooded = vec![stock("olpad", u32::MAX), stock("olpad", u32::MAX)];
        assert_eq!(scoped.on_hand(&flooded), u32::MAX);

        let round = RestockLimitDto::from_limit(&limit);
        assert_eq!(round.min_quantity, "10");
    }

    #[test]
    fn test_limit_quantities_sent_as_strings() {
        let limit: RestockLimit = serde_json::from_str(
            r#"{"_id": "r7", "skuCode": "W-580", "minQuantity": "12", "maxQuantity": 40}"#,
        )
        .unwrap();
        assert_eq!(limit.min_quantity, 12);
        assert_eq!(limit.max_quantity, 40);
    }
}

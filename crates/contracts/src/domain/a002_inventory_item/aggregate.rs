use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::{opt_string_or_number, u32_lenient};

// ============================================================================
// Inventory item
// ============================================================================

/// Stock line of one SKU in one warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "skuCode", default)]
    pub sku_code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub technology: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub wattage: Option<String>,

    #[serde(rename = "productType", default)]
    pub product_type: Option<String>,

    #[serde(rename = "projectType", default)]
    pub project_type: Option<String>,

    #[serde(default, deserialize_with = "u32_lenient")]
    pub quantity: u32,

    // Warehouse location
    #[serde(rename = "stateId", default)]
    pub state_id: Option<String>,

    #[serde(rename = "clusterId", default)]
    pub cluster_id: Option<String>,

    #[serde(rename = "districtId", default)]
    pub district_id: Option<String>,

    #[serde(rename = "warehouseName", default)]
    pub warehouse_name: Option<String>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    /// "Combokit"-style display label: brand, technology and wattage joined.
    pub fn kit_label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(b) = self.brand.as_deref().filter(|b| !b.is_empty()) {
            parts.push(b.to_string());
        }
        if let Some(t) = self.technology.as_deref().filter(|t| !t.is_empty()) {
            parts.push(t.to_string());
        }
        if let Some(w) = self.wattage.as_deref().filter(|w| !w.is_empty()) {
            parts.push(format!("{} W", w));
        }
        if parts.is_empty() {
            self.name.clone().unwrap_or_default()
        } else {
            parts.join(" / ")
        }
    }

    /// Does the item sit under the given location id at any warehouse level?
    pub fn in_location(&self, ids: &[String]) -> bool {
        ids.is_empty()
            || [&self.state_id, &self.cluster_id, &self.district_id]
                .iter()
                .any(|v| v.as_ref().map_or(false, |id| ids.contains(id)))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /inventory/items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryItemDto {
    pub sku_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wattage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub quantity: u32,
    pub state_id: String,
    pub cluster_id: String,
    pub district_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_service_json() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"_id": "i1", "brand": "Waaree", "technology": "TOPCon", "wattage": 580,
                "quantity": "14", "stateId": "gj", "updatedAt": "2024-03-15T14:02:26Z"}"#,
        )
        .unwrap();
        assert_eq!(item.quantity, 14);
        assert_eq!(item.kit_label(), "Waaree / TOPCon / 580 W");
        assert!(item.updated_at.is_some());
        assert!(item.in_location(&["gj".to_string()]));
        assert!(!item.in_location(&["mh".to_string()]));
        assert!(item.in_location(&[]));
    }

    #[test]
    fn test_create_dto_is_camel_case() {
        let dto = CreateInventoryItemDto {
            sku_code: "W-580".to_string(),
            brand: "Waaree".to_string(),
            quantity: 3,
            state_id: "gj".to_string(),
            cluster_id: "surat".to_string(),
            district_id: "olpad".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["skuCode"], "W-580");
        assert_eq!(json["districtId"], "olpad");
        assert!(json.get("technology").is_none());
    }
}

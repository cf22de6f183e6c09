use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::opt_string_or_number;

// ============================================================================
// SKU master record
// ============================================================================

/// Flat SKU record from the inventory master list.
///
/// Every attribute is optional; no relationship between fields is enforced
/// by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub technology: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub wattage: Option<String>,

    #[serde(rename = "projectType", default)]
    pub project_type: Option<String>,

    #[serde(rename = "subProjectType", default)]
    pub sub_project_type: Option<String>,

    #[serde(rename = "subCategory", default)]
    pub sub_category: Option<String>,

    #[serde(rename = "productType", default)]
    pub product_type: Option<String>,

    #[serde(rename = "skuCode", default)]
    pub sku_code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

impl SkuRecord {
    /// Label used in the SKU dropdown: `"<code> - <name>"` or whichever part exists.
    pub fn display_label(&self) -> String {
        match (self.sku_code.as_deref(), self.name.as_deref()) {
            (Some(code), Some(name)) => format!("{} - {}", code, name),
            (Some(code), None) => code.to_string(),
            (None, Some(name)) => name.to_string(),
            (None, None) => String::new(),
        }
    }
}

// ============================================================================
// Reference lists
// ============================================================================

/// Project (category) type, e.g. "Residential", "Commercial".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectType {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "brandName")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_from_service_json() {
        let sku: SkuRecord = serde_json::from_str(
            r#"{"_id": "s1", "brand": "Adani", "technology": "Mono Perc", "wattage": 540,
                "projectType": "Residential", "skuCode": "AD-540-MP"}"#,
        )
        .unwrap();
        assert_eq!(sku.wattage.as_deref(), Some("540"));
        assert_eq!(sku.project_type.as_deref(), Some("Residential"));
        assert_eq!(sku.display_label(), "AD-540-MP");
        assert_eq!(sku.product_type, None);
    }
}

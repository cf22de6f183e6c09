use serde::{Deserialize, Serialize};

use crate::shared::validation::FormError;

/// Maximum threshold accepted by the settings forms.
pub const MAX_THRESHOLD: u32 = 100_000;

/// Global low-stock settings (`GET /inventory/settings`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSettings {
    #[serde(rename = "globalThreshold", default)]
    pub global_threshold: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandThreshold {
    #[serde(alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub brand: String,
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductThreshold {
    #[serde(alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub threshold: u32,
}

fn check_threshold(value: u32) -> Result<(), FormError> {
    if value == 0 || value > MAX_THRESHOLD {
        return Err(FormError::OutOfRange {
            field: "Threshold",
            min: 1,
            max: MAX_THRESHOLD as u64,
        });
    }
    Ok(())
}

impl ThresholdSettings {
    pub fn validate(&self) -> Result<(), FormError> {
        match self.global_threshold {
            Some(v) => check_threshold(v),
            None => Ok(()),
        }
    }
}

impl BrandThreshold {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.brand.trim().is_empty() {
            return Err(FormError::Required("Brand"));
        }
        check_threshold(self.threshold)
    }
}

impl ProductThreshold {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.item_id.trim().is_empty() {
            return Err(FormError::Required("Product"));
        }
        check_threshold(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_thresholds() {
        assert!(ThresholdSettings::default().validate().is_ok());
        assert!(ThresholdSettings {
            global_threshold: Some(0)
        }
        .validate()
        .is_err());

        let brand = BrandThreshold {
            id: None,
            brand: " ".to_string(),
            threshold: 5,
        };
        assert_eq!(brand.validate(), Err(FormError::Required("Brand")));

        let product = ProductThreshold {
            id: None,
            item_id: "item-1".to_string(),
            threshold: MAX_THRESHOLD + 1,
        };
        assert!(product.validate().is_err());
    }
}

//! Add Inventory form state and its reducer.
//!
//! All edits go through [`InventoryForm::reduce`]; the page keeps one
//! `InventoryForm` in a signal and never mutates fields directly.

use uuid::Uuid;

use super::aggregate::CreateInventoryItemDto;
use crate::domain::a003_sku::{SkuAutofill, SkuFilter};
use crate::shared::validation::{parse_in_range, require, FormError};

pub const MAX_QUANTITY: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryFormAction {
    SetBrand(Option<String>),
    SetProjectType(Option<String>),
    SetProductType(Option<String>),
    SetTechnology(Option<String>),
    SetWattage(Option<String>),
    /// SKU picked from the final dropdown; the rest of the form follows it.
    PickSku(SkuAutofill),
    ClearSku,
    SetQuantity(String),
    SetWarehouse {
        state_id: Option<String>,
        cluster_id: Option<String>,
        district_id: Option<String>,
    },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryForm {
    pub filter: SkuFilter,
    pub sku: Option<SkuAutofill>,
    pub quantity: String,
    pub state_id: Option<String>,
    pub cluster_id: Option<String>,
    pub district_id: Option<String>,
    /// Sent as `Idempotency-Key`; renewed after every successful submit.
    pub submission_id: Uuid,
    pub submitting: bool,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self::new()
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl InventoryForm {
    pub fn new() -> Self {
        Self {
            filter: SkuFilter::default(),
            sku: None,
            quantity: String::new(),
            state_id: None,
            cluster_id: None,
            district_id: None,
            submission_id: Uuid::new_v4(),
            submitting: false,
        }
    }

    /// Applies one user edit.
    ///
    /// Changing a filter field does not clear the others or the picked SKU,
    /// so an inconsistent combination stays visible to the user until fixed.
    pub fn reduce(&mut self, action: InventoryFormAction) {
        match action {
            InventoryFormAction::SetBrand(v) => self.filter.brand = blank_to_none(v),
            InventoryFormAction::SetProjectType(v) => {
                self.filter.project_type_id = blank_to_none(v)
            }
            InventoryFormAction::SetProductType(v) => self.filter.product_type = blank_to_none(v),
            InventoryFormAction::SetTechnology(v) => self.filter.technology = blank_to_none(v),
            InventoryFormAction::SetWattage(v) => self.filter.wattage = blank_to_none(v),
            InventoryFormAction::PickSku(fill) => {
                self.filter = fill.to_filter();
                self.sku = Some(fill);
            }
            InventoryFormAction::ClearSku => self.sku = None,
            InventoryFormAction::SetQuantity(q) => self.quantity = q,
            InventoryFormAction::SetWarehouse {
                state_id,
                cluster_id,
                district_id,
            } => {
                self.state_id = blank_to_none(state_id);
                self.cluster_id = blank_to_none(cluster_id);
                self.district_id = blank_to_none(district_id);
            }
            InventoryFormAction::Reset => *self = Self::new(),
        }
    }

    pub fn validate(&self) -> Result<CreateInventoryItemDto, FormError> {
        let sku = self.sku.as_ref().ok_or(FormError::Required("SKU"))?;
        let brand = require(&sku.brand.clone().or_else(|| self.filter.brand.clone()), "Brand")?;
        let quantity = parse_in_range(&self.quantity, "Quantity", 1, MAX_QUANTITY)? as u32;
        let state_id = require(&self.state_id, "State")?;
        let cluster_id = require(&self.cluster_id, "Cluster")?;
        let district_id = require(&self.district_id, "District")?;

        Ok(CreateInventoryItemDto {
            sku_code: sku.sku_code.clone(),
            name: sku.name.clone(),
            brand,
            technology: sku.technology.clone(),
            wattage: sku.wattage.clone(),
            product_type: sku.product_type.clone(),
            project_type: sku.project_type.clone(),
            category_type_id: sku.category_type_id.clone(),
            sub_project_type: sku.sub_project_type.clone(),
            sub_category: sku.sub_category.clone(),
            quantity,
            state_id,
            cluster_id,
            district_id,
        })
    }

    /// Validates and marks the form as in flight. A second call before
    /// [`finish_submit`](Self::finish_submit) is rejected, so one click
    /// produces exactly one create request.
    pub fn begin_submit(&mut self) -> Result<CreateInventoryItemDto, FormError> {
        if self.submitting {
            return Err(FormError::Invalid(
                "A submission is already in progress".to_string(),
            ));
        }
        let dto = self.validate()?;
        self.submitting = true;
        Ok(dto)
    }

    /// On success the form starts over with a fresh submission id; on failure
    /// the entered values stay for another attempt.
    pub fn finish_submit(&mut self, result: &Result<(), String>) {
        match result {
            Ok(()) => *self = Self::new(),
            Err(_) => self.submitting = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked() -> SkuAutofill {
        SkuAutofill {
            sku_code: "W-580".to_string(),
            brand: Some("Waaree".to_string()),
            technology: Some("TOPCon".to_string()),
            wattage: Some("580".to_string()),
            category_type_id: Some("pt-res".to_string()),
            ..Default::default()
        }
    }

    fn filled() -> InventoryForm {
        let mut form = InventoryForm::new();
        form.reduce(InventoryFormAction::PickSku(picked()));
        form.reduce(InventoryFormAction::SetQuantity("25".to_string()));
        form.reduce(InventoryFormAction::SetWarehouse {
            state_id: Some("gj".to_string()),
            cluster_id: Some("surat".to_string()),
            district_id: Some("olpad".to_string()),
        });
        form
    }

    #[test]
    fn test_pick_sku_populates_filter() {
        let form = filled();
        assert_eq!(form.filter.brand.as_deref(), Some("Waaree"));
        assert_eq!(form.filter.technology.as_deref(), Some("TOPCon"));
        assert_eq!(form.filter.project_type_id.as_deref(), Some("pt-res"));
    }

    #[test]
    fn test_changing_brand_keeps_other_fields() {
        let mut form = filled();
        form.reduce(InventoryFormAction::SetBrand(Some("Adani".to_string())));
        assert_eq!(form.filter.technology.as_deref(), Some("TOPCon"));
        assert!(form.sku.is_some());
        form.reduce(InventoryFormAction::SetBrand(Some(String::new())));
        assert_eq!(form.filter.brand, None);
    }

    #[test]
    fn test_validate_builds_dto() {
        let dto = filled().validate().unwrap();
        assert_eq!(dto.sku_code, "W-580");
        assert_eq!(dto.brand, "Waaree");
        assert_eq!(dto.quantity, 25);
        assert_eq!(dto.district_id, "olpad");
        assert_eq!(dto.category_type_id.as_deref(), Some("pt-res"));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = InventoryForm::new();
        assert_eq!(form.validate(), Err(FormError::Required("SKU")));

        form.reduce(InventoryFormAction::PickSku(picked()));
        assert_eq!(form.validate(), Err(FormError::Required("Quantity")));

        form.reduce(InventoryFormAction::SetQuantity("0".to_string()));
        assert!(matches!(
            form.validate(),
            Err(FormError::OutOfRange { field: "Quantity", .. })
        ));

        form.reduce(InventoryFormAction::SetQuantity("3".to_string()));
        assert_eq!(form.validate(), Err(FormError::Required("State")));
    }

    #[test]
    fn test_single_submission_per_click() {
        let mut form = filled();
        let first_id = form.submission_id;
        assert!(form.begin_submit().is_ok());
        assert!(form.begin_submit().is_err());

        form.finish_submit(&Err("503".to_string()));
        assert!(!form.submitting);
        assert_eq!(form.submission_id, first_id);
        assert_eq!(form.quantity, "25");

        assert!(form.begin_submit().is_ok());
        form.finish_submit(&Ok(()));
        assert_ne!(form.submission_id, first_id);
        assert!(form.sku.is_none());
        assert!(form.quantity.is_empty());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::status_flow::StatusFlow;
use crate::shared::validation::{normalize_phone, require_str, FormError};

/// Document kinds a dealer must upload before KYC can be submitted.
pub const REQUIRED_KYC_DOCUMENTS: &[&str] = &["pan", "gst", "address_proof"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    Pending,
    Submitted,
    Verified,
    Rejected,
}

impl StatusFlow for KycStatus {
    fn all() -> &'static [Self] {
        &[
            KycStatus::Pending,
            KycStatus::Submitted,
            KycStatus::Verified,
            KycStatus::Rejected,
        ]
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            KycStatus::Pending => &[KycStatus::Submitted],
            KycStatus::Submitted => &[KycStatus::Verified, KycStatus::Rejected],
            KycStatus::Verified => &[],
            KycStatus::Rejected => &[KycStatus::Submitted],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            KycStatus::Pending => "Pending",
            KycStatus::Submitted => "Submitted",
            KycStatus::Verified => "Verified",
            KycStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDocument {
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    #[serde(alias = "_id")]
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub state_id: Option<String>,
    #[serde(default)]
    pub district_id: Option<String>,
    #[serde(default)]
    pub district_name: Option<String>,
    #[serde(default)]
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub documents: Vec<KycDocument>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Dealer {
    pub fn missing_documents(&self) -> Vec<&'static str> {
        REQUIRED_KYC_DOCUMENTS
            .iter()
            .copied()
            .filter(|kind| {
                !self
                    .documents
                    .iter()
                    .any(|d| d.kind.eq_ignore_ascii_case(kind) && !d.url.is_empty())
            })
            .collect()
    }

    /// KYC moves to `Submitted` only with every required document present.
    pub fn can_submit_kyc(&self) -> bool {
        self.kyc_status.can_transition_to(KycStatus::Submitted) && self.missing_documents().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub business_name: String,
    pub owner_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
}

/// PAN: five letters, four digits, one letter.
fn is_valid_pan(pan: &str) -> bool {
    let b = pan.as_bytes();
    b.len() == 10
        && b[..5].iter().all(u8::is_ascii_uppercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase()
}

/// GSTIN: two-digit state code, the holder's PAN, entity digit, `Z`, checksum.
fn is_valid_gstin(gst: &str) -> bool {
    let b = gst.as_bytes();
    gst.is_ascii()
        && b.len() == 15
        && b[..2].iter().all(u8::is_ascii_digit)
        && is_valid_pan(&gst[2..12])
        && b[12].is_ascii_alphanumeric()
        && b[13] == b'Z'
        && b[14].is_ascii_alphanumeric()
}

fn upper_opt(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.trim().to_ascii_uppercase())
        .filter(|v| !v.is_empty())
}

impl DealerDto {
    pub fn validate(&self) -> Result<DealerDto, FormError> {
        let business_name = require_str(&self.business_name, "Business name")?;
        let owner_name = require_str(&self.owner_name, "Owner name")?;
        let phone = normalize_phone(&self.phone)?;

        let pan_number = upper_opt(&self.pan_number);
        if let Some(pan) = &pan_number {
            if !is_valid_pan(pan) {
                return Err(FormError::Invalid("PAN number is not valid".to_string()));
            }
        }
        let gst_number = upper_opt(&self.gst_number);
        if let Some(gst) = &gst_number {
            if !is_valid_gstin(gst) {
                return Err(FormError::Invalid("GST number is not valid".to_string()));
            }
            if let Some(pan) = &pan_number {
                if &gst[2..12] != pan.as_str() {
                    return Err(FormError::Invalid(
                        "GST number does not belong to the given PAN".to_string(),
                    ));
                }
            }
        }

        Ok(DealerDto {
            id: self.id.clone(),
            business_name,
            owner_name,
            phone,
            email: self
                .email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            gst_number,
            pan_number,
            state_id: self.state_id.clone().filter(|s| !s.is_empty()),
            district_id: self.district_id.clone().filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer(docs: &[&str], status: KycStatus) -> Dealer {
        Dealer {
            id: "d1".to_string(),
            business_name: "Surya Traders".to_string(),
            owner_name: "Meena".to_string(),
            phone: "9825012345".to_string(),
            email: None,
            gst_number: None,
            pan_number: None,
            state_id: None,
            district_id: None,
            district_name: None,
            kyc_status: status,
            documents: docs
                .iter()
                .map(|k| KycDocument {
                    kind: k.to_string(),
                    url: format!("https://files.example/{k}.pdf"),
                    verified: false,
                })
                .collect(),
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_kyc_submission_needs_documents() {
        let partial = dealer(&["pan"], KycStatus::Pending);
        assert_eq!(partial.missing_documents(), vec!["gst", "address_proof"]);
        assert!(!partial.can_submit_kyc());

        let complete = dealer(&["PAN", "gst", "address_proof"], KycStatus::Rejected);
        assert!(complete.can_submit_kyc());

        let verified = dealer(&["pan", "gst", "address_proof"], KycStatus::Verified);
        assert!(!verified.can_submit_kyc());
        assert!(verified.kyc_status.is_terminal());
    }

    #[test]
    fn test_dealer_dto_tax_ids() {
        let dto = DealerDto {
            business_name: "Surya Traders".to_string(),
            owner_name: "Meena Shah".to_string(),
            phone: "09825012345".to_string(),
            pan_number: Some("abcde1234f".to_string()),
            gst_number: Some("24ABCDE1234F1Z5".to_string()),
            ..Default::default()
        };
        let clean = dto.validate().unwrap();
        assert_eq!(clean.pan_number.as_deref(), Some("ABCDE1234F"));
        assert_eq!(clean.phone, "9825012345");

        let mismatch = DealerDto {
            pan_number: Some("ZZZZZ9999Z".to_string()),
            ..dto.clone()
        };
        assert_eq!(
            mismatch.validate(),
            Err(FormError::Invalid(
                "GST number does not belong to the given PAN".to_string()
            ))
        );

        let bad_gst = DealerDto {
            gst_number: Some("24ABCDE1234F1X5".to_string()),
            ..dto
        };
        assert!(bad_gst.validate().is_err());
    }

    #[test]
    fn test_dealer_defaults_from_json() {
        let d: Dealer =
            serde_json::from_str(r#"{"_id": "d9", "businessName": "Sun Co", "kycStatus": "submitted"}"#)
                .unwrap();
        assert!(d.is_active);
        assert_eq!(d.kyc_status, KycStatus::Submitted);
        assert_eq!(d.missing_documents().len(), 3);
    }
}

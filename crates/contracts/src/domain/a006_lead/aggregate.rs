use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::status_flow::StatusFlow;
use crate::shared::validation::{normalize_phone, require_str, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl StatusFlow for LeadStatus {
    fn all() -> &'static [Self] {
        &[
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ]
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            LeadStatus::New => &[LeadStatus::Contacted, LeadStatus::Lost],
            LeadStatus::Contacted => &[LeadStatus::Qualified, LeadStatus::Lost],
            LeadStatus::Qualified => &[LeadStatus::Converted, LeadStatus::Lost],
            LeadStatus::Converted => &[],
            // a lost lead can be picked up again
            LeadStatus::Lost => &[LeadStatus::Contacted],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }
}

/// Prospective customer captured by the call centre or a dealer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub state_id: Option<String>,
    #[serde(default)]
    pub district_id: Option<String>,
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub assigned_dealer_id: Option<String>,
    #[serde(default)]
    pub assigned_dealer_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /leads` and `PUT /leads/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadDto {
    /// Returns a cleaned copy ready to send: trimmed name, ten-digit phone,
    /// blank optionals dropped.
    pub fn validate(&self) -> Result<LeadDto, FormError> {
        let name = require_str(&self.name, "Name")?;
        let phone = normalize_phone(&self.phone)?;
        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        if let Some(e) = &email {
            if !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
                return Err(FormError::Invalid("Email address is not valid".to_string()));
            }
        }
        let clean = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Ok(LeadDto {
            id: self.id.clone(),
            name,
            phone,
            email,
            state_id: clean(&self.state_id),
            district_id: clean(&self.district_id),
            city_id: clean(&self.city_id),
            source: clean(&self.source),
            notes: clean(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_transitions() {
        assert!(LeadStatus::New.can_transition_to(LeadStatus::Contacted));
        assert!(!LeadStatus::New.can_transition_to(LeadStatus::Converted));
        assert!(LeadStatus::Converted.is_terminal());
        assert!(LeadStatus::Lost.can_transition_to(LeadStatus::Contacted));

        let body = LeadStatus::Qualified
            .transition(LeadStatus::Converted, Some("  ".to_string()))
            .unwrap();
        assert_eq!(body.remark, None);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"status": "converted"})
        );

        let err = LeadStatus::New
            .transition(LeadStatus::Converted, None)
            .unwrap_err();
        assert_eq!(err, "Cannot move from \"New\" to \"Converted\"");
    }

    #[test]
    fn test_lead_dto_validation() {
        let dto = LeadDto {
            name: "  Ramesh Patel ".to_string(),
            phone: "+91 98250 12345".to_string(),
            email: Some(" ".to_string()),
            city_id: Some("surat".to_string()),
            ..Default::default()
        };
        let clean = dto.validate().unwrap();
        assert_eq!(clean.name, "Ramesh Patel");
        assert_eq!(clean.phone, "9825012345");
        assert_eq!(clean.email, None);

        let bad = LeadDto {
            email: Some("ramesh@".to_string()),
            ..dto
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_lead_from_service_json() {
        let lead: Lead = serde_json::from_str(
            r#"{"_id": "l1", "name": "Asha", "phone": "9825012345", "status": "qualified"}"#,
        )
        .unwrap();
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert_eq!(lead.status.allowed_next(), &[LeadStatus::Converted, LeadStatus::Lost]);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::status_flow::{StatusFlow, StatusTransitionDto};
use crate::shared::validation::{require, require_str, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    #[default]
    Raised,
    UnderReview,
    Accepted,
    Rejected,
    Settled,
}

impl StatusFlow for DisputeStatus {
    fn all() -> &'static [Self] {
        &[
            DisputeStatus::Raised,
            DisputeStatus::UnderReview,
            DisputeStatus::Accepted,
            DisputeStatus::Rejected,
            DisputeStatus::Settled,
        ]
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            DisputeStatus::Raised => &[DisputeStatus::UnderReview],
            DisputeStatus::UnderReview => &[DisputeStatus::Accepted, DisputeStatus::Rejected],
            DisputeStatus::Accepted => &[DisputeStatus::Settled],
            DisputeStatus::Rejected | DisputeStatus::Settled => &[],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DisputeStatus::Raised => "Raised",
            DisputeStatus::UnderReview => "Under review",
            DisputeStatus::Accepted => "Accepted",
            DisputeStatus::Rejected => "Rejected",
            DisputeStatus::Settled => "Settled",
        }
    }
}

/// Payment or warranty dispute raised by a dealer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub dispute_number: Option<String>,
    pub dealer_id: String,
    #[serde(default)]
    pub dealer_name: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub claimed_amount: f64,
    #[serde(default)]
    pub settled_amount: Option<f64>,
    #[serde(default)]
    pub status: DisputeStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dispute {
    pub fn display_number(&self) -> &str {
        self.dispute_number.as_deref().unwrap_or(&self.id)
    }

    /// Claimed amount not covered by the settlement.
    pub fn outstanding(&self) -> f64 {
        match self.status {
            DisputeStatus::Settled => {
                (self.claimed_amount - self.settled_amount.unwrap_or(0.0)).max(0.0)
            }
            DisputeStatus::Rejected => 0.0,
            _ => self.claimed_amount,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeDto {
    pub dealer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    pub reason: String,
    /// Raw text from the amount input.
    pub claimed_amount: String,
}

/// Validated body of `POST /disputes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputePayload {
    pub dealer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    pub reason: String,
    pub claimed_amount: f64,
}

fn parse_amount(raw: &str, field: &'static str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    let value: f64 = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| FormError::NotANumber { field })?;
    let rounded = (value * 100.0).round() / 100.0;
    if !rounded.is_finite() || rounded <= 0.0 {
        return Err(FormError::Invalid(format!("{field} must be greater than zero")));
    }
    Ok(rounded)
}

impl DisputeDto {
    pub fn validate(&self) -> Result<DisputePayload, FormError> {
        let dealer_id = require(&self.dealer_id, "Dealer")?;
        let reason = require_str(&self.reason, "Reason")?;
        let claimed_amount = parse_amount(&self.claimed_amount, "Claimed amount")?;
        Ok(DisputePayload {
            dealer_id,
            ticket_id: self.ticket_id.clone().filter(|t| !t.is_empty()),
            reason,
            claimed_amount,
        })
    }
}

/// Body of `PATCH /disputes/{id}/status` when settling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementDto {
    #[serde(flatten)]
    pub transition: StatusTransitionDto<DisputeStatus>,
    pub settled_amount: f64,
}

impl SettlementDto {
    /// Settlement may not exceed the claimed amount.
    pub fn for_dispute(dispute: &Dispute, raw_amount: &str, remark: Option<String>) -> Result<Self, String> {
        let transition = dispute.status.transition(DisputeStatus::Settled, remark)?;
        let settled_amount =
            parse_amount(raw_amount, "Settled amount").map_err(|e| e.to_string())?;
        if settled_amount > dispute.claimed_amount {
            return Err(format!(
                "Settled amount cannot exceed the claimed {:.2}",
                dispute.claimed_amount
            ));
        }
        Ok(Self {
            transition,
            settled_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispute(status: DisputeStatus) -> Dispute {
        Dispute {
            id: "x1".to_string(),
            dispute_number: Some("DSP-0042".to_string()),
            dealer_id: "d1".to_string(),
            dealer_name: None,
            ticket_id: None,
            reason: "Short shipment".to_string(),
            claimed_amount: 12500.0,
            settled_amount: None,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_dispute_transitions() {
        assert!(DisputeStatus::Raised.can_transition_to(DisputeStatus::UnderReview));
        assert!(!DisputeStatus::Raised.can_transition_to(DisputeStatus::Settled));
        assert!(DisputeStatus::Rejected.is_terminal());
        assert!(DisputeStatus::Settled.is_terminal());
    }

    #[test]
    fn test_settlement() {
        let accepted = dispute(DisputeStatus::Accepted);
        let body = SettlementDto::for_dispute(&accepted, "10,000", None).unwrap();
        assert_eq!(body.settled_amount, 10000.0);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"status": "settled", "settledAmount": 10000.0})
        );

        assert!(SettlementDto::for_dispute(&accepted, "20000", None).is_err());
        assert!(SettlementDto::for_dispute(&accepted, "0.004", None).is_err());
        assert!(SettlementDto::for_dispute(&dispute(DisputeStatus::UnderReview), "100", None).is_err());
    }

    #[test]
    fn test_outstanding() {
        let mut d = dispute(DisputeStatus::Settled);
        d.settled_amount = Some(10000.0);
        assert_eq!(d.outstanding(), 2500.0);
        assert_eq!(dispute(DisputeStatus::Rejected).outstanding(), 0.0);
        assert_eq!(dispute(DisputeStatus::Raised).outstanding(), 12500.0);
    }

    #[test]
    fn test_dispute_dto_validation() {
        let dto = DisputeDto {
            dealer_id: Some("d1".to_string()),
            ticket_id: Some(String::new()),
            reason: " Damaged panels ".to_string(),
            claimed_amount: "1499.999".to_string(),
        };
        let payload = dto.validate().unwrap();
        assert_eq!(payload.claimed_amount, 1500.0);
        assert_eq!(payload.ticket_id, None);
        assert_eq!(payload.reason, "Damaged panels");

        let zero = DisputeDto {
            claimed_amount: "0".to_string(),
            ..dto.clone()
        };
        assert!(zero.validate().is_err());
        let below_paise = DisputeDto {
            claimed_amount: "0.004".to_string(),
            ..dto.clone()
        };
        assert!(below_paise.validate().is_err());
        let huge = DisputeDto {
            claimed_amount: "1e307".to_string(),
            ..dto.clone()
        };
        assert!(huge.validate().is_err());
        let text = DisputeDto {
            claimed_amount: "abc".to_string(),
            ..dto
        };
        assert_eq!(
            text.validate(),
            Err(FormError::NotANumber { field: "Claimed amount" })
        );
    }
}

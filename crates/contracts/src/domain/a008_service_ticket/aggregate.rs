use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::status_flow::StatusFlow;
use crate::shared::validation::{normalize_phone, require_str, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    OnHold,
    Resolved,
    Closed,
}

impl StatusFlow for TicketStatus {
    fn all() -> &'static [Self] {
        &[
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::OnHold,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    fn allowed_next(&self) -> &'static [Self] {
        match self {
            TicketStatus::Open => &[TicketStatus::InProgress, TicketStatus::Closed],
            TicketStatus::InProgress => &[TicketStatus::OnHold, TicketStatus::Resolved],
            TicketStatus::OnHold => &[TicketStatus::InProgress],
            // reopened when the customer reports the fault again
            TicketStatus::Resolved => &[TicketStatus::Closed, TicketStatus::InProgress],
            TicketStatus::Closed => &[],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In progress",
            TicketStatus::OnHold => "On hold",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    /// Time allowed before an unresolved ticket counts as overdue.
    pub fn sla(&self) -> Duration {
        match self {
            TicketPriority::Critical => Duration::hours(24),
            TicketPriority::High => Duration::hours(48),
            TicketPriority::Medium => Duration::hours(72),
            TicketPriority::Low => Duration::hours(120),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub ticket_number: Option<String>,
    #[serde(default)]
    pub dealer_id: Option<String>,
    #[serde(default)]
    pub dealer_name: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub sku_code: Option<String>,
    pub issue: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ServiceTicket {
    pub fn display_number(&self) -> &str {
        self.ticket_number.as_deref().unwrap_or(&self.id)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.status, TicketStatus::Resolved | TicketStatus::Closed)
    }

    /// Open tickets older than their priority's SLA. Tickets without a
    /// creation time are never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.created_at {
            Some(created) if self.is_open() => now - created > self.priority.sla(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_code: Option<String>,
    pub issue: String,
    pub priority: TicketPriority,
}

pub const MIN_ISSUE_LEN: usize = 10;

impl ServiceTicketDto {
    pub fn validate(&self) -> Result<ServiceTicketDto, FormError> {
        let customer_name = require_str(&self.customer_name, "Customer name")?;
        let customer_phone = normalize_phone(&self.customer_phone)?;
        let issue = require_str(&self.issue, "Issue")?;
        if issue.chars().count() < MIN_ISSUE_LEN {
            return Err(FormError::Invalid(format!(
                "Issue must be at least {MIN_ISSUE_LEN} characters"
            )));
        }
        Ok(ServiceTicketDto {
            dealer_id: self.dealer_id.clone().filter(|d| !d.is_empty()),
            customer_name,
            customer_phone,
            sku_code: self.sku_code.clone().filter(|s| !s.trim().is_empty()),
            issue,
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ticket(priority: TicketPriority, status: TicketStatus) -> ServiceTicket {
        ServiceTicket {
            id: "t1".to_string(),
            ticket_number: None,
            dealer_id: None,
            dealer_name: None,
            customer_name: "Kiran".to_string(),
            customer_phone: "9825012345".to_string(),
            sku_code: None,
            issue: "Inverter shows grid fault".to_string(),
            priority,
            status,
            assigned_to: None,
            created_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()),
            resolved_at: None,
        }
    }

    #[test]
    fn test_ticket_transitions() {
        assert!(TicketStatus::Open.can_transition_to(TicketStatus::InProgress));
        assert!(!TicketStatus::OnHold.can_transition_to(TicketStatus::Closed));
        assert!(TicketStatus::Resolved.can_transition_to(TicketStatus::InProgress));
        assert!(TicketStatus::Closed.is_terminal());
        assert_eq!(
            serde_json::to_value(TicketStatus::InProgress).unwrap(),
            serde_json::json!("in_progress")
        );
    }

    #[test]
    fn test_overdue_follows_priority_sla() {
        let now = Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap();
        assert!(ticket(TicketPriority::Critical, TicketStatus::Open).is_overdue(now));
        assert!(ticket(TicketPriority::High, TicketStatus::OnHold).is_overdue(now));
        assert!(!ticket(TicketPriority::Medium, TicketStatus::Open).is_overdue(now));
        assert!(!ticket(TicketPriority::Critical, TicketStatus::Resolved).is_overdue(now));
    }

    #[test]
    fn test_ticket_dto_validation() {
        let dto = ServiceTicketDto {
            customer_name: "Kiran".to_string(),
            customer_phone: "9825012345".to_string(),
            issue: "no power".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = ServiceTicketDto {
            issue: "No power output since Monday".to_string(),
            sku_code: Some(" ".to_string()),
            ..dto
        };
        let clean = dto.validate().unwrap();
        assert_eq!(clean.sku_code, None);
        assert_eq!(clean.priority, TicketPriority::Medium);
    }

    #[test]
    fn test_priority_keys() {
        assert_eq!(TicketPriority::from_key("critical"), Some(TicketPriority::Critical));
        assert_eq!(TicketPriority::from_key("urgent"), None);
        assert!(TicketPriority::Critical > TicketPriority::Low);
    }
}

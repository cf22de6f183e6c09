//! Status workflows for leads, dealer KYC, service tickets and disputes.

use serde::{Deserialize, Serialize};

/// A closed set of statuses with the transitions the dashboard may request.
pub trait StatusFlow: Copy + PartialEq + Sized + 'static {
    fn all() -> &'static [Self];

    fn allowed_next(&self) -> &'static [Self];

    fn label(&self) -> &'static str;

    fn can_transition_to(&self, next: Self) -> bool {
        self.allowed_next().contains(&next)
    }

    fn is_terminal(&self) -> bool {
        self.allowed_next().is_empty()
    }

    /// Checks a requested transition and builds the request body for it.
    fn transition(&self, next: Self, remark: Option<String>) -> Result<StatusTransitionDto<Self>, String> {
        if !self.can_transition_to(next) {
            return Err(format!(
                "Cannot move from \"{}\" to \"{}\"",
                self.label(),
                next.label()
            ));
        }
        Ok(StatusTransitionDto {
            status: next,
            remark: remark.filter(|r| !r.trim().is_empty()),
        })
    }
}

/// Body of the `PATCH /{collection}/{id}/status` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTransitionDto<S> {
    pub status: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

use contracts::domain::a009_dispute::{Dispute, DisputePayload, DisputeStatus, SettlementDto};
use contracts::shared::status_flow::StatusTransitionDto;

use crate::shared::api_client;

pub async fn fetch_disputes() -> Result<Vec<Dispute>, String> {
    api_client::get_json("/disputes").await
}

pub async fn create_dispute(payload: &DisputePayload) -> Result<(), String> {
    api_client::post_ack("/disputes", payload).await
}

pub async fn update_status(id: &str, dto: &StatusTransitionDto<DisputeStatus>) -> Result<(), String> {
    api_client::patch_json(&format!("/disputes/{}/status", id), dto).await
}

/// Same endpoint as [`update_status`], with the settled amount in the body.
pub async fn settle(id: &str, dto: &SettlementDto) -> Result<(), String> {
    api_client::patch_json(&format!("/disputes/{}/status", id), dto).await
}

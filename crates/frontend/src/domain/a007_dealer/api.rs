use contracts::domain::a007_dealer::{Dealer, DealerDto, KycStatus};
use contracts::shared::status_flow::StatusTransitionDto;
use serde::Serialize;

use crate::shared::api_client;

pub async fn fetch_dealers() -> Result<Vec<Dealer>, String> {
    api_client::get_json("/dealers").await
}

pub async fn create_dealer(dto: &DealerDto) -> Result<(), String> {
    api_client::post_ack("/dealers", dto).await
}

pub async fn update_kyc_status(id: &str, dto: &StatusTransitionDto<KycStatus>) -> Result<(), String> {
    api_client::patch_json(&format!("/dealers/{}/kyc-status", id), dto).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActiveFlag {
    is_active: bool,
}

pub async fn set_active(id: &str, is_active: bool) -> Result<(), String> {
    api_client::patch_json(&format!("/dealers/{}/active", id), &ActiveFlag { is_active }).await
}

use contracts::domain::a006_lead::{Lead, LeadDto, LeadStatus};
use contracts::shared::status_flow::StatusTransitionDto;
use serde::Serialize;

use crate::shared::api_client;

pub async fn fetch_leads() -> Result<Vec<Lead>, String> {
    api_client::get_json("/leads").await
}

pub async fn create_lead(dto: &LeadDto) -> Result<(), String> {
    api_client::post_ack("/leads", dto).await
}

pub async fn update_status(id: &str, dto: &StatusTransitionDto<LeadStatus>) -> Result<(), String> {
    api_client::patch_json(&format!("/leads/{}/status", id), dto).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignDealer<'a> {
    dealer_id: &'a str,
}

pub async fn assign_dealer(id: &str, dealer_id: &str) -> Result<(), String> {
    api_client::patch_json(&format!("/leads/{}/assign", id), &AssignDealer { dealer_id }).await
}

use contracts::domain::a008_service_ticket::{ServiceTicket, ServiceTicketDto, TicketStatus};
use contracts::shared::status_flow::StatusTransitionDto;

use crate::shared::api_client;

pub async fn fetch_tickets() -> Result<Vec<ServiceTicket>, String> {
    api_client::get_json("/service-tickets").await
}

pub async fn create_ticket(dto: &ServiceTicketDto) -> Result<(), String> {
    api_client::post_ack("/service-tickets", dto).await
}

pub async fn update_status(id: &str, dto: &StatusTransitionDto<TicketStatus>) -> Result<(), String> {
    api_client::patch_json(&format!("/service-tickets/{}/status", id), dto).await
}

use contracts::domain::a005_restock_limit::{RestockLimit, RestockLimitPayload};

use crate::shared::api_client;

pub async fn fetch_limits() -> Result<Vec<RestockLimit>, String> {
    api_client::get_json("/inventory/restock-limits").await
}

/// Creates when `id` is `None`, otherwise replaces the existing limit.
pub async fn save_limit(id: Option<&str>, payload: &RestockLimitPayload) -> Result<(), String> {
    match id {
        Some(id) => api_client::put_json(&format!("/inventory/restock-limits/{}", id), payload).await,
        None => api_client::post_ack("/inventory/restock-limits", payload).await,
    }
}

pub async fn delete_limit(id: &str) -> Result<(), String> {
    api_client::delete(&format!("/inventory/restock-limits/{}", id)).await
}

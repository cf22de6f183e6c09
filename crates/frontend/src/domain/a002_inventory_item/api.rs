use contracts::domain::a002_inventory_item::{CreateInventoryItemDto, InventoryItem};
use uuid::Uuid;

use crate::shared::api_client;

pub async fn fetch_items() -> Result<Vec<InventoryItem>, String> {
    api_client::get_json("/inventory/items").await
}

/// One request per submit; `submission_id` lets the service drop a replay.
pub async fn create_item(dto: &CreateInventoryItemDto, submission_id: Uuid) -> Result<(), String> {
    api_client::post_json_once("/inventory/items", dto, &submission_id.to_string()).await
}

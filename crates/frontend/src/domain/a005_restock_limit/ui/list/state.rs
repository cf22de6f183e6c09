use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::domain::a005_restock_limit::{RestockLimit, RestockLimitDto};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct RestockLimitListState {
    pub limits: Vec<RestockLimit>,
    pub items: Vec<InventoryItem>,
    pub search_query: String,
    /// Open create/edit form, `None` when closed
    pub editing: Option<RestockLimitDto>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<RestockLimitListState> {
    RwSignal::new(RestockLimitListState::default())
}

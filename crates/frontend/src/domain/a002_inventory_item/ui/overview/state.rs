use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::domain::a004_stock_threshold::ThresholdBook;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct InventoryOverviewState {
    pub items: Vec<InventoryItem>,
    pub book: ThresholdBook,
    pub search_query: String,
    pub low_stock_only: bool,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<InventoryOverviewState> {
    RwSignal::new(InventoryOverviewState::default())
}

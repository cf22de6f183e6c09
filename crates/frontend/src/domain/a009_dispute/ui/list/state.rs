use contracts::domain::a007_dealer::Dealer;
use contracts::domain::a009_dispute::{Dispute, DisputeStatus};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct DisputeListState {
    pub disputes: Vec<Dispute>,
    pub dealers: Vec<Dealer>,
    pub search_query: String,
    pub status_filter: Option<DisputeStatus>,
    pub show_form: bool,
    /// Dispute whose settlement amount is being entered
    pub settling: Option<Dispute>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<DisputeListState> {
    RwSignal::new(DisputeListState::default())
}

use contracts::domain::a006_lead::{Lead, LeadStatus};
use contracts::domain::a007_dealer::Dealer;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct LeadListState {
    pub leads: Vec<Lead>,
    pub dealers: Vec<Dealer>,
    pub search_query: String,
    pub status_filter: Option<LeadStatus>,
    pub show_form: bool,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<LeadListState> {
    RwSignal::new(LeadListState::default())
}

use contracts::domain::a007_dealer::{Dealer, KycStatus};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct DealerListState {
    pub dealers: Vec<Dealer>,
    pub search_query: String,
    pub kyc_filter: Option<KycStatus>,
    pub show_inactive: bool,
    pub show_form: bool,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<DealerListState> {
    RwSignal::new(DealerListState::default())
}

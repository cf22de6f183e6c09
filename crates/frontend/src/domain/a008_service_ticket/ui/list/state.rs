use contracts::domain::a007_dealer::Dealer;
use contracts::domain::a008_service_ticket::{ServiceTicket, TicketPriority, TicketStatus};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ServiceTicketListState {
    pub tickets: Vec<ServiceTicket>,
    pub dealers: Vec<Dealer>,
    pub search_query: String,
    pub status_filter: Option<TicketStatus>,
    pub priority_filter: Option<TicketPriority>,
    pub overdue_only: bool,
    pub show_form: bool,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<ServiceTicketListState> {
    RwSignal::new(ServiceTicketListState::default())
}

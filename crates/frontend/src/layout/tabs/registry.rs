//! Tab content registry: maps `tab.key` to its page.

use crate::dashboards::d400_stock_summary::StockSummaryDashboard;
use crate::domain::a002_inventory_item::ui::add::AddInventoryPage;
use crate::domain::a002_inventory_item::ui::overview::InventoryOverview;
use crate::domain::a004_stock_threshold::ui::settings::LevelManagementSettings;
use crate::domain::a005_restock_limit::ui::list::RestockLimitList;
use crate::domain::a006_lead::ui::list::LeadList;
use crate::domain::a007_dealer::ui::list::DealerList;
use crate::domain::a008_service_ticket::ui::list::ServiceTicketList;
use crate::domain::a009_dispute::ui::list::DisputeList;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_stock_summary" => view! { <StockSummaryDashboard /> }.into_any(),
        "a002_inventory_overview" => view! { <InventoryOverview /> }.into_any(),
        "a002_inventory_add" => view! { <AddInventoryPage /> }.into_any(),
        "a004_stock_threshold" => view! { <LevelManagementSettings /> }.into_any(),
        "a005_restock_limit" => view! { <RestockLimitList /> }.into_any(),
        "a006_lead" => view! { <LeadList /> }.into_any(),
        "a007_dealer" => view! { <DealerList /> }.into_any(),
        "a008_service_ticket" => view! { <ServiceTicketList /> }.into_any(),
        "a009_dispute" => view! { <DisputeList /> }.into_any(),
        _ => {
            log!("Unknown tab key: '{}'", key);
            view! {
                <div class="page">
                    <div class="alert alert--error">{format!("Unknown page: {}", key)}</div>
                </div>
            }
            .into_any()
        }
    }
}

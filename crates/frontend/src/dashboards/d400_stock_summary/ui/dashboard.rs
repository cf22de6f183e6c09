use crate::domain::a001_location::ui::LocationCascadeSelector;
use crate::domain::a002_inventory_item::api;
use crate::domain::a004_stock_threshold::api::load_threshold_book;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_stock_summary::{summarize_by_brand, BrandStockSummary};
use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::domain::a004_stock_threshold::ThresholdBook;
use contracts::shared::location::{LocationCascade, LocationLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Stock by brand, narrowed by the warehouse filter
#[component]
pub fn StockSummaryDashboard() -> impl IntoView {
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let book = RwSignal::new(ThresholdBook::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let cascade = RwSignal::new(LocationCascade::warehouse().upto(LocationLevel::Cluster));

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            book.set(load_threshold_book().await);
            match api::fetch_items().await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    log::error!("Failed to load stock summary: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let summary = Memo::new(move |_| {
        let location_ids = cascade
            .with(|c| c.deepest_selected())
            .map(|(_, ids)| ids)
            .unwrap_or_default();
        items.with(|all| {
            let scoped: Vec<InventoryItem> = all
                .iter()
                .filter(|i| i.in_location(&location_ids))
                .cloned()
                .collect();
            book.with(|b| summarize_by_brand(&scoped, b))
        })
    });

    let totals = Memo::new(move |_| {
        summary.with(|rows| {
            (
                rows.iter().map(|r| r.total_quantity).sum::<u64>(),
                rows.iter().map(|r| r.item_count).sum::<usize>(),
                rows.iter().map(|r| r.low_stock_count).sum::<usize>(),
            )
        })
    });

    view! {
        <PageFrame page_id="d400_stock_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stock Summary"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="filter-panel">
                    <LocationCascadeSelector cascade=cascade />
                </div>

                <Flex gap=FlexGap::Medium>
                    <div class="stat-card">
                        <div class="stat-card__label">"Units in stock"</div>
                        <div class="stat-card__value">{move || totals.get().0}</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-card__label">"Stock lines"</div>
                        <div class="stat-card__value">{move || totals.get().1}</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-card__label">"Low stock lines"</div>
                        <div class="stat-card__value">{move || totals.get().2}</div>
                    </div>
                </Flex>

                <Show
                    when=move || summary.with(|rows| !rows.is_empty())
                    fallback=move || view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                            {move || if loading.get() {
                                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                            } else {
                                view! { <span>"No stock in the selected warehouses"</span> }.into_any()
                            }}
                        </Flex>
                    }
                >
                    <div class="bar-list">
                        {move || {
                            let rows = summary.get();
                            let max = rows.first().map(|r| r.total_quantity).unwrap_or(0);
                            rows.into_iter().map(|row| brand_bar(row, max)).collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

fn brand_bar(row: BrandStockSummary, max: u64) -> impl IntoView {
    let width = format!("width: {}%;", row.share_of(max));
    view! {
        <div class="bar-list__row">
            <div class="bar-list__label">{row.brand.clone()}</div>
            <div class="bar-list__track">
                <div class="bar-list__fill" style=width></div>
            </div>
            <div class="bar-list__value">{row.total_quantity}</div>
            <div class="bar-list__meta">
                {format!("{} lines", row.item_count)}
                {(row.low_stock_count > 0).then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                        {format!("{} low", row.low_stock_count)}
                    </Badge>
                })}
            </div>
        </div>
    }
}

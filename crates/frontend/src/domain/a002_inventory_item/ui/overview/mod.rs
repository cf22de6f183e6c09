pub mod state;

use self::state::create_state;
use crate::domain::a001_location::ui::LocationCascadeSelector;
use crate::domain::a002_inventory_item::api;
use crate::domain::a004_stock_threshold::api::load_threshold_book;
use crate::shared::components::ui::Checkbox;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::shared::location::{LocationCascade, LocationLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for InventoryItem {
    fn search_text(&self) -> String {
        [
            self.sku_code.as_deref(),
            self.name.as_deref(),
            self.brand.as_deref(),
            self.technology.as_deref(),
            self.warehouse_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

#[component]
pub fn InventoryOverview() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let cascade = RwSignal::new(
        LocationCascade::warehouse().with_multiple(LocationLevel::District, true),
    );

    let load_items = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let book = load_threshold_book().await;
            match api::fetch_items().await {
                Ok(items) => {
                    log::debug!("Loaded {} inventory items", items.len());
                    state.update(|s| {
                        s.items = items;
                        s.book = book;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load inventory: {}", e);
                    state.update(|s| s.items.clear());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let visible = Memo::new(move |_| {
        let location_ids = cascade
            .with(|c| c.deepest_selected())
            .map(|(_, ids)| ids)
            .unwrap_or_default();
        state.with(|s| {
            filter_list(&s.items, &s.search_query)
                .into_iter()
                .filter(|item| item.in_location(&location_ids))
                .filter(|item| !s.low_stock_only || s.book.is_low_stock(item))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="a002_inventory_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory Overview"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <LocationCascadeSelector cascade=cascade />
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            placeholder="SKU, brand, warehouse..."
                            on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                        />
                        <Checkbox
                            label="Low stock only".to_string()
                            checked=Signal::derive(move || state.with(|s| s.low_stock_only))
                            on_change=Callback::new(move |v| state.update(|s| s.low_stock_only = v))
                        />
                    </Flex>
                </div>

                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Kit"</TableHeaderCell>
                                <TableHeaderCell>"Product type"</TableHeaderCell>
                                <TableHeaderCell>"Warehouse"</TableHeaderCell>
                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                <TableHeaderCell>"Threshold"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|item| (item.id.clone(), item.quantity)
                                children=move |item| {
                                    let resolved = state.with_untracked(|s| s.book.resolve(&item));
                                    let low = resolved.is_some_and(|t| item.quantity <= t.value);
                                    let sku = item.sku_code.clone().unwrap_or_else(|| "-".to_string());
                                    let kit = item.kit_label();
                                    let product_type = item.product_type.clone().unwrap_or_else(|| "-".to_string());
                                    let warehouse = item.warehouse_name.clone().unwrap_or_else(|| "-".to_string());
                                    let quantity = item.quantity;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-family: monospace;">
                                                        {sku}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{kit}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {product_type}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {warehouse}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {resolved
                                                        .map(|t| format!("{} ({})", t.value, t.source.label()))
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if low {
                                                        view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                                                "Low stock"
                                                            </Badge>
                                                        }.into_any()
                                                    } else {
                                                        view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                                "In stock"
                                                            </Badge>
                                                        }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

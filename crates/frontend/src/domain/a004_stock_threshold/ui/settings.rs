//! Low-stock levels: one global value, per-brand and per-product overrides.

use crate::domain::a002_inventory_item::api as inventory_api;
use crate::domain::a003_sku::api as sku_api;
use crate::domain::a004_stock_threshold::api;
use crate::shared::components::ui::Select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::domain::a003_sku::Brand;
use contracts::domain::a004_stock_threshold::aggregate::MAX_THRESHOLD;
use contracts::domain::a004_stock_threshold::{BrandThreshold, ProductThreshold, ThresholdSettings};
use contracts::shared::validation::{parse_in_range, FormError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, Default)]
struct SettingsData {
    settings: ThresholdSettings,
    brand_rows: Vec<BrandThreshold>,
    product_rows: Vec<ProductThreshold>,
    brands: Vec<Brand>,
    items: Vec<InventoryItem>,
}

fn parse_threshold(raw: &str) -> Result<u32, FormError> {
    parse_in_range(raw, "Threshold", 1, MAX_THRESHOLD as u64).map(|v| v as u32)
}

#[component]
pub fn LevelManagementSettings() -> impl IntoView {
    let data = RwSignal::new(SettingsData::default());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let global_input = RwSignal::new(String::new());
    let brand_choice = RwSignal::new(String::new());
    let brand_input = RwSignal::new(String::new());
    let item_choice = RwSignal::new(String::new());
    let item_input = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let settings = api::fetch_settings().await;
            let brand_rows = api::fetch_brand_thresholds().await;
            let product_rows = api::fetch_product_thresholds().await;
            match (settings, brand_rows, product_rows) {
                (Ok(settings), Ok(brand_rows), Ok(product_rows)) => {
                    global_input.set(
                        settings
                            .global_threshold
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    );
                    data.update(|d| {
                        d.settings = settings;
                        d.brand_rows = brand_rows;
                        d.product_rows = product_rows;
                    });
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    log::error!("Failed to load threshold settings: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Pick lists for the override forms.
    spawn_local(async move {
        let brands = sku_api::fetch_brands().await.unwrap_or_else(|e| {
            log::warn!("Failed to load brands: {}", e);
            Vec::new()
        });
        let items = inventory_api::fetch_items().await.unwrap_or_else(|e| {
            log::warn!("Failed to load inventory items: {}", e);
            Vec::new()
        });
        data.update(|d| {
            d.brands = brands;
            d.items = items;
        });
    });
    load();

    let finish = move |result: Result<(), String>, done: &'static str| {
        match result {
            Ok(()) => {
                set_notice.set(Some(done.to_string()));
                load();
            }
            Err(e) => {
                log::error!("Threshold update failed: {}", e);
                set_error.set(Some(e));
            }
        }
        set_saving.set(false);
    };

    let start_save = move || -> bool {
        if saving.get_untracked() {
            return false;
        }
        set_error.set(None);
        set_notice.set(None);
        set_saving.set(true);
        true
    };

    let save_global = move || {
        let raw = global_input.get_untracked();
        let global_threshold = if raw.trim().is_empty() {
            None
        } else {
            match parse_threshold(&raw) {
                Ok(v) => Some(v),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            }
        };
        let settings = ThresholdSettings { global_threshold };
        if let Err(e) = settings.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        if !start_save() {
            return;
        }
        spawn_local(async move {
            finish(api::save_settings(&settings).await, "Global threshold saved");
        });
    };

    let save_brand = move || {
        let threshold = match parse_threshold(&brand_input.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let brand = brand_choice.get_untracked();
        // Saving an existing brand again updates its row.
        let id = data.with_untracked(|d| {
            d.brand_rows
                .iter()
                .find(|r| r.brand.trim().eq_ignore_ascii_case(brand.trim()))
                .and_then(|r| r.id.clone())
        });
        let row = BrandThreshold { id, brand, threshold };
        if let Err(e) = row.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        if !start_save() {
            return;
        }
        spawn_local(async move {
            let result = api::save_brand_threshold(&row).await;
            if result.is_ok() {
                brand_choice.set(String::new());
                brand_input.set(String::new());
            }
            finish(result, "Brand threshold saved");
        });
    };

    let save_product = move || {
        let threshold = match parse_threshold(&item_input.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let item_id = item_choice.get_untracked();
        let id = data.with_untracked(|d| {
            d.product_rows
                .iter()
                .find(|r| r.item_id == item_id)
                .and_then(|r| r.id.clone())
        });
        let row = ProductThreshold { id, item_id, threshold };
        if let Err(e) = row.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        if !start_save() {
            return;
        }
        spawn_local(async move {
            let result = api::save_product_threshold(&row).await;
            if result.is_ok() {
                item_choice.set(String::new());
                item_input.set(String::new());
            }
            finish(result, "Product threshold saved");
        });
    };

    let remove_brand = move |id: String| {
        if !start_save() {
            return;
        }
        spawn_local(async move {
            finish(api::delete_brand_threshold(&id).await, "Brand threshold removed");
        });
    };

    let remove_product = move |id: String| {
        if !start_save() {
            return;
        }
        spawn_local(async move {
            finish(api::delete_product_threshold(&id).await, "Product threshold removed");
        });
    };

    let item_label = move |item_id: &str| {
        data.with_untracked(|d| {
            d.items
                .iter()
                .find(|i| i.id == item_id)
                .map(|i| {
                    format!(
                        "{} - {}",
                        i.sku_code.clone().unwrap_or_else(|| "-".to_string()),
                        i.warehouse_name.clone().unwrap_or_else(|| i.kit_label())
                    )
                })
                .unwrap_or_else(|| item_id.to_string())
        })
    };

    view! {
        <PageFrame page_id="a004_stock_threshold--settings" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stock Level Management"</h1>
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
                {move || notice.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}

                <div class="form-section">
                    <h3 class="form-section__title">"Global threshold"</h3>
                    <p class="form__hint">"Applies to every item without a brand or product override. Leave empty to disable."</p>
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Threshold"</Label>
                            <Input value=global_input placeholder="e.g. 10" />
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save_global()
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Save"
                        </Button>
                    </Flex>
                </div>

                <div class="form-section">
                    <h3 class="form-section__title">"Brand thresholds"</h3>
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Brand".to_string()
                            value=brand_choice
                            options=Signal::derive(move || data.with(|d| {
                                d.brands.iter().map(|b| (b.name.clone(), b.name.clone())).collect::<Vec<_>>()
                            }))
                            on_change=Callback::new(move |v| brand_choice.set(v))
                        />
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Threshold"</Label>
                            <Input value=brand_input placeholder="e.g. 25" />
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save_brand()
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Save"
                        </Button>
                    </Flex>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Brand"</TableHeaderCell>
                                <TableHeaderCell>"Threshold"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || data.with(|d| d.brand_rows.clone())
                                key=|row| (row.id.clone(), row.threshold)
                                children=move |row| {
                                    let id = row.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{row.brand.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.threshold}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {id.map(|id| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| remove_brand(id.clone())
                                                            disabled=Signal::derive(move || saving.get())
                                                        >
                                                            "Remove"
                                                        </Button>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <div class="form-section">
                    <h3 class="form-section__title">"Product thresholds"</h3>
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Inventory item".to_string()
                            value=item_choice
                            options=Signal::derive(move || data.with(|d| {
                                d.items.iter().map(|i| {
                                    let sku = i.sku_code.clone().unwrap_or_else(|| "-".to_string());
                                    let place = i.warehouse_name.clone().unwrap_or_default();
                                    (i.id.clone(), format!("{} {}", sku, place))
                                }).collect::<Vec<_>>()
                            }))
                            on_change=Callback::new(move |v| item_choice.set(v))
                        />
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Threshold"</Label>
                            <Input value=item_input placeholder="e.g. 5" />
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save_product()
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Save"
                        </Button>
                    </Flex>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Item"</TableHeaderCell>
                                <TableHeaderCell>"Threshold"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || data.with(|d| d.product_rows.clone())
                                key=|row| (row.id.clone(), row.threshold)
                                children=move |row| {
                                    let id = row.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{item_label(&row.item_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.threshold}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {id.map(|id| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| remove_product(id.clone())
                                                            disabled=Signal::derive(move || saving.get())
                                                        >
                                                            "Remove"
                                                        </Button>
                                                    })}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_bounds() {
        assert_eq!(parse_threshold("12"), Ok(12));
        assert!(parse_threshold("0").is_err());
        assert!(parse_threshold("abc").is_err());
    }
}

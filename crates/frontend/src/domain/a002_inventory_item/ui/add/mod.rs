//! Add Inventory page: SKU chain, quantity and warehouse, one create per submit.

use crate::domain::a001_location::ui::LocationCascadeSelector;
use crate::domain::a002_inventory_item::api;
use crate::domain::a003_sku::api as sku_api;
use crate::shared::components::ui::Select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_inventory_item::{InventoryForm, InventoryFormAction, MAX_QUANTITY};
use contracts::domain::a003_sku::{
    derive_options, DerivedOptions, ProjectType, SkuAutofill, SkuRecord,
};
use contracts::shared::location::{LocationCascade, LocationLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn string_options(values: &[String]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.clone(), v.clone())).collect()
}

#[component]
pub fn AddInventoryPage() -> impl IntoView {
    let form = RwSignal::new(InventoryForm::new());
    let skus = RwSignal::new(Vec::<SkuRecord>::new());
    let project_types = RwSignal::new(Vec::<ProjectType>::new());
    let cascade = RwSignal::new(LocationCascade::warehouse());
    let quantity = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    spawn_local(async move {
        match sku_api::fetch_skus().await {
            Ok(list) => {
                log::debug!("Loaded {} SKUs", list.len());
                skus.set(list);
            }
            Err(e) => {
                log::error!("Failed to load SKUs: {}", e);
                set_error.set(Some(format!("Failed to load SKUs: {}", e)));
            }
        }
        match sku_api::fetch_project_types().await {
            Ok(list) => project_types.set(list),
            Err(e) => log::warn!("Failed to load project types: {}", e),
        }
        set_loading.set(false);
    });

    Effect::new(move |_| {
        let value = quantity.get();
        if form.with_untracked(|f| f.quantity != value) {
            form.update(|f| f.reduce(InventoryFormAction::SetQuantity(value)));
        }
    });

    let derived = Memo::new(move |_| {
        form.with(|f| {
            skus.with(|s| project_types.with(|pts| derive_options(s, &f.filter, pts)))
        })
    });

    let dispatch = move |action: InventoryFormAction| {
        set_success.set(None);
        form.update(|f| f.reduce(action));
    };

    let on_warehouse_change = Callback::new(move |_level: LocationLevel| {
        let (state_id, cluster_id, district_id) = cascade.with_untracked(|c| {
            let first = |level| c.selected_ids(level).into_iter().next();
            (
                first(LocationLevel::State),
                first(LocationLevel::Cluster),
                first(LocationLevel::District),
            )
        });
        dispatch(InventoryFormAction::SetWarehouse {
            state_id,
            cluster_id,
            district_id,
        });
    });

    let pick_sku = move |code: String| {
        let fill = skus.with_untracked(|s| {
            project_types.with_untracked(|pts| SkuAutofill::from_sku(s, &code, pts))
        });
        match fill {
            Some(fill) => dispatch(InventoryFormAction::PickSku(fill)),
            None => dispatch(InventoryFormAction::ClearSku),
        }
    };

    let submit = move || {
        set_error.set(None);
        set_success.set(None);
        let dto = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(dto)) => dto,
            Some(Err(e)) => {
                set_error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        let submission_id = form.with_untracked(|f| f.submission_id);

        spawn_local(async move {
            let result = api::create_item(&dto, submission_id).await;
            match &result {
                Ok(()) => {
                    log::info!("Inventory item {} x{} created", dto.sku_code, dto.quantity);
                    set_success.set(Some(format!(
                        "Added {} units of {}",
                        dto.quantity, dto.sku_code
                    )));
                    quantity.set(String::new());
                    cascade.update(|c| c.clear());
                }
                Err(e) => {
                    log::error!("Failed to create inventory item: {}", e);
                    set_error.set(Some(e.clone()));
                }
            }
            form.try_update(|f| f.finish_submit(&result));
        });
    };

    let filter_value = move |get: fn(&InventoryForm) -> Option<String>| {
        Signal::derive(move || form.with(|f| get(f).unwrap_or_default()))
    };

    view! {
        <PageFrame page_id="a002_inventory_item--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Add Inventory"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || loading.get()>
                        <Spinner size=SpinnerSize::Small />
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=Signal::derive(move || form.with(|f| f.submitting) || loading.get())
                    >
                        {move || if form.with(|f| f.submitting) { "Saving..." } else { "Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            dispatch(InventoryFormAction::Reset);
                            quantity.set(String::new());
                            cascade.update(|c| c.clear());
                        }
                        disabled=Signal::derive(move || form.with(|f| f.submitting))
                    >
                        "Reset"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}

                <div class="form-section">
                    <h3 class="form-section__title">"Product"</h3>
                    <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                        <Select
                            label="Brand".to_string()
                            value=filter_value(|f| f.filter.brand.clone())
                            options=Signal::derive(move || derived.with(|d| string_options(&d.brands)))
                            on_change=Callback::new(move |v: String| dispatch(InventoryFormAction::SetBrand(Some(v))))
                        />
                        <Select
                            label="Project type".to_string()
                            value=filter_value(|f| f.filter.project_type_id.clone())
                            options=Signal::derive(move || derived.with(|d| {
                                d.project_types.iter().map(|pt| (pt.id.clone(), pt.name.clone())).collect::<Vec<_>>()
                            }))
                            on_change=Callback::new(move |v: String| dispatch(InventoryFormAction::SetProjectType(Some(v))))
                        />
                        <Select
                            label="Product type".to_string()
                            value=filter_value(|f| f.filter.product_type.clone())
                            options=Signal::derive(move || derived.with(|d| string_options(&d.product_types)))
                            on_change=Callback::new(move |v: String| dispatch(InventoryFormAction::SetProductType(Some(v))))
                        />
                        <Select
                            label="Technology".to_string()
                            value=filter_value(|f| f.filter.technology.clone())
                            options=Signal::derive(move || derived.with(|d| string_options(&d.technologies)))
                            on_change=Callback::new(move |v: String| dispatch(InventoryFormAction::SetTechnology(Some(v))))
                        />
                        <Select
                            label="Wattage".to_string()
                            value=filter_value(|f| f.filter.wattage.clone())
                            options=Signal::derive(move || derived.with(|d| string_options(&d.wattages)))
                            on_change=Callback::new(move |v: String| dispatch(InventoryFormAction::SetWattage(Some(v))))
                        />
                        <Select
                            label="SKU".to_string()
                            value=Signal::derive(move || form.with(|f| {
                                f.sku.as_ref().map(|s| s.sku_code.clone()).unwrap_or_default()
                            }))
                            options=Signal::derive(move || derived.with(DerivedOptions::sku_choices))
                            on_change=Callback::new(pick_sku)
                        />
                    </Flex>
                    <Show when=move || !loading.get() && !derived.with(|d| d.has_matches())>
                        <div class="alert alert--warning">
                            "No SKU matches this combination. Change one of the filters above."
                        </div>
                    </Show>
                    {move || form.with(|f| f.sku.clone()).map(|sku| view! {
                        <div class="form__hint">
                            {sku.name.clone().unwrap_or_else(|| sku.sku_code.clone())}
                            {sku.sub_category.clone().map(|c| format!(" ({})", c))}
                        </div>
                    })}
                </div>

                <div class="form-section">
                    <h3 class="form-section__title">"Stock"</h3>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>{format!("Quantity (1 - {})", MAX_QUANTITY)}</Label>
                        <Input value=quantity placeholder="Units received" />
                    </Flex>
                </div>

                <div class="form-section">
                    <h3 class="form-section__title">"Warehouse"</h3>
                    <LocationCascadeSelector cascade=cascade on_change=on_warehouse_change />
                </div>
            </div>
        </PageFrame>
    }
}

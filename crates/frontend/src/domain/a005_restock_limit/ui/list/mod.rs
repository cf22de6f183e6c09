pub mod state;

use self::state::create_state;
use crate::domain::a001_location::api::preset_levels;
use crate::domain::a001_location::ui::LocationCascadeSelector;
use crate::domain::a002_inventory_item::api as inventory_api;
use crate::domain::a003_sku::api as sku_api;
use crate::domain::a005_restock_limit::api;
use crate::shared::components::ui::Select;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_restock_limit::{RestockLimit, RestockLimitDto, RestockStatus};
use contracts::shared::location::{LocationCascade, LocationLevel, Selection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for RestockLimit {
    fn search_text(&self) -> String {
        format!("{} {}", self.sku_code, self.location_label()).to_lowercase()
    }
}

fn status_badge(status: RestockStatus) -> AnyView {
    let (color, text) = match status {
        RestockStatus::BelowMinimum => (BadgeColor::Danger, "Below minimum"),
        RestockStatus::WithinLimits => (BadgeColor::Success, "OK"),
        RestockStatus::AboveMaximum => (BadgeColor::Warning, "Above maximum"),
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{text}</Badge> }.into_any()
}

#[component]
fn RestockLimitForm(
    dto: RestockLimitDto,
    sku_codes: Signal<Vec<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = dto.id.clone();
    let is_edit = id.is_some();
    let cascade = RwSignal::new(LocationCascade::warehouse());
    let sku = RwSignal::new(dto.sku_code.clone());
    let min_quantity = RwSignal::new(dto.min_quantity.clone());
    let max_quantity = RwSignal::new(dto.max_quantity.clone());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    if is_edit {
        let seeded = [
            (LocationLevel::State, &dto.state_id),
            (LocationLevel::Cluster, &dto.cluster_id),
            (LocationLevel::District, &dto.district_id),
        ]
        .into_iter()
        .filter_map(|(level, id)| id.clone().map(|id| (level, Selection::one(id))))
        .collect::<Vec<_>>();
        preset_levels(cascade, seeded);
    }

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = cascade.with_untracked(|c| {
            let first = |level| c.selected_ids(level).into_iter().next();
            RestockLimitDto {
                id: id.clone(),
                state_id: first(LocationLevel::State),
                cluster_id: first(LocationLevel::Cluster),
                district_id: first(LocationLevel::District),
                sku_code: sku.get_untracked(),
                min_quantity: min_quantity.get_untracked(),
                max_quantity: max_quantity.get_untracked(),
            }
        });
        let payload = match draft.validate() {
            Ok(p) => p,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::save_limit(draft.id.as_deref(), &payload).await {
                Ok(()) => {
                    log::info!("Restock limit for {} saved", payload.sku_code);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save restock limit: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">
                {if is_edit { "Edit restock limit" } else { "New restock limit" }}
            </h3>
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
            <LocationCascadeSelector cascade=cascade manual_start=is_edit />
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Select
                    label="SKU".to_string()
                    value=sku
                    options=Signal::derive(move || {
                        sku_codes.get().into_iter().map(|c| (c.clone(), c)).collect::<Vec<_>>()
                    })
                    on_change=Callback::new(move |v| sku.set(v))
                />
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Minimum"</Label>
                    <Input value=min_quantity placeholder="0" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Maximum"</Label>
                    <Input value=max_quantity placeholder="100" />
                </Flex>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </Flex>
        </div>
    }
}

#[component]
pub fn RestockLimitList() -> impl IntoView {
    let state = create_state();
    let sku_codes = RwSignal::new(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_limits().await {
                Ok(limits) => {
                    log::debug!("Loaded {} restock limits", limits.len());
                    state.update(|s| {
                        s.limits = limits;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load restock limits: {}", e);
                    set_error.set(Some(e));
                }
            }
            match inventory_api::fetch_items().await {
                Ok(items) => state.update(|s| s.items = items),
                Err(e) => log::warn!("Failed to load stock for restock limits: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    spawn_local(async move {
        match sku_api::fetch_skus().await {
            Ok(skus) => {
                let mut codes: Vec<String> = skus.into_iter().filter_map(|s| s.sku_code).collect();
                codes.sort();
                codes.dedup();
                sku_codes.set(codes);
            }
            Err(e) => log::warn!("Failed to load SKUs: {}", e),
        }
    });

    let remove = move |id: String| {
        spawn_local(async move {
            match api::delete_limit(&id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("Failed to delete restock limit: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let close_form = Callback::new(move |_| state.update(|s| s.editing = None));
    let saved = Callback::new(move |_| {
        state.update(|s| s.editing = None);
        load();
    });

    let visible = Memo::new(move |_| state.with(|s| filter_list(&s.limits, &s.search_query)));
    let editing = Memo::new(move |_| state.with(|s| s.editing.clone()));

    view! {
        <PageFrame page_id="a005_restock_limit--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Restock Limits"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.editing = Some(RestockLimitDto::default()))
                    >
                        "New"
                    </Button>
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

                // Re-mounted per opened record so the cascade is seeded afresh.
                {move || editing.get().map(|dto| view! {
                    <RestockLimitForm
                        dto=dto
                        sku_codes=sku_codes.into()
                        on_saved=saved
                        on_cancel=close_form
                    />
                })}

                <div class="filter-panel">
                    <SearchInput
                        placeholder="SKU or location..."
                        on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Warehouse"</TableHeaderCell>
                                <TableHeaderCell>"Min"</TableHeaderCell>
                                <TableHeaderCell>"Max"</TableHeaderCell>
                                <TableHeaderCell>"On hand"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Suggested order"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|limit| (limit.id.clone(), limit.min_quantity, limit.max_quantity)
                                children=move |limit| {
                                    let on_hand = state.with_untracked(|s| limit.on_hand(&s.items));
                                    let edit_dto = RestockLimitDto::from_limit(&limit);
                                    let id = limit.id.clone();
                                    let sku_code = limit.sku_code.clone();
                                    let location = limit.location_label();
                                    let min_quantity = limit.min_quantity;
                                    let max_quantity = limit.max_quantity;
                                    let status = limit.status_for(on_hand);
                                    let suggested = limit.suggested_order(on_hand);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace;">{sku_code}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{location}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{min_quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{max_quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{on_hand}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{suggested}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            let dto = edit_dto.clone();
                                                            state.update(|s| s.editing = Some(dto));
                                                        }
                                                    >
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| remove(id.clone())
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </Flex>
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

pub mod state;

use self::state::create_state;
use crate::domain::a001_location::ui::LocationCascadeSelector;
use crate::domain::a007_dealer::api;
use crate::shared::components::status_actions::{
    status_from_option, status_option_value, status_options, StatusActions, StatusBadge,
};
use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_dealer::{Dealer, DealerDto, KycStatus};
use contracts::shared::location::{LocationCascade, LocationLevel};
use contracts::shared::status_flow::StatusFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for Dealer {
    fn search_text(&self) -> String {
        [
            Some(self.business_name.as_str()),
            Some(self.owner_name.as_str()),
            Some(self.phone.as_str()),
            self.gst_number.as_deref(),
            self.district_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

#[component]
fn DealerForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let business_name = RwSignal::new(String::new());
    let owner_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let gst_number = RwSignal::new(String::new());
    let pan_number = RwSignal::new(String::new());
    let cascade = RwSignal::new(LocationCascade::standard().upto(LocationLevel::District));
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let (state_id, district_id) = cascade.with_untracked(|c| {
            (
                c.selected_ids(LocationLevel::State).into_iter().next(),
                c.selected_ids(LocationLevel::District).into_iter().next(),
            )
        });
        let draft = DealerDto {
            id: None,
            business_name: business_name.get_untracked(),
            owner_name: owner_name.get_untracked(),
            phone: phone.get_untracked(),
            email: Some(email.get_untracked()),
            gst_number: Some(gst_number.get_untracked()),
            pan_number: Some(pan_number.get_untracked()),
            state_id,
            district_id,
        };
        let dto = match draft.validate() {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_dealer(&dto).await {
                Ok(()) => {
                    log::info!("Dealer {} created", dto.business_name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create dealer: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">"New dealer"</h3>
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Business name"</Label>
                    <Input value=business_name />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Owner"</Label>
                    <Input value=owner_name />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Phone"</Label>
                    <Input value=phone placeholder="10-digit mobile" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Email"</Label>
                    <Input value=email />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"PAN"</Label>
                    <Input value=pan_number placeholder="ABCDE1234F" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"GSTIN"</Label>
                    <Input value=gst_number placeholder="15 characters" />
                </Flex>
            </Flex>
            <LocationCascadeSelector cascade=cascade />
            <Flex gap=FlexGap::Small>
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
pub fn DealerList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_dealers().await {
                Ok(dealers) => {
                    log::debug!("Loaded {} dealers", dealers.len());
                    state.update(|s| {
                        s.dealers = dealers;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load dealers: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let change_kyc = move |dealer: Dealer, next: KycStatus| {
        if next == KycStatus::Submitted && !dealer.can_submit_kyc() {
            set_error.set(Some(format!(
                "{}: missing documents {}",
                dealer.business_name,
                dealer.missing_documents().join(", ")
            )));
            return;
        }
        let dto = match dealer.kyc_status.transition(next, None) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::update_kyc_status(&dealer.id, &dto).await {
                Ok(()) => {
                    log::info!("Dealer {} KYC moved to {}", dealer.id, next.label());
                    load();
                }
                Err(e) => {
                    log::error!("Failed to update KYC status: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_busy.set(false);
        });
    };

    let toggle_active = move |id: String, is_active: bool| {
        set_busy.set(true);
        spawn_local(async move {
            match api::set_active(&id, is_active).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("Failed to change dealer activity: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_busy.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        state.with(|s| {
            filter_list(&s.dealers, &s.search_query)
                .into_iter()
                .filter(|d| s.show_inactive || d.is_active)
                .filter(|d| s.kyc_filter.map_or(true, |k| d.kyc_status == k))
                .collect::<Vec<_>>()
        })
    });
    let show_form = Memo::new(move |_| state.with(|s| s.show_form));

    view! {
        <PageFrame page_id="a007_dealer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dealers"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.show_form = true)
                    >
                        "New dealer"
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

                <Show when=move || show_form.get()>
                    <DealerForm
                        on_saved=Callback::new(move |_| {
                            state.update(|s| s.show_form = false);
                            load();
                        })
                        on_cancel=Callback::new(move |_| state.update(|s| s.show_form = false))
                    />
                </Show>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            placeholder="Business, owner, GSTIN..."
                            on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                        />
                        <Select
                            label="KYC".to_string()
                            placeholder="All".to_string()
                            value=Signal::derive(move || state.with(|s| status_option_value(s.kyc_filter)))
                            options=Signal::derive(status_options::<KycStatus>)
                            on_change=Callback::new(move |v: String| {
                                state.update(|s| s.kyc_filter = status_from_option(&v))
                            })
                        />
                        <Checkbox
                            label="Show inactive".to_string()
                            checked=Signal::derive(move || state.with(|s| s.show_inactive))
                            on_change=Callback::new(move |v| state.update(|s| s.show_inactive = v))
                        />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Business"</TableHeaderCell>
                                <TableHeaderCell>"Owner"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"District"</TableHeaderCell>
                                <TableHeaderCell>"GSTIN"</TableHeaderCell>
                                <TableHeaderCell>"Documents"</TableHeaderCell>
                                <TableHeaderCell>"KYC"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|d| (d.id.clone(), d.kyc_status, d.is_active)
                                children=move |dealer| {
                                    let missing = dealer.missing_documents();
                                    let for_kyc = dealer.clone();
                                    let id = dealer.id.clone();
                                    let is_active = dealer.is_active;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{dealer.business_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{dealer.owner_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{dealer.phone.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>{dealer.district_name.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace;">
                                                        {dealer.gst_number.clone().unwrap_or_else(|| "-".to_string())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if missing.is_empty() {
                                                        view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Complete"</Badge>
                                                        }.into_any()
                                                    } else {
                                                        view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                                                {format!("Missing: {}", missing.join(", "))}
                                                            </Badge>
                                                        }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge status=dealer.kyc_status /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Checkbox
                                                    label=String::new()
                                                    checked=is_active
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_change=Callback::new(move |v| toggle_active(id.clone(), v))
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <StatusActions
                                                    status=dealer.kyc_status
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_select=Callback::new(move |next| change_kyc(for_kyc.clone(), next))
                                                />
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

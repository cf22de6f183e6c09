pub mod state;

use self::state::create_state;
use crate::domain::a001_location::ui::LocationCascadeSelector;
use crate::domain::a006_lead::api;
use crate::domain::a007_dealer::api as dealer_api;
use crate::shared::components::status_actions::{
    status_from_option, status_option_value, status_options, StatusActions, StatusBadge,
};
use crate::shared::components::ui::Select;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_lead::{Lead, LeadDto, LeadStatus};
use contracts::shared::location::{LocationCascade, LocationLevel};
use contracts::shared::status_flow::StatusFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for Lead {
    fn search_text(&self) -> String {
        [
            Some(self.name.as_str()),
            Some(self.phone.as_str()),
            self.email.as_deref(),
            self.city_name.as_deref(),
            self.source.as_deref(),
            self.assigned_dealer_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

#[component]
fn LeadForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let source = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let cascade = RwSignal::new(LocationCascade::standard().upto(LocationLevel::City));
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let (state_id, district_id, city_id) = cascade.with_untracked(|c| {
            let first = |level| c.selected_ids(level).into_iter().next();
            (
                first(LocationLevel::State),
                first(LocationLevel::District),
                first(LocationLevel::City),
            )
        });
        let draft = LeadDto {
            id: None,
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: Some(email.get_untracked()),
            state_id,
            district_id,
            city_id,
            source: Some(source.get_untracked()),
            notes: Some(notes.get_untracked()),
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
            match api::create_lead(&dto).await {
                Ok(()) => {
                    log::info!("Lead {} created", dto.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create lead: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">"New lead"</h3>
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Name"</Label>
                    <Input value=name />
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
                    <Label>"Source"</Label>
                    <Input value=source placeholder="Website, referral..." />
                </Flex>
            </Flex>
            <LocationCascadeSelector cascade=cascade />
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Notes"</Label>
                <Input value=notes />
            </Flex>
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
pub fn LeadList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_leads().await {
                Ok(leads) => {
                    log::debug!("Loaded {} leads", leads.len());
                    state.update(|s| {
                        s.leads = leads;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load leads: {}", e);
                    set_error.set(Some(e));
                }
            }
            match dealer_api::fetch_dealers().await {
                Ok(dealers) => state.update(|s| s.dealers = dealers),
                Err(e) => log::warn!("Failed to load dealers for assignment: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let change_status = move |lead: Lead, next: LeadStatus| {
        let dto = match lead.status.transition(next, None) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::update_status(&lead.id, &dto).await {
                Ok(()) => {
                    log::info!("Lead {} moved to {}", lead.id, next.label());
                    load();
                }
                Err(e) => {
                    log::error!("Failed to update lead status: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_busy.set(false);
        });
    };

    let assign = move |lead_id: String, dealer_id: String| {
        if dealer_id.is_empty() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::assign_dealer(&lead_id, &dealer_id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("Failed to assign lead: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_busy.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        state.with(|s| {
            filter_list(&s.leads, &s.search_query)
                .into_iter()
                .filter(|l| s.status_filter.map_or(true, |st| l.status == st))
                .collect::<Vec<_>>()
        })
    });
    let dealer_options = Memo::new(move |_| {
        state.with(|s| {
            s.dealers
                .iter()
                .filter(|d| d.is_active)
                .map(|d| (d.id.clone(), d.business_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let show_form = Memo::new(move |_| state.with(|s| s.show_form));

    view! {
        <PageFrame page_id="a006_lead--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Leads"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.show_form = true)
                    >
                        "New lead"
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
                    <LeadForm
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
                            placeholder="Name, phone, city..."
                            on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                        />
                        <Select
                            label="Status".to_string()
                            placeholder="All".to_string()
                            value=Signal::derive(move || state.with(|s| status_option_value(s.status_filter)))
                            options=Signal::derive(status_options::<LeadStatus>)
                            on_change=Callback::new(move |v: String| {
                                state.update(|s| s.status_filter = status_from_option(&v))
                            })
                        />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"City"</TableHeaderCell>
                                <TableHeaderCell>"Source"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Dealer"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|lead| (lead.id.clone(), lead.status, lead.assigned_dealer_id.clone())
                                children=move |lead| {
                                    let for_status = lead.clone();
                                    let lead_id = lead.id.clone();
                                    let current_dealer = lead.assigned_dealer_id.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{lead.name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{lead.phone.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>{lead.city_name.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{lead.source.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge status=lead.status /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Select
                                                    placeholder="Unassigned".to_string()
                                                    value=Signal::derive(move || current_dealer.clone())
                                                    options=dealer_options
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_change=Callback::new(move |v: String| assign(lead_id.clone(), v))
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <StatusActions
                                                    status=lead.status
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_select=Callback::new(move |next| change_status(for_status.clone(), next))
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

pub mod state;

use self::state::create_state;
use crate::domain::a007_dealer::api as dealer_api;
use crate::domain::a008_service_ticket::api;
use crate::shared::components::status_actions::{
    status_from_option, status_option_value, status_options, StatusActions, StatusBadge,
};
use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Utc;
use contracts::domain::a008_service_ticket::{
    ServiceTicket, ServiceTicketDto, TicketPriority, TicketStatus,
};
use contracts::shared::status_flow::StatusFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for ServiceTicket {
    fn search_text(&self) -> String {
        [
            Some(self.display_number()),
            Some(self.customer_name.as_str()),
            Some(self.customer_phone.as_str()),
            self.dealer_name.as_deref(),
            self.sku_code.as_deref(),
            Some(self.issue.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

fn priority_options() -> Vec<(String, String)> {
    TicketPriority::ALL
        .iter()
        .map(|p| (p.key().to_string(), p.label().to_string()))
        .collect()
}

fn priority_color(priority: TicketPriority) -> BadgeColor {
    match priority {
        TicketPriority::Critical => BadgeColor::Danger,
        TicketPriority::High => BadgeColor::Warning,
        TicketPriority::Medium => BadgeColor::Informative,
        TicketPriority::Low => BadgeColor::Subtle,
    }
}

#[component]
fn ServiceTicketForm(
    dealer_options: Signal<Vec<(String, String)>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dealer_id = RwSignal::new(String::new());
    let customer_name = RwSignal::new(String::new());
    let customer_phone = RwSignal::new(String::new());
    let sku_code = RwSignal::new(String::new());
    let issue = RwSignal::new(String::new());
    let priority = RwSignal::new(TicketPriority::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = ServiceTicketDto {
            dealer_id: Some(dealer_id.get_untracked()),
            customer_name: customer_name.get_untracked(),
            customer_phone: customer_phone.get_untracked(),
            sku_code: Some(sku_code.get_untracked()),
            issue: issue.get_untracked(),
            priority: priority.get_untracked(),
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
            match api::create_ticket(&dto).await {
                Ok(()) => {
                    log::info!("Service ticket for {} created", dto.customer_name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create service ticket: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">"New service ticket"</h3>
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                <Select
                    label="Dealer".to_string()
                    value=dealer_id
                    options=dealer_options
                    on_change=Callback::new(move |v| dealer_id.set(v))
                />
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Customer"</Label>
                    <Input value=customer_name />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Customer phone"</Label>
                    <Input value=customer_phone placeholder="10-digit mobile" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"SKU"</Label>
                    <Input value=sku_code />
                </Flex>
                <Select
                    label="Priority".to_string()
                    value=Signal::derive(move || priority.get().key().to_string())
                    options=Signal::derive(priority_options)
                    on_change=Callback::new(move |v: String| {
                        priority.set(TicketPriority::from_key(&v).unwrap_or_default())
                    })
                />
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Issue"</Label>
                <Input value=issue placeholder="What is wrong with the installation?" />
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
pub fn ServiceTicketList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_tickets().await {
                Ok(tickets) => {
                    log::debug!("Loaded {} service tickets", tickets.len());
                    state.update(|s| {
                        s.tickets = tickets;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load service tickets: {}", e);
                    set_error.set(Some(e));
                }
            }
            match dealer_api::fetch_dealers().await {
                Ok(dealers) => state.update(|s| s.dealers = dealers),
                Err(e) => log::warn!("Failed to load dealers for tickets: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let change_status = move |ticket: ServiceTicket, next: TicketStatus| {
        let dto = match ticket.status.transition(next, None) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::update_status(&ticket.id, &dto).await {
                Ok(()) => {
                    log::info!("Ticket {} moved to {}", ticket.display_number(), next.label());
                    load();
                }
                Err(e) => {
                    log::error!("Failed to update ticket status: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_busy.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        let now = Utc::now();
        state.with(|s| {
            let mut rows: Vec<ServiceTicket> = filter_list(&s.tickets, &s.search_query)
                .into_iter()
                .filter(|t| s.status_filter.map_or(true, |st| t.status == st))
                .filter(|t| s.priority_filter.map_or(true, |p| t.priority == p))
                .filter(|t| !s.overdue_only || t.is_overdue(now))
                .collect();
            // Most urgent first, oldest first within a priority.
            rows.sort_by(|a, b| {
                b.priority
                    .cmp(&a.priority)
                    .then_with(|| a.created_at.cmp(&b.created_at))
            });
            rows
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
        <PageFrame page_id="a008_service_ticket--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Service Tickets"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.show_form = true)
                    >
                        "New ticket"
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
                    <ServiceTicketForm
                        dealer_options=dealer_options.into()
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
                            placeholder="Ticket, customer, dealer..."
                            on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                        />
                        <Select
                            label="Status".to_string()
                            placeholder="All".to_string()
                            value=Signal::derive(move || state.with(|s| status_option_value(s.status_filter)))
                            options=Signal::derive(status_options::<TicketStatus>)
                            on_change=Callback::new(move |v: String| {
                                state.update(|s| s.status_filter = status_from_option(&v))
                            })
                        />
                        <Select
                            label="Priority".to_string()
                            placeholder="All".to_string()
                            value=Signal::derive(move || {
                                state.with(|s| s.priority_filter.map(|p| p.key().to_string()).unwrap_or_default())
                            })
                            options=Signal::derive(priority_options)
                            on_change=Callback::new(move |v: String| {
                                state.update(|s| s.priority_filter = TicketPriority::from_key(&v))
                            })
                        />
                        <Checkbox
                            label="Overdue only".to_string()
                            checked=Signal::derive(move || state.with(|s| s.overdue_only))
                            on_change=Callback::new(move |v| state.update(|s| s.overdue_only = v))
                        />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Ticket"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Dealer"</TableHeaderCell>
                                <TableHeaderCell>"Issue"</TableHeaderCell>
                                <TableHeaderCell>"Priority"</TableHeaderCell>
                                <TableHeaderCell>"Opened"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|t| (t.id.clone(), t.status)
                                children=move |ticket| {
                                    let overdue = ticket.is_overdue(Utc::now());
                                    let for_status = ticket.clone();
                                    let display_number = ticket.display_number().to_string();
                                    let customer = format!("{} ({})", ticket.customer_name, ticket.customer_phone);
                                    let dealer = ticket.dealer_name.clone().unwrap_or_else(|| "-".to_string());
                                    let issue = ticket.issue.clone();
                                    let priority = ticket.priority;
                                    let created = ticket
                                        .created_at
                                        .map(|d| d.format("%d.%m.%Y %H:%M").to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let status = ticket.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace;">{display_number}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {customer}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {dealer}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{issue}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=priority_color(priority)>
                                                        {priority.label()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {created}
                                                    {overdue.then(|| view! {
                                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Overdue"</Badge>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge status=status /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusActions
                                                    status=status
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

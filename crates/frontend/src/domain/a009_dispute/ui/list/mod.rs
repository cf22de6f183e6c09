pub mod state;

use self::state::create_state;
use crate::domain::a007_dealer::api as dealer_api;
use crate::domain::a009_dispute::api;
use crate::shared::components::status_actions::{
    status_from_option, status_option_value, status_options, StatusActions, StatusBadge,
};
use crate::shared::components::ui::Select;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a009_dispute::{Dispute, DisputeDto, DisputeStatus, SettlementDto};
use contracts::shared::status_flow::StatusFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for Dispute {
    fn search_text(&self) -> String {
        [
            Some(self.display_number()),
            self.dealer_name.as_deref(),
            self.ticket_id.as_deref(),
            Some(self.reason.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

fn format_amount(value: f64) -> String {
    format!("₹{:.2}", value)
}

#[component]
fn DisputeForm(
    dealer_options: Signal<Vec<(String, String)>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dealer_id = RwSignal::new(String::new());
    let ticket_id = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = DisputeDto {
            dealer_id: Some(dealer_id.get_untracked()).filter(|d| !d.is_empty()),
            ticket_id: Some(ticket_id.get_untracked().trim().to_string()),
            reason: reason.get_untracked(),
            claimed_amount: amount.get_untracked(),
        };
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
            match api::create_dispute(&payload).await {
                Ok(()) => {
                    log::info!("Dispute for dealer {} raised", payload.dealer_id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to raise dispute: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">"Raise dispute"</h3>
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                <Select
                    label="Dealer".to_string()
                    value=dealer_id
                    options=dealer_options
                    on_change=Callback::new(move |v| dealer_id.set(v))
                />
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Service ticket (optional)"</Label>
                    <Input value=ticket_id />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Claimed amount"</Label>
                    <Input value=amount placeholder="e.g. 12,500" />
                </Flex>
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Reason"</Label>
                <Input value=reason />
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
fn SettlementPanel(dispute: Dispute, on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let amount = RwSignal::new(format!("{:.2}", dispute.claimed_amount));
    let remark = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let title = format!(
        "Settle {} (claimed {})",
        dispute.display_number(),
        format_amount(dispute.claimed_amount)
    );

    let confirm = move || {
        if saving.get_untracked() {
            return;
        }
        let dto = match SettlementDto::for_dispute(
            &dispute,
            &amount.get_untracked(),
            Some(remark.get_untracked()),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let id = dispute.id.clone();
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::settle(&id, &dto).await {
                Ok(()) => {
                    log::info!("Dispute {} settled for {:.2}", id, dto.settled_amount);
                    on_done.run(());
                }
                Err(e) => {
                    log::error!("Failed to settle dispute: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">{title}</h3>
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Settled amount"</Label>
                    <Input value=amount />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Remark"</Label>
                    <Input value=remark />
                </Flex>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| confirm()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Settle"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </Flex>
        </div>
    }
}

#[component]
pub fn DisputeList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_disputes().await {
                Ok(disputes) => {
                    log::debug!("Loaded {} disputes", disputes.len());
                    state.update(|s| {
                        s.disputes = disputes;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load disputes: {}", e);
                    set_error.set(Some(e));
                }
            }
            match dealer_api::fetch_dealers().await {
                Ok(dealers) => state.update(|s| s.dealers = dealers),
                Err(e) => log::warn!("Failed to load dealers for disputes: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let change_status = move |dispute: Dispute, next: DisputeStatus| {
        // Settling needs an amount, collected in the settlement panel.
        if next == DisputeStatus::Settled {
            state.update(|s| s.settling = Some(dispute));
            return;
        }
        let dto = match dispute.status.transition(next, None) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::update_status(&dispute.id, &dto).await {
                Ok(()) => {
                    log::info!("Dispute {} moved to {}", dispute.display_number(), next.label());
                    load();
                }
                Err(e) => {
                    log::error!("Failed to update dispute status: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_busy.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        state.with(|s| {
            filter_list(&s.disputes, &s.search_query)
                .into_iter()
                .filter(|d| s.status_filter.map_or(true, |st| d.status == st))
                .collect::<Vec<_>>()
        })
    });
    let outstanding = Memo::new(move |_| visible.with(|v| v.iter().map(Dispute::outstanding).sum::<f64>()));
    let dealer_options = Memo::new(move |_| {
        state.with(|s| {
            s.dealers
                .iter()
                .map(|d| (d.id.clone(), d.business_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let show_form = Memo::new(move |_| state.with(|s| s.show_form));
    let settling = Memo::new(move |_| state.with(|s| s.settling.clone()));

    view! {
        <PageFrame page_id="a009_dispute--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Disputes"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                        {move || format!("Outstanding {}", format_amount(outstanding.get()))}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.show_form = true)
                    >
                        "Raise dispute"
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
                    <DisputeForm
                        dealer_options=dealer_options.into()
                        on_saved=Callback::new(move |_| {
                            state.update(|s| s.show_form = false);
                            load();
                        })
                        on_cancel=Callback::new(move |_| state.update(|s| s.show_form = false))
                    />
                </Show>

                {move || settling.get().map(|dispute| view! {
                    <SettlementPanel
                        dispute=dispute
                        on_done=Callback::new(move |_| {
                            state.update(|s| s.settling = None);
                            load();
                        })
                        on_cancel=Callback::new(move |_| state.update(|s| s.settling = None))
                    />
                })}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            placeholder="Dispute, dealer, reason..."
                            on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                        />
                        <Select
                            label="Status".to_string()
                            placeholder="All".to_string()
                            value=Signal::derive(move || state.with(|s| status_option_value(s.status_filter)))
                            options=Signal::derive(status_options::<DisputeStatus>)
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
                                <TableHeaderCell>"Dispute"</TableHeaderCell>
                                <TableHeaderCell>"Dealer"</TableHeaderCell>
                                <TableHeaderCell>"Reason"</TableHeaderCell>
                                <TableHeaderCell>"Claimed"</TableHeaderCell>
                                <TableHeaderCell>"Settled"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|d| (d.id.clone(), d.status)
                                children=move |dispute| {
                                    let for_status = dispute.clone();
                                    let display_number = dispute.display_number().to_string();
                                    let dealer = dispute.dealer_name.clone().unwrap_or_else(|| dispute.dealer_id.clone());
                                    let reason = dispute.reason.clone();
                                    let claimed = format_amount(dispute.claimed_amount);
                                    let settled = dispute.settled_amount.map(format_amount).unwrap_or_else(|| "-".to_string());
                                    let status = dispute.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace;">{display_number}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {dealer}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{reason}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{claimed}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {settled}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12500.0), "₹12500.00");
        assert_eq!(format_amount(0.5), "₹0.50");
    }
}

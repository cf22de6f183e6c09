//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![("d400_stock_summary", "bar-chart")],
            admin_only: false,
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "inventory",
            items: vec![
                ("a002_inventory_overview", "inventory"),
                ("a002_inventory_add", "inventory"),
                ("a005_restock_limit", "inventory"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "network",
            label: "Dealer Network",
            icon: "store",
            items: vec![
                ("a006_lead", "users"),
                ("a007_dealer", "store"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "service",
            label: "Service",
            icon: "wrench",
            items: vec![
                ("a008_service_ticket", "wrench"),
                ("a009_dispute", "alert"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![("a004_stock_threshold", "settings")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_admin = Memo::new(move |_| {
        auth_state.with(|s| s.user_info.as_ref().is_some_and(|u| u.is_admin()))
    });

    let expanded_groups = RwSignal::new(vec!["inventory".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let admin_only = group.admin_only;
                let gid = StoredValue::new(group.id.to_string());
                let is_expanded = move || expanded_groups.with(|g| g.contains(&gid.get_value()));
                let toggle = move |_| {
                    let id = gid.get_value();
                    expanded_groups.update(|items| {
                        if let Some(pos) = items.iter().position(|x| x == &id) {
                            items.remove(pos);
                        } else {
                            items.push(id);
                        }
                    });
                };
                let items = StoredValue::new(group.items.clone());

                view! {
                    <Show when=move || !admin_only || is_admin.get()>
                        <div>
                            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items.get_value().into_iter().map(|(key, icon_name)| {
                                        let label = tab_label_for_key(key);
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.get().as_deref() == Some(key)
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_tab(key, label)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    </Show>
                }
            }).collect_view()}
        </div>
    }
}

//! Dropdowns (single-select levels) and checkbox lists (multi-select levels)
//! for a [`LocationCascade`]. Level order, per-level mode, policy and `upto`
//! come from how the cascade was built.

use contracts::shared::location::{LocationCascade, LocationLevel, Selection};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

use crate::domain::a001_location::api::{select_level, start};
use crate::shared::components::ui::{Checkbox, Select};

#[component]
fn SingleLevel(cascade: RwSignal<LocationCascade>, level: LocationLevel, on_change: Callback<LocationLevel>) -> impl IntoView {
    let value = Signal::derive(move || {
        cascade.with(|c| c.selected_ids(level).into_iter().next().unwrap_or_default())
    });
    let options = Signal::derive(move || {
        cascade.with(|c| {
            c.options(level)
                .iter()
                .map(|n| (n.id.clone(), n.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let disabled = Signal::derive(move || cascade.with(|c| c.options(level).is_empty()));

    view! {
        <Select
            label=level.label().to_string()
            value=value
            options=options
            placeholder=format!("Select {}", level.label())
            disabled=disabled
            on_change=Callback::new(move |id: String| {
                select_level(cascade, level, Selection::Single(Some(id)));
                on_change.run(level);
            })
        />
    }
}

#[component]
fn MultiLevel(cascade: RwSignal<LocationCascade>, level: LocationLevel, on_change: Callback<LocationLevel>) -> impl IntoView {
    let toggle = move |id: String, checked: bool| {
        let mut ids: BTreeSet<String> =
            cascade.with_untracked(|c| c.selected_ids(level).into_iter().collect());
        if checked {
            ids.insert(id);
        } else {
            ids.remove(&id);
        }
        select_level(cascade, level, Selection::Multiple(ids));
        on_change.run(level);
    };

    view! {
        <div class="form__group">
            <label class="form__label">{level.label()}</label>
            <div class="location-cascade__checklist">
                <Show
                    when=move || cascade.with(|c| !c.options(level).is_empty())
                    fallback=|| view! { <span class="location-cascade__empty">"-"</span> }
                >
                    <For
                        each=move || cascade.with(|c| c.options(level).to_vec())
                        key=|node| node.id.clone()
                        children=move |node| {
                            let id = StoredValue::new(node.id.clone());
                            view! {
                                <Checkbox
                                    label=node.name.clone()
                                    checked=Signal::derive(move || {
                                        cascade.with(|c| {
                                            c.selection(level).is_some_and(|s| s.contains(&id.get_value()))
                                        })
                                    })
                                    on_change=Callback::new(move |checked| toggle(id.get_value(), checked))
                                />
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn LocationCascadeSelector(
    cascade: RwSignal<LocationCascade>,
    /// Called with the level the user changed
    #[prop(optional)]
    on_change: Option<Callback<LocationLevel>>,
    /// Skip the root fetch when the caller already started the cascade (e.g. via preset)
    #[prop(optional)]
    manual_start: bool,
) -> impl IntoView {
    if !manual_start {
        start(cascade);
    }
    let on_change = on_change.unwrap_or_else(|| Callback::new(|_| {}));
    let levels = cascade.with_untracked(|c| c.levels());

    view! {
        <div class="location-cascade">
            <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                {levels
                    .into_iter()
                    .map(|level| {
                        let multiple = cascade
                            .with_untracked(|c| c.config(level).is_some_and(|cfg| cfg.multiple));
                        view! {
                            <div class="location-cascade__level">
                                {if multiple {
                                    view! { <MultiLevel cascade=cascade level=level on_change=on_change /> }.into_any()
                                } else {
                                    view! { <SingleLevel cascade=cascade level=level on_change=on_change /> }.into_any()
                                }}
                                <Show when=move || cascade.with(|c| c.is_loading(level))>
                                    <Spinner size=SpinnerSize::Small />
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </Flex>
        </div>
    }
}

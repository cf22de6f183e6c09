//! Status badges, transition buttons and the options of status filters.

use contracts::shared::status_flow::StatusFlow;
use leptos::prelude::*;
use thaw::*;

/// Options keyed by position in `S::all()`.
pub fn status_options<S: StatusFlow>() -> Vec<(String, String)> {
    S::all()
        .iter()
        .enumerate()
        .map(|(idx, s)| (idx.to_string(), s.label().to_string()))
        .collect()
}

pub fn status_from_option<S: StatusFlow>(value: &str) -> Option<S> {
    value.parse::<usize>().ok().and_then(|idx| S::all().get(idx).copied())
}

pub fn status_option_value<S: StatusFlow>(status: Option<S>) -> String {
    status
        .and_then(|s| S::all().iter().position(|x| *x == s))
        .map(|idx| idx.to_string())
        .unwrap_or_default()
}

/// One button per allowed next status; terminal statuses render nothing.
#[component]
pub fn StatusActions<S>(
    status: S,
    /// Called with the chosen next status
    on_select: Callback<S>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView
where
    S: StatusFlow + Send + Sync,
{
    view! {
        <Flex gap=FlexGap::Small>
            {status
                .allowed_next()
                .iter()
                .copied()
                .map(|next| {
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            disabled=disabled
                            on_click=move |_| on_select.run(next)
                        >
                            {next.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}

/// Tinted badge for a status; terminal statuses are shown as finished.
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: StatusFlow + Send + Sync,
{
    let color = if status.is_terminal() {
        BadgeColor::Success
    } else {
        BadgeColor::Brand
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.label()}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_lead::LeadStatus;

    #[test]
    fn test_status_filter_options() {
        let options = status_options::<LeadStatus>();
        assert_eq!(options.len(), LeadStatus::all().len());
        assert_eq!(options[0].1, "New");
        let value = status_option_value(Some(LeadStatus::Qualified));
        assert_eq!(status_from_option::<LeadStatus>(&value), Some(LeadStatus::Qualified));
        assert_eq!(status_from_option::<LeadStatus>(""), None);
        assert_eq!(status_option_value::<LeadStatus>(None), "");
    }
}

/// Search helpers shared by the list screens.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Queries shorter than this do not filter.
pub const MIN_SEARCH_LEN: usize = 3;

/// Types that can be matched against the search box.
pub trait Searchable {
    /// Lowercased text the query is matched against.
    fn search_text(&self) -> String;

    fn matches_filter(&self, filter: &str) -> bool {
        self.search_text().contains(&filter.trim().to_lowercase())
    }
}

pub fn is_active_filter(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_SEARCH_LEN
}

/// Filters a list by the search query
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if !is_active_filter(filter) {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Search input with a 300 ms debounce and a clear button
#[component]
pub fn SearchInput(
    /// Called with the settled query
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} characters)...", MIN_SEARCH_LEN)
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    // Dropping a pending Timeout cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |value: String| {
        set_input_value.set(value.clone());
        let timeout = Timeout::new(300, move || on_change.run(value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input--active=move || is_active_filter(&input_value.get())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn search_text(&self) -> String {
            self.0.to_lowercase()
        }
    }

    #[test]
    fn test_short_query_keeps_everything() {
        let rows = vec![Row("Asha Patel"), Row("Ravi Kumar")];
        assert_eq!(filter_list(&rows, "as"), rows);
        assert_eq!(filter_list(&rows, "  "), rows);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let rows = vec![Row("Asha Patel"), Row("Ravi Kumar")];
        assert_eq!(filter_list(&rows, " KUMAR "), vec![Row("Ravi Kumar")]);
        assert!(filter_list(&rows, "zzz").is_empty());
    }
}

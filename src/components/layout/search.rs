//! Header search form.
//!
//! Submits the current query text to the search view. No validation: an
//! empty query submits as-is and the search view matches everything.
//! Rendered on desktop widths only.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::config::DESKTOP_MEDIA_QUERY;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub(super) fn SearchForm() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        AppRoute::Search {
            query: Some(query.get()),
            category: None,
        }
        .push();
    };

    view! {
        <Show when=move || is_desktop.get()>
            <form class=css::searchForm on:submit=on_submit>
                <input
                    class=css::searchInput
                    type="text"
                    placeholder="Search products"
                    prop:value=move || query.get()
                    on:input=move |event| set_query.set(event_target_value(&event))
                />
                <button class=css::searchButton type="submit" title="Search">
                    <Icon icon=ic::SEARCH />
                </button>
            </form>
        </Show>
    }
}

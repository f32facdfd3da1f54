//! Full-screen category overlay.
//!
//! Opened from the header menu button. Each category links to the search
//! view filtered by that category; following a link closes the overlay in
//! the same handler.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{AppRoute, Category};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub(super) fn CategoryOverlay(set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <div class=css::overlay>
            <button
                class=css::overlayClose
                on:click=move |_| set_open.set(false)
                title="Close"
            >
                <Icon icon=ic::CLOSE />
            </button>
            <div class=css::overlayBody>
                <div class=css::overlayTitle>"Categories"</div>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let target = AppRoute::Search {
                            query: None,
                            category: Some(category),
                        };
                        view! {
                            <a
                                class=css::overlayLink
                                href=target.to_hash()
                                on:click=move |_| set_open.set(false)
                            >
                                {format!("{} {}", category.emoji(), category.label())}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

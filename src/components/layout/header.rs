//! Fixed top navigation bar.
//!
//! Category menu trigger, brand link, search form (desktop), cart link with
//! badge, and the session-aware account area.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::AppRoute;

use super::account::AccountMenu;
use super::search::SearchForm;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub(super) fn Header(set_show_categories: WriteSignal<bool>) -> impl IntoView {
    view! {
        <header class=css::header>
            <nav class=css::nav>
                <div class=css::navLeft>
                    <button
                        class=css::menuButton
                        on:click=move |_| set_show_categories.update(|open| *open = !*open)
                        title="Browse categories"
                    >
                        <Icon icon=ic::MENU />
                    </button>
                    <a class=css::brand href=AppRoute::Home.to_hash()>{APP_NAME}</a>
                </div>

                <SearchForm />

                <div class=css::navRight>
                    <CartLink />
                    <AccountMenu />
                </div>
            </nav>
        </header>
    }
}

/// Cart link with the item-count badge.
///
/// The badge is hidden while the derived count is zero.
#[component]
fn CartLink() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let count = Signal::derive(move || ctx.cart.count());
    let has_items = Signal::derive(move || count.get() > 0);

    view! {
        <a class=css::cartLink href=AppRoute::Cart.to_hash()>
            <Icon icon=ic::CART />
            "Cart"
            <Show when=move || has_items.get()>
                <span class=css::cartBadge>{move || count.get()}</span>
            </Show>
        </a>
    }
}

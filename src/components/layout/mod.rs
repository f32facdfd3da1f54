//! Page shell components.
//!
//! [`Layout`] wraps every page: fixed header with navigation, search, cart
//! badge and account area; a full-screen category overlay; a footer; and
//! the toast container.

mod account;
mod footer;
mod header;
mod overlay;
mod search;

use leptos::prelude::*;

use crate::components::toast::Toasts;
use crate::config::APP_NAME;
use crate::utils::dom;
use footer::Footer;
use header::Header;
use overlay::CategoryOverlay;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Page shell: header, category overlay, main content, footer.
///
/// # Props
/// - `title`: page title, set on the document (the app name stands alone,
///   other titles are suffixed with it)
/// - `children`: page content rendered inside `<main>`
#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    // Category overlay visibility, owned by this layout instance.
    let (show_categories, set_show_categories) = signal(false);

    let doc_title = if title == APP_NAME {
        title
    } else {
        format!("{} | {}", title, APP_NAME)
    };
    Effect::new(move || dom::set_title(&doc_title));

    view! {
        <Toasts />

        <Show when=move || show_categories.get()>
            <CategoryOverlay set_open=set_show_categories />
        </Show>

        <Header set_show_categories=set_show_categories />

        <div class=css::page>
            <main class=css::main>{children()}</main>
            <Footer />
        </div>
    }
}

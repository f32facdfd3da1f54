//! Page footer.

use leptos::prelude::*;

use crate::config::APP_TAGLINE;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub(super) fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <p>{APP_TAGLINE}</p>
        </footer>
    }
}

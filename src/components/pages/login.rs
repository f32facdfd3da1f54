//! Login view.
//!
//! Creates and persists a session record. Stands in for the credential
//! flow, which is out of scope; the session it produces is what the
//! header's account area consumes.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::toast::ToastState;
use crate::core::auth;
use crate::models::{AppRoute, SessionState, User};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = use_context::<ToastState>().expect("ToastState must be provided");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (is_admin, set_is_admin) = signal(false);

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();

        let name_value = name.get().trim().to_string();
        if name_value.is_empty() {
            toasts.error("Enter your name to sign in");
            return;
        }

        let user = User {
            name: name_value,
            email: email.get().trim().to_string(),
            is_admin: is_admin.get(),
        };
        if let Err(err) = auth::sign_in(&user) {
            log::warn!("failed to persist session: {err}");
        }
        toasts.success(format!("Welcome, {}", user.name));
        ctx.session.set(SessionState::Authenticated(user));
        AppRoute::Home.push();
    };

    view! {
        <h1 class=css::pageTitle>"Login"</h1>
        <form class=css::form on:submit=on_submit>
            <label class=css::formLabel>
                "Name"
                <input
                    class=css::formInput
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </label>
            <label class=css::formLabel>
                "Email"
                <input
                    class=css::formInput
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </label>
            <label class=css::formCheckboxRow>
                <input
                    type="checkbox"
                    prop:checked=move || is_admin.get()
                    on:change=move |event| set_is_admin.set(event_target_checked(&event))
                />
                "Sign in as administrator"
            </label>
            <button class=css::submitButton type="submit">"Login"</button>
        </form>
    }
}

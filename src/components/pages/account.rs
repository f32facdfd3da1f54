//! Account views: profile, order history, and the admin dashboard.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{AppRoute, SessionState};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <h1 class=css::pageTitle>"Profile"</h1>
        {move || match ctx.session.get() {
            SessionState::Loading => view! {
                <p class=css::loading>"Loading"</p>
            }
            .into_any(),
            SessionState::Authenticated(user) => {
                let email = if user.email.is_empty() {
                    "\u{2014}".to_string()
                } else {
                    user.email.clone()
                };
                view! {
                    <div class=css::profileCard>
                        <p><strong>"Name: "</strong>{user.name.clone()}</p>
                        <p><strong>"Email: "</strong>{email}</p>
                        <p>
                            <strong>"Role: "</strong>
                            {if user.is_admin { "Administrator" } else { "Customer" }}
                        </p>
                    </div>
                }
                .into_any()
            }
            SessionState::Unauthenticated => view! {
                <SignInPrompt />
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn OrderHistoryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <h1 class=css::pageTitle>"Order History"</h1>
        {move || match ctx.session.get() {
            SessionState::Loading => view! {
                <p class=css::loading>"Loading"</p>
            }
            .into_any(),
            SessionState::Authenticated(_) => view! {
                <p class=css::emptyState>
                    "No orders yet. "
                    <a href=AppRoute::Home.to_hash()>"Browse the store"</a>
                </p>
            }
            .into_any(),
            SessionState::Unauthenticated => view! {
                <SignInPrompt />
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <h1 class=css::pageTitle>"Admin Dashboard"</h1>
        {move || {
            let session = ctx.session.get();
            if session.is_admin() {
                view! {
                    <p class=css::emptyState>
                        "Catalog and order management for administrators."
                    </p>
                }
                .into_any()
            } else if matches!(session, SessionState::Loading) {
                view! { <p class=css::loading>"Loading"</p> }.into_any()
            } else {
                view! {
                    <p class=css::errorState>
                        "This area is restricted to administrators."
                    </p>
                }
                .into_any()
            }
        }}
    }
}

/// Shared prompt for views that need a signed-in user.
#[component]
fn SignInPrompt() -> impl IntoView {
    view! {
        <p class=css::emptyState>
            "You are not signed in. "
            <a href=AppRoute::Login.to_hash()>"Login"</a>
        </p>
    }
}

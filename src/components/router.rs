//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events, so plain `href="#/..."` anchors and browser back/forward
//! buttons work without extra wiring.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::Layout;
use crate::components::pages::{
    AdminDashboardPage, CartPage, HomePage, LoginPage, OrderHistoryPage, ProfilePage, SearchPage,
};
use crate::config::APP_NAME;
use crate::models::AppRoute;

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Storefront home
/// - `#/cart` → Shopping cart
/// - `#/login` → Login view
/// - `#/profile`, `#/order-history`, `#/admin/dashboard` → Account views
/// - `#/search?query=...&category=...` → Search results
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        {move || match route.get() {
            AppRoute::Home => view! {
                <Layout title=APP_NAME>
                    <HomePage />
                </Layout>
            }
            .into_any(),
            AppRoute::Cart => view! {
                <Layout title="Cart">
                    <CartPage />
                </Layout>
            }
            .into_any(),
            AppRoute::Login => view! {
                <Layout title="Login">
                    <LoginPage />
                </Layout>
            }
            .into_any(),
            AppRoute::Profile => view! {
                <Layout title="Profile">
                    <ProfilePage />
                </Layout>
            }
            .into_any(),
            AppRoute::OrderHistory => view! {
                <Layout title="Order History">
                    <OrderHistoryPage />
                </Layout>
            }
            .into_any(),
            AppRoute::AdminDashboard => view! {
                <Layout title="Admin Dashboard">
                    <AdminDashboardPage />
                </Layout>
            }
            .into_any(),
            AppRoute::Search { query, category } => view! {
                <Layout title="Search">
                    <SearchPage query=query category=category />
                </Layout>
            }
            .into_any(),
        }}
    }
}

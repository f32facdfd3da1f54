//! Session-aware account area.
//!
//! Three mutually exclusive render states: a loading indicator while the
//! session restores, a dropdown menu for a signed-in user, and a login link
//! otherwise. Logout clears the cart cookie and store before the sign-out
//! redirect, so no stale cart state survives it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::toast::{ToastKind, ToastState};
use crate::config::CART_COOKIE_KEY;
use crate::core::auth;
use crate::models::{AppRoute, CartAction, SessionState};
use crate::utils::cookie;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub(super) fn AccountMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = use_context::<ToastState>().expect("ToastState must be provided");

    let (menu_open, set_menu_open) = signal(false);

    let display_name = Signal::derive(move || ctx.session.with(|state| state.display_name()));

    // Cookie and store are cleared before the sign-out redirect is issued.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        set_menu_open.set(false);
        if let Err(err) = cookie::remove(CART_COOKIE_KEY) {
            log::warn!("failed to remove cart cookie: {err}");
        }
        ctx.cart.dispatch(CartAction::Reset);
        ctx.session.set(SessionState::Unauthenticated);
        auth::sign_out(&AppRoute::Login);
        toasts.push(ToastKind::Info, "Signed out");
    };

    // Close menu when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        let set_menu = set_menu_open;
        if let Some(related) = event.related_target() {
            if let Some(current) = event.current_target() {
                use wasm_bindgen::JsCast;
                if let (Some(wrapper), Some(target)) = (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                )
                    && !wrapper.contains(Some(target))
                {
                    set_menu.set(false);
                }
            }
        } else {
            // Focus moved outside the document (e.g., clicked elsewhere)
            set_menu.set(false);
        }
    };

    view! {
        {move || match ctx.session.get() {
            SessionState::Loading => view! {
                <span class=css::sessionLoading>"Loading"</span>
            }
            .into_any(),
            SessionState::Authenticated(user) => {
                let is_admin = user.is_admin;
                view! {
                    <div class=css::dropdownWrapper on:focusout=on_focusout>
                        <button
                            class=css::accountButton
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <Icon icon=ic::USER />
                            {move || display_name.get()}
                            <Icon icon=ic::CHEVRON_DOWN />
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class=css::dropdownMenu>
                                <a
                                    class=css::dropdownItem
                                    href=AppRoute::Profile.to_hash()
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Profile"
                                </a>
                                <a
                                    class=css::dropdownItem
                                    href=AppRoute::OrderHistory.to_hash()
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Order History"
                                </a>
                                <Show when=move || is_admin>
                                    <a
                                        class=css::dropdownItem
                                        href=AppRoute::AdminDashboard.to_hash()
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Admin Dashboard"
                                    </a>
                                </Show>
                                <button class=css::dropdownItem on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
                .into_any()
            }
            SessionState::Unauthenticated => view! {
                <a class=css::loginLink href=AppRoute::Login.to_hash()>"Login"</a>
            }
            .into_any(),
        }}
    }
}

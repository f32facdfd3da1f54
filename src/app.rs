//! Root application module.
//!
//! Contains the main App component, AppContext definition, CartState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::toast::ToastState;
use crate::config::{CART_COOKIE_KEY, CART_COOKIE_MAX_AGE_DAYS};
use crate::core::auth;
use crate::core::error::StorageError;
use crate::models::{CartAction, CartItem, SessionState, item_count, subtotal_cents};
use crate::utils::cookie;

// ============================================================================
// CartState
// ============================================================================

/// Cart state managed with Leptos signals.
///
/// All mutations go through [`CartState::dispatch`], which applies a
/// [`CartAction`] to the line items and persists the result to the `cart`
/// cookie, so every update survives a reload.
///
/// # Note
///
/// This struct is `Copy` because its field is a Leptos signal, which is
/// cheap to copy (a pointer to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct CartState {
    /// Cart line items, one per product slug.
    pub items: RwSignal<Vec<CartItem>>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Total units in the cart (the header badge number).
    ///
    /// Reactive: recomputes whenever the item list changes.
    pub fn count(&self) -> u32 {
        self.items.with(|items| item_count(items))
    }

    /// Cart subtotal in cents.
    pub fn subtotal_cents(&self) -> u64 {
        self.items.with(|items| subtotal_cents(items))
    }

    /// Apply a cart action and persist the result.
    ///
    /// `Reset` removes the cookie instead of writing an empty list, so a
    /// reset cart leaves no trace behind. Persistence failures are logged
    /// and do not roll back the in-memory update.
    pub fn dispatch(&self, action: CartAction) {
        let is_reset = matches!(action, CartAction::Reset);
        self.items.update(|items| action.apply(items));

        let result = if is_reset {
            cookie::remove(CART_COOKIE_KEY)
        } else {
            self.items.with_untracked(|items| persist_items(items))
        };
        if let Err(err) = result {
            log::warn!("failed to persist cart: {err}");
        }
    }

    /// Load the persisted cart from the `cart` cookie, if present.
    ///
    /// Called once at startup; an unparseable cookie leaves the cart empty.
    pub fn load_persisted(&self) {
        if let Some(items) = cookie::get(CART_COOKIE_KEY)
            .and_then(|json| serde_json::from_str::<Vec<CartItem>>(&json).ok())
        {
            self.items.set(items);
        }
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

fn persist_items(items: &[CartItem]) -> Result<(), StorageError> {
    let json = serde_json::to_string(items).map_err(|_| StorageError::SaveFailed)?;
    cookie::set(CART_COOKIE_KEY, &json, CART_COOKIE_MAX_AGE_DAYS)
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Cart state**: Line items and the dispatch protocol
/// - **Session state**: Loading / authenticated / unauthenticated
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shopping cart state.
    pub cart: CartState,

    /// Session state, restored from localStorage at startup.
    pub session: RwSignal<SessionState>,
}

impl AppContext {
    /// Creates a new application context with default state.
    ///
    /// The cart starts empty and the session starts in `Loading`; both are
    /// populated from persisted state by the startup effect in [`App`].
    pub fn new() -> Self {
        Self {
            cart: CartState::new(),
            session: RwSignal::new(SessionState::Loading),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext and ToastState
/// - Restores the persisted cart and session once on mount
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    provide_context(ToastState::new());

    // Restore persisted state once; until this runs the session is Loading.
    let restored = StoredValue::new(false);
    Effect::new(move || {
        if !restored.get_value() {
            restored.set_value(true);
            ctx.cart.load_persisted();
            ctx.session.set(auth::restore());
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #b91c1c;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

//! Shopping cart view.
//!
//! Line items with quantity steppers, all mutations going through the cart
//! dispatch protocol so they persist to the cookie.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{AppRoute, CartAction, CartItem};
use crate::utils::format_price;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let items = ctx.cart.items;
    let has_items = Signal::derive(move || items.with(|list| !list.is_empty()));

    view! {
        <h1 class=css::pageTitle>"Shopping Cart"</h1>
        <Show
            when=move || has_items.get()
            fallback=|| view! {
                <p class=css::emptyState>
                    "Your cart is empty. "
                    <a href=AppRoute::Home.to_hash()>"Go shopping"</a>
                </p>
            }
        >
            <div class=css::cartList>
                <For
                    each=move || items.get()
                    key=|line| (line.slug.clone(), line.quantity)
                    children=move |line: CartItem| view! { <CartRow line=line /> }
                />
            </div>
            <p class=css::subtotal>
                {move || format!(
                    "Subtotal ({} items): {}",
                    ctx.cart.count(),
                    format_price(ctx.cart.subtotal_cents()),
                )}
            </p>
        </Show>
    }
}

#[component]
fn CartRow(line: CartItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let quantity = line.quantity;
    let line_total = line.price_cents * u64::from(quantity);

    let slug_decrement = line.slug.clone();
    let on_decrement = move |_: leptos::ev::MouseEvent| {
        // Quantity 0 removes the line
        ctx.cart.dispatch(CartAction::SetQuantity {
            slug: slug_decrement.clone(),
            quantity: quantity - 1,
        });
    };

    let slug_increment = line.slug.clone();
    let on_increment = move |_: leptos::ev::MouseEvent| {
        ctx.cart.dispatch(CartAction::SetQuantity {
            slug: slug_increment.clone(),
            quantity: quantity + 1,
        });
    };

    let slug_remove = line.slug.clone();
    let on_remove = move |_: leptos::ev::MouseEvent| {
        ctx.cart.dispatch(CartAction::Remove {
            slug: slug_remove.clone(),
        });
    };

    view! {
        <div class=css::cartRow>
            <div class=css::cartItemInfo>
                <span class=css::cartItemName>{line.name.clone()}</span>
                <span class=css::cartItemCategory>{line.category.label()}</span>
            </div>
            <div class=css::qtyControls>
                <button class=css::qtyButton on:click=on_decrement title="Decrease quantity">
                    "-"
                </button>
                <span class=css::qtyValue>{quantity}</span>
                <button class=css::qtyButton on:click=on_increment title="Increase quantity">
                    "+"
                </button>
            </div>
            <span class=css::lineTotal>{format_price(line_total)}</span>
            <button class=css::removeButton on:click=on_remove>"Remove"</button>
        </div>
    }
}

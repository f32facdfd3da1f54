//! Product grid shared by the home and search views.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::toast::ToastState;
use crate::core::catalog::Product;
use crate::utils::format_price;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub(super) fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class=css::productGrid>
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = use_context::<ToastState>().expect("ToastState must be provided");

    let add_action = product.add_to_cart();
    let toast_name = product.name.clone();
    let on_add = move |_: leptos::ev::MouseEvent| {
        ctx.cart.dispatch(add_action.clone());
        toasts.success(format!("{} added to cart", toast_name));
    };

    view! {
        <div class=css::productCard>
            <img class=css::productImage src=product.image.clone() alt=product.name.clone() />
            <div class=css::productName>{product.name.clone()}</div>
            <div class=css::productCategory>{product.category.label()}</div>
            <div class=css::productDescription>{product.description.clone()}</div>
            <div class=css::productPrice>{format_price(product.price_cents)}</div>
            <button class=css::addButton on:click=on_add>"Add to Cart"</button>
        </div>
    }
}

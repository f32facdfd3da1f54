//! Storefront home view.

use leptos::prelude::*;

use crate::core::catalog::fetch_catalog;

use super::products::ProductGrid;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = LocalResource::new(|| fetch_catalog());

    view! {
        <h1 class=css::pageTitle>"Latest Products"</h1>
        <Suspense fallback=move || view! {
            <p class=css::loading>"Loading products..."</p>
        }>
            {move || catalog.get().map(|result| match result {
                Ok(products) => view! { <ProductGrid products=products /> }.into_any(),
                Err(err) => view! {
                    <p class=css::errorState>
                        {format!("Could not load products: {}", err)}
                    </p>
                }
                .into_any(),
            })}
        </Suspense>
    }
}

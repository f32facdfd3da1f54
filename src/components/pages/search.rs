//! Search results view.
//!
//! Filters the catalog by the route's `query` and `category` parameters.

use leptos::prelude::*;

use crate::core::catalog::{fetch_catalog, filter_products};
use crate::models::Category;

use super::products::ProductGrid;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn SearchPage(query: Option<String>, category: Option<Category>) -> impl IntoView {
    let catalog = LocalResource::new(|| fetch_catalog());

    let heading = {
        let trimmed = query
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());
        match (trimmed, category) {
            (Some(text), Some(c)) => format!("Results for \"{}\" in {}", text, c.label()),
            (Some(text), None) => format!("Results for \"{}\"", text),
            (None, Some(c)) => c.label().to_string(),
            (None, None) => "All Products".to_string(),
        }
    };

    let filters = StoredValue::new((query, category));

    view! {
        <h1 class=css::pageTitle>{heading}</h1>
        <Suspense fallback=move || view! {
            <p class=css::loading>"Loading products..."</p>
        }>
            {move || catalog.get().map(|result| match result {
                Ok(products) => {
                    let (query, category) = filters.get_value();
                    let matches = filter_products(&products, query.as_deref(), category);
                    if matches.is_empty() {
                        view! {
                            <p class=css::emptyState>"No products matched your search."</p>
                        }
                        .into_any()
                    } else {
                        view! { <ProductGrid products=matches /> }.into_any()
                    }
                }
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

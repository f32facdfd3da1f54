//! Product catalog fetching and filtering.

use serde::{Deserialize, Serialize};

use crate::config::CATALOG_URL;
use crate::core::error::FetchError;
use crate::models::{CartAction, CartItem, Category};

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub category: Category,
    /// Unit price in cents.
    pub price_cents: u64,
    pub image: String,
    pub description: String,
}

impl Product {
    /// Cart action adding one unit of this product.
    pub fn add_to_cart(&self) -> CartAction {
        CartAction::Add(CartItem {
            slug: self.slug.clone(),
            name: self.name.clone(),
            category: self.category,
            price_cents: self.price_cents,
            quantity: 1,
        })
    }
}

/// Fetch the product catalog.
pub async fn fetch_catalog() -> Result<Vec<Product>, FetchError> {
    let response = gloo_net::http::Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

/// Filter products by the search view's parameters.
///
/// The query matches case-insensitively against product names; `None` or an
/// empty query matches everything, mirroring the unvalidated search form.
pub fn filter_products(
    products: &[Product],
    query: Option<&str>,
    category: Option<Category>,
) -> Vec<Product> {
    let needle = query.unwrap_or_default().trim().to_lowercase();
    products
        .iter()
        .filter(|product| category.is_none_or(|c| product.category == c))
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(slug: &str, name: &str, category: Category) -> Product {
        Product {
            slug: slug.to_string(),
            name: name.to_string(),
            category,
            price_cents: 500,
            image: String::new(),
            description: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("ribeye", "Grass-Fed Ribeye", Category::Meat),
            product("beets", "Red Beets", Category::Vegetables),
            product("oats", "Organic Rolled Oats", Category::DryFood),
            product("lentils", "Red Split Lentils", Category::DryFood),
        ]
    }

    #[test]
    fn test_no_filters_matches_everything() {
        assert_eq!(filter_products(&catalog(), None, None).len(), 4);
        assert_eq!(filter_products(&catalog(), Some(""), None).len(), 4);
        assert_eq!(filter_products(&catalog(), Some("   "), None).len(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let matches = filter_products(&catalog(), Some("red"), None);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|p| p.name.contains("Red")));
    }

    #[test]
    fn test_category_filter() {
        let matches = filter_products(&catalog(), None, Some(Category::DryFood));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_combined_filters() {
        let matches = filter_products(&catalog(), Some("red"), Some(Category::DryFood));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].slug, "lentils");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_products(&catalog(), Some("salmon"), None).is_empty());
    }

    #[test]
    fn test_add_to_cart_action() {
        let product = product("beets", "Red Beets", Category::Vegetables);
        let CartAction::Add(item) = product.add_to_cart() else {
            panic!("expected an Add action");
        };
        assert_eq!(item.slug, "beets");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_catalog_json_decodes() {
        let json = r#"[{
            "slug": "red-beets",
            "name": "Red Beets",
            "category": "vegetables",
            "price_cents": 299,
            "image": "/assets/images/red-beets.jpg",
            "description": "Earthy red beets."
        }]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products[0].category, Category::Vegetables);
        assert_eq!(products[0].price_cents, 299);
    }
}

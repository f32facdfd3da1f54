//! Hash-based routing between the storefront views.

use crate::models::Category;
use crate::utils::url::{encode_component, parse_query};

/// Application routes for hash-based navigation.
/// URL format: #/path (e.g., #/cart, #/search?query=beets&category=vegetables)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Storefront home: #/ or empty hash
    Home,
    /// Shopping cart: #/cart
    Cart,
    /// Login view: #/login
    Login,
    /// Account profile: #/profile
    Profile,
    /// Past orders: #/order-history
    OrderHistory,
    /// Admin dashboard: #/admin/dashboard
    AdminDashboard,
    /// Search results, filtered by free-text query and/or category.
    Search {
        /// Free-text query; `Some("")` when the form was submitted empty.
        query: Option<String>,
        /// Category filter from the category overlay.
        category: Option<Category>,
    },
}

impl AppRoute {
    /// Parse URL hash into a route.
    ///
    /// Unknown paths fall back to [`AppRoute::Home`].
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query_string) = match raw.split_once('?') {
            Some((path, query_string)) => (path, Some(query_string)),
            None => (raw, None),
        };

        match path.trim_end_matches('/') {
            "" => Self::Home,
            "cart" => Self::Cart,
            "login" => Self::Login,
            "profile" => Self::Profile,
            "order-history" => Self::OrderHistory,
            "admin/dashboard" => Self::AdminDashboard,
            "search" => {
                let mut query = None;
                let mut category = None;
                for (key, value) in parse_query(query_string.unwrap_or_default()) {
                    match key.as_str() {
                        "query" => query = Some(value),
                        "category" => category = Category::from_slug(&value),
                        _ => {}
                    }
                }
                Self::Search { query, category }
            }
            _ => Self::Home,
        }
    }

    /// Convert a route to its URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Cart => "#/cart".to_string(),
            Self::Login => "#/login".to_string(),
            Self::Profile => "#/profile".to_string(),
            Self::OrderHistory => "#/order-history".to_string(),
            Self::AdminDashboard => "#/admin/dashboard".to_string(),
            Self::Search { query, category } => {
                let mut params = Vec::new();
                if let Some(query) = query {
                    params.push(format!("query={}", encode_component(query)));
                }
                if let Some(category) = category {
                    params.push(format!("category={}", category.slug()));
                }
                if params.is_empty() {
                    "#/search".to_string()
                } else {
                    format!("#/search?{}", params.join("&"))
                }
            }
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate the browser to this route.
    ///
    /// Goes through `location.hash` so the `hashchange` listener in the
    /// router picks it up and browser history gains an entry.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/cart"), AppRoute::Cart);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/profile"), AppRoute::Profile);
        assert_eq!(AppRoute::from_hash("#/order-history"), AppRoute::OrderHistory);
        assert_eq!(
            AppRoute::from_hash("#/admin/dashboard"),
            AppRoute::AdminDashboard
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(AppRoute::from_hash("#/bogus"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/cart/extra"), AppRoute::Home);
    }

    #[test]
    fn test_search_parsing() {
        assert_eq!(
            AppRoute::from_hash("#/search?query=beets"),
            AppRoute::Search {
                query: Some("beets".to_string()),
                category: None,
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/search?category=dry-food"),
            AppRoute::Search {
                query: None,
                category: Some(Category::DryFood),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/search?query=red%20beets&category=vegetables"),
            AppRoute::Search {
                query: Some("red beets".to_string()),
                category: Some(Category::Vegetables),
            }
        );
        // Bare search view, no filters
        assert_eq!(
            AppRoute::from_hash("#/search"),
            AppRoute::Search {
                query: None,
                category: None,
            }
        );
    }

    #[test]
    fn test_empty_query_is_preserved() {
        // Submitting the search form with no text still carries `query=`
        assert_eq!(
            AppRoute::from_hash("#/search?query="),
            AppRoute::Search {
                query: Some(String::new()),
                category: None,
            }
        );
    }

    #[test]
    fn test_unknown_category_is_dropped() {
        assert_eq!(
            AppRoute::from_hash("#/search?category=fish"),
            AppRoute::Search {
                query: None,
                category: None,
            }
        );
    }

    #[test]
    fn test_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(AppRoute::Cart.to_hash(), "#/cart");
        assert_eq!(AppRoute::AdminDashboard.to_hash(), "#/admin/dashboard");
        assert_eq!(
            AppRoute::Search {
                query: Some("red beets".to_string()),
                category: None,
            }
            .to_hash(),
            "#/search?query=red%20beets"
        );
        assert_eq!(
            AppRoute::Search {
                query: Some(String::new()),
                category: Some(Category::Meat),
            }
            .to_hash(),
            "#/search?query=&category=meat"
        );
    }

    #[test]
    fn test_hash_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Cart,
            AppRoute::Login,
            AppRoute::Profile,
            AppRoute::OrderHistory,
            AppRoute::AdminDashboard,
            AppRoute::Search {
                query: Some("dried figs & dates".to_string()),
                category: Some(Category::DryFood),
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }
}

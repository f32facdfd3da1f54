//! Cart line items and the dispatch-based update protocol.

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// A single cart line item.
///
/// One line per product slug; the quantity counts how many of that product
/// are in the cart. Serialized to the `cart` cookie for persistence across
/// visits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product slug, unique within the cart.
    pub slug: String,
    /// Product display name.
    pub name: String,
    /// Product category.
    pub category: Category,
    /// Unit price in cents.
    pub price_cents: u64,
    /// Number of units in the cart.
    pub quantity: u32,
}

/// Cart update actions.
///
/// All cart mutations go through [`CartAction::apply`] so the same rules
/// hold everywhere: one line per slug, no zero-quantity lines.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Add an item; merges into an existing line with the same slug.
    Add(CartItem),
    /// Set a line's quantity; 0 removes the line.
    SetQuantity { slug: String, quantity: u32 },
    /// Remove a line by slug.
    Remove { slug: String },
    /// Empty the cart.
    Reset,
}

impl CartAction {
    /// Applies this action to a list of line items.
    pub fn apply(self, items: &mut Vec<CartItem>) {
        match self {
            Self::Add(item) => {
                if item.quantity == 0 {
                    return;
                }
                if let Some(line) = items.iter_mut().find(|line| line.slug == item.slug) {
                    line.quantity += item.quantity;
                } else {
                    items.push(item);
                }
            }
            Self::SetQuantity { slug, quantity } => {
                if quantity == 0 {
                    items.retain(|line| line.slug != slug);
                } else if let Some(line) = items.iter_mut().find(|line| line.slug == slug) {
                    line.quantity = quantity;
                }
            }
            Self::Remove { slug } => {
                items.retain(|line| line.slug != slug);
            }
            Self::Reset => items.clear(),
        }
    }
}

/// Total number of units across all lines (0 for an empty cart).
///
/// This is the number shown in the header cart badge.
pub fn item_count(items: &[CartItem]) -> u32 {
    items.iter().map(|line| line.quantity).sum()
}

/// Cart subtotal in cents.
pub fn subtotal_cents(items: &[CartItem]) -> u64 {
    items
        .iter()
        .map(|line| line.price_cents * u64::from(line.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slug: &str, price_cents: u64, quantity: u32) -> CartItem {
        CartItem {
            slug: slug.to_string(),
            name: slug.to_string(),
            category: Category::Vegetables,
            price_cents,
            quantity,
        }
    }

    #[test]
    fn test_item_count() {
        assert_eq!(item_count(&[]), 0);
        assert_eq!(item_count(&[item("a", 100, 2), item("b", 200, 3)]), 5);
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(subtotal_cents(&[]), 0);
        assert_eq!(subtotal_cents(&[item("a", 100, 2), item("b", 250, 1)]), 450);
    }

    #[test]
    fn test_add_merges_by_slug() {
        let mut items = vec![item("a", 100, 1)];
        CartAction::Add(item("a", 100, 2)).apply(&mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);

        CartAction::Add(item("b", 200, 1)).apply(&mut items);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut items = Vec::new();
        CartAction::Add(item("a", 100, 0)).apply(&mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut items = vec![item("a", 100, 1)];
        CartAction::SetQuantity {
            slug: "a".to_string(),
            quantity: 4,
        }
        .apply(&mut items);
        assert_eq!(items[0].quantity, 4);

        // Unknown slug leaves the cart untouched
        CartAction::SetQuantity {
            slug: "missing".to_string(),
            quantity: 2,
        }
        .apply(&mut items);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut items = vec![item("a", 100, 2), item("b", 200, 1)];
        CartAction::SetQuantity {
            slug: "a".to_string(),
            quantity: 0,
        }
        .apply(&mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "b");
    }

    #[test]
    fn test_remove() {
        let mut items = vec![item("a", 100, 2), item("b", 200, 1)];
        CartAction::Remove {
            slug: "a".to_string(),
        }
        .apply(&mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "b");
    }

    #[test]
    fn test_reset() {
        let mut items = vec![item("a", 100, 2), item("b", 200, 1)];
        CartAction::Reset.apply(&mut items);
        assert!(items.is_empty());
        assert_eq!(item_count(&items), 0);
    }

    #[test]
    fn test_cookie_round_trip() {
        let items = vec![item("a", 100, 2)];
        let json = serde_json::to_string(&items).unwrap();
        let parsed: Vec<CartItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, items);
    }
}

//! Product categories.

use serde::{Deserialize, Serialize};

/// The three store categories, linked from the category overlay and used
/// as the `category` parameter of the search view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Meat,
    Vegetables,
    DryFood,
}

impl Category {
    /// All categories, in overlay display order.
    pub const ALL: [Category; 3] = [Category::Meat, Category::Vegetables, Category::DryFood];

    /// URL slug used in search routes and catalog JSON.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Vegetables => "vegetables",
            Self::DryFood => "dry-food",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Meat => "Meat",
            Self::Vegetables => "Vegetables",
            Self::DryFood => "Dry Food",
        }
    }

    /// Emoji shown next to the label in the category overlay.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Meat => "\u{1F969}",
            Self::Vegetables => "\u{1F955}",
            Self::DryFood => "\u{1F33E}",
        }
    }

    /// Parse a URL slug; unknown slugs return `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn test_from_slug_unknown() {
        assert_eq!(Category::from_slug("fish"), None);
        assert_eq!(Category::from_slug(""), None);
    }

    #[test]
    fn test_serde_uses_slug() {
        assert_eq!(
            serde_json::to_string(&Category::DryFood).unwrap(),
            "\"dry-food\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"meat\"").unwrap(),
            Category::Meat
        );
    }
}

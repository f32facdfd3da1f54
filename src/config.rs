//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Store name shown in the header brand link and the document title.
pub const APP_NAME: &str = "Farmstand";

/// Application version.
#[allow(dead_code)]
pub const APP_VERSION: &str = "0.1.0";

/// Tagline shown in the footer.
pub const APP_TAGLINE: &str = "Fresh from the farm, straight to your door";

// =============================================================================
// Persistence Keys
// =============================================================================

/// Cookie holding the serialized cart line items.
pub const CART_COOKIE_KEY: &str = "cart";

/// Cart cookie lifetime in days.
pub const CART_COOKIE_MAX_AGE_DAYS: u32 = 30;

/// localStorage key for the signed-in user record.
pub const SESSION_STORAGE_KEY: &str = "session";

// =============================================================================
// Catalog Configuration
// =============================================================================

/// URL of the product catalog, served alongside the app bundle.
pub const CATALOG_URL: &str = "/assets/products.json";

// =============================================================================
// Toast Configuration
// =============================================================================

/// Toast notification settings.
pub mod toast {
    /// Maximum number of toasts shown at once; pushing past this drops the
    /// oldest.
    pub const LIMIT: usize = 1;

    /// Milliseconds before a toast dismisses itself.
    pub const DISMISS_MS: u32 = 4000;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query gating the inline header search form.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

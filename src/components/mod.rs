//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Page shell: header, category overlay, footer
//! - [`pages`] - The views behind each route
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Toast notifications

pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;
pub mod toast;

pub use router::AppRouter;

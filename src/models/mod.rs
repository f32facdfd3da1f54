//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`CartItem`], [`CartAction`] - Cart line items and their update protocol
//! - [`User`], [`SessionState`] - Authentication state
//! - [`Category`] - Store categories
//! - [`AppRoute`] - Hash-based navigation

mod cart;
mod category;
mod route;
mod session;

pub use cart::{CartAction, CartItem, item_count, subtotal_cents};
pub use category::Category;
pub use route::AppRoute;
pub use session::{SessionState, User};

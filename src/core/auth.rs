//! Client-side session provider.
//!
//! The signed-in user record lives in localStorage; the reactive session
//! signal in [`AppContext`](crate::app::AppContext) is restored from it once
//! at startup and holds [`SessionState::Loading`] until then. Credential
//! verification is out of scope; this module only manages the stored
//! session record.

use crate::config::SESSION_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::{AppRoute, SessionState, User};
use crate::utils::dom;

/// Restore the session from localStorage.
///
/// An absent or unparseable record restores as `Unauthenticated`.
pub fn restore() -> SessionState {
    match read_stored_user() {
        Some(user) => SessionState::Authenticated(user),
        None => SessionState::Unauthenticated,
    }
}

/// Persist a signed-in user record.
pub fn sign_in(user: &User) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(user).map_err(|_| StorageError::SaveFailed)?;
    storage
        .set_item(SESSION_STORAGE_KEY, &json)
        .map_err(|_| StorageError::SaveFailed)
}

/// Clear the stored session, then navigate to the redirect target.
///
/// Callers reset their own state (cart cookie, store, session signal)
/// before calling this, so nothing stale is visible after the redirect.
/// A storage failure is logged rather than blocking the redirect.
pub fn sign_out(redirect: &AppRoute) {
    if let Err(err) = clear_session() {
        log::warn!("failed to clear stored session: {err}");
    }
    redirect.push();
}

fn read_stored_user() -> Option<User> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

fn clear_session() -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .remove_item(SESSION_STORAGE_KEY)
        .map_err(|_| StorageError::RemoveFailed)
}

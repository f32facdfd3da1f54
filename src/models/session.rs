//! Session state exposed by the auth provider.

use serde::{Deserialize, Serialize};

/// Signed-in user record.
///
/// Persisted to localStorage so the session survives a reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Grants access to the admin dashboard entry in the account menu.
    pub is_admin: bool,
}

/// Session state.
///
/// Starts in `Loading` until the stored session has been restored; the
/// account area in the header renders a distinct branch for each variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether the signed-in user has admin rights.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_admin)
    }

    /// Display name for the account area ("guest" when signed out).
    pub fn display_name(&self) -> String {
        match self.user() {
            Some(user) => user.name.clone(),
            None => "guest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            name: "Maja".to_string(),
            email: "maja@example.com".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_default_is_loading() {
        assert_eq!(SessionState::default(), SessionState::Loading);
    }

    #[test]
    fn test_loading_has_no_user() {
        let state = SessionState::Loading;
        assert!(state.user().is_none());
        assert!(!state.is_admin());
        assert_eq!(state.display_name(), "guest");
    }

    #[test]
    fn test_unauthenticated() {
        let state = SessionState::Unauthenticated;
        assert!(state.user().is_none());
        assert_eq!(state.display_name(), "guest");
    }

    #[test]
    fn test_authenticated() {
        let state = SessionState::Authenticated(user(false));
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("Maja"));
        assert!(!state.is_admin());
        assert_eq!(state.display_name(), "Maja");
    }

    #[test]
    fn test_admin_flag() {
        assert!(SessionState::Authenticated(user(true)).is_admin());
        assert!(!SessionState::Authenticated(user(false)).is_admin());
    }

    #[test]
    fn test_user_round_trip() {
        let json = serde_json::to_string(&user(true)).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user(true));
    }
}

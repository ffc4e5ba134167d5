//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the `user` key in `localStorage`. The navbar and dashboard read it
//! for identity-dependent rendering; the login page and sign-out action are
//! the only writers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use catalog::model::SessionUser;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until the stored session has been read in the
/// browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Dashboard greeting.
    #[must_use]
    pub fn greeting(&self) -> String {
        match &self.user {
            Some(user) => format!("Welcome Back, {}!", user.name),
            None => "Welcome Back!".to_owned(),
        }
    }
}

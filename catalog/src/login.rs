//! Sign-in form flow.
//!
//! There is no credential check. Any non-empty email and password produce the
//! same demo identity, which is written to the `user` key.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::model::SessionUser;
use crate::notice::Notice;
use crate::store::{self, KeyValueStore, StoreError};

pub const DEMO_USER_ID: u64 = 1;
pub const DEMO_USER_NAME: &str = "John Doe";
pub const DEMO_USER_ROLE: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LoginError {
    /// Toast shown for this failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Whitespace-only input counts as empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

/// Validate `form` and persist the session.
///
/// # Errors
///
/// Returns [`LoginError::MissingFields`] without touching the store when a
/// field is empty, or [`LoginError::Store`] if the write fails.
pub fn sign_in(store: &mut impl KeyValueStore, form: &LoginForm) -> Result<SessionUser, LoginError> {
    if !form.is_complete() {
        return Err(LoginError::MissingFields);
    }
    let user = SessionUser {
        id: DEMO_USER_ID,
        email: form.email.trim().to_owned(),
        name: DEMO_USER_NAME.to_owned(),
        role: DEMO_USER_ROLE.to_owned(),
    };
    store::save_session(store, &user)?;
    Ok(user)
}

/// Toast shown after a successful sign-in.
#[must_use]
pub fn welcome_notice() -> Notice {
    Notice::success("Welcome back to ProbY!")
}

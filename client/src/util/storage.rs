//! Browser `localStorage` adapter for the catalog key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStore` is the only `KeyValueStore` the running app uses. It exists
//! only in the hydrated build; on the server `open` reports
//! `StoreError::Unavailable` and callers fall back to the signed-out,
//! nothing-submitted view.

use catalog::model::SessionUser;
use catalog::store::{self, KeyValueStore, StoreError};

/// Handle to `window.localStorage`.
pub struct BrowserStore {
    #[cfg(feature = "hydrate")]
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] outside the browser or when storage
    /// access is blocked.
    pub fn open() -> Result<Self, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage =
                web_sys::window().and_then(|w| w.local_storage().ok().flatten()).ok_or(StoreError::Unavailable)?;
            Ok(Self { storage })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage
                .get_item(key)
                .map_err(|e| StoreError::Read { key: key.to_owned(), message: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write { key: key.to_owned(), message: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage
                .remove_item(key)
                .map_err(|e| StoreError::Write { key: key.to_owned(), message: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

/// Stored session, or `None` when there is none or it cannot be read.
pub fn restore_session() -> Option<SessionUser> {
    let result = BrowserStore::open().and_then(|s| store::load_session(&s));
    match result {
        Ok(user) => user,
        Err(StoreError::Unavailable) => None,
        Err(e) => {
            leptos::logging::warn!("session restore failed: {e}");
            None
        }
    }
}

/// Drop the stored session. Failures are logged and otherwise ignored.
pub fn sign_out() {
    if let Err(e) = BrowserStore::open().and_then(|mut s| store::clear_session(&mut s)) {
        leptos::logging::warn!("sign out failed: {e}");
    }
}

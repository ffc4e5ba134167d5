//! Key-value store contract for the `user` and `problems` blobs.
//!
//! DESIGN
//! ======
//! Values are opaque strings; the typed helpers below own the JSON encoding.
//! The browser adapter lives in `client` (hydrate only) and `MemoryStore`
//! backs tests and server rendering. Each `get`/`set` is atomic per call.
//!
//! ERROR HANDLING
//! ==============
//! A blob that does not decode is reported as `StoreError::Decode` and left in
//! place. `append_submitted` reads before it writes, so a malformed
//! `problems` value is never replaced by a fresh list.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::model::{SessionUser, SubmittedProblem};

/// Key holding the signed-in [`SessionUser`].
pub const USER_KEY: &str = "user";

/// Key holding the JSON array of [`SubmittedProblem`] records.
pub const PROBLEMS_KEY: &str = "problems";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("malformed value under {key}: {source}")]
    Decode { key: String, source: serde_json::Error },
    #[error("failed to encode value for {key}: {source}")]
    Encode { key: String, source: serde_json::Error },
}

/// String-valued persistent map.
pub trait KeyValueStore {
    /// Raw value under `key`, or `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the delete.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

// =============================================================================
// TYPED HELPERS
// =============================================================================

fn decode<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Decode { key: key.to_owned(), source })
}

fn encode<T: serde::Serialize>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Encode { key: key.to_owned(), source })
}

/// Signed-in user, if any.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the blob is malformed.
pub fn load_session(store: &impl KeyValueStore) -> Result<Option<SessionUser>, StoreError> {
    store.get(USER_KEY)?.map(|raw| decode(USER_KEY, &raw)).transpose()
}

/// Persist the signed-in user.
///
/// # Errors
///
/// Returns an error if encoding or the write fails.
pub fn save_session(store: &mut impl KeyValueStore, user: &SessionUser) -> Result<(), StoreError> {
    let raw = encode(USER_KEY, user)?;
    store.set(USER_KEY, &raw)
}

/// Forget the signed-in user.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear_session(store: &mut impl KeyValueStore) -> Result<(), StoreError> {
    store.remove(USER_KEY)
}

/// Every problem submitted from this browser, oldest first. A missing key is
/// an empty list.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the blob is malformed.
pub fn load_submitted(store: &impl KeyValueStore) -> Result<Vec<SubmittedProblem>, StoreError> {
    match store.get(PROBLEMS_KEY)? {
        Some(raw) => decode(PROBLEMS_KEY, &raw),
        None => Ok(Vec::new()),
    }
}

/// Append one record to the `problems` list and return the new length.
///
/// # Errors
///
/// Returns an error if the existing blob is malformed or the write fails. The
/// stored value is untouched on error.
pub fn append_submitted(store: &mut impl KeyValueStore, problem: SubmittedProblem) -> Result<usize, StoreError> {
    let mut list = load_submitted(store)?;
    list.push(problem);
    let raw = encode(PROBLEMS_KEY, &list)?;
    store.set(PROBLEMS_KEY, &raw)?;
    Ok(list.len())
}

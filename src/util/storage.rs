//! `localStorage` as the preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme flag is the page's only persisted state. Storage can be missing
//! (private browsing, sandboxed iframes, native tests); every failure maps to
//! a [`StoreError`] and callers fall back to defaults.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use motion::theme::{PreferenceStore, StoreError};

/// Browser `localStorage`. Without the `hydrate` feature it behaves as an
/// unavailable store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).map_err(|_| StoreError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|err| StoreError::Write(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

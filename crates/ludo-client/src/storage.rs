use std::sync::{Arc, Mutex};

use crate::error::ClientError;

/// Key the browser console keeps its token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the console keeps its bearer token between requests.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Process-local token slot. Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.slot() = None;
        Ok(())
    }
}

/// Browser `localStorage`, so the token survives page navigation and reloads.
#[cfg(feature = "browser")]
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

#[cfg(feature = "browser")]
impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self {
            key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(feature = "browser")]
impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage() -> Result<web_sys::Storage, ClientError> {
        web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| ClientError::Storage(format!("{e:?}")))?
            .ok_or_else(|| ClientError::Storage("localStorage disabled".into()))
    }
}

#[cfg(feature = "browser")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| ClientError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), ClientError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| ClientError::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_is_shared_between_clones() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        assert_eq!(store.load(), None);

        other.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(other.load(), None);
    }
}

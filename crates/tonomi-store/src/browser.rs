//! `localStorage`-backed [`Storage`].

use crate::kv::Storage;
use crate::StoreError;

/// The browser's `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `localStorage` for the current window.
    ///
    /// Fails with [`StoreError::Unavailable`] outside a browser, or when the
    /// browser refuses access (private mode, disabled storage).
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner
            .get_item(key)
            .map_err(|err| StoreError::Backend(format!("read {key}: {err:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| StoreError::Backend(format!("write {key}: {err:?}")))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner
            .remove_item(key)
            .map_err(|err| StoreError::Backend(format!("remove {key}: {err:?}")))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let len = self
            .inner
            .length()
            .map_err(|err| StoreError::Backend(format!("length: {err:?}")))?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self
                .inner
                .key(index)
                .map_err(|err| StoreError::Backend(format!("key {index}: {err:?}")))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

//! Key-value persistence with automatic serialization.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::StoreError;

/// String key-value storage, shaped like the browser's `localStorage`.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory [`Storage`] with an optional byte quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create empty storage without a quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys plus values, in bytes.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    fn used_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if self.used_without(key) + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded(key.to_string()));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.keys().cloned().collect())
    }
}

/// Namespaced, JSON-serializing wrapper around a [`Storage`].
///
/// # Example
///
/// ```rust
/// use tonomi_store::{KvStore, MemoryStorage};
///
/// let mut kv = KvStore::new(MemoryStorage::new(), "tonomi");
/// kv.set("recent", &vec!["prod-1"]).unwrap();
///
/// let recent: Option<Vec<String>> = kv.get("recent").unwrap();
/// assert_eq!(recent, Some(vec!["prod-1".to_string()]));
/// ```
#[derive(Debug, Clone)]
pub struct KvStore<S> {
    storage: S,
    namespace: String,
}

impl<S: Storage> KvStore<S> {
    /// Wrap `storage`, prefixing every key with `namespace:`.
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
        }
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.storage.get_item(&self.full_key(key))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Get a value, falling back to `T::default()` when it is missing or
    /// unreadable.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable stored value");
                T::default()
            }
        }
    }

    /// Serialize and store a value, replacing any previous one.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        let key = self.full_key(key);
        self.storage.set_item(&key, &raw)
    }

    /// Remove a key. Missing keys are not an error.
    pub fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let key = self.full_key(key);
        self.storage.remove_item(&key)
    }

    /// Check whether a key holds a value.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.storage.get_item(&self.full_key(key))?.is_some())
    }

    /// Keys in this namespace, without the namespace prefix.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let prefix = format!("{}:", self.namespace);
        Ok(self
            .storage
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }

    /// Key prefix, without the trailing `:`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

/// Build a storage key from parts.
///
/// ```rust
/// let key = tonomi_store::storage_key!("reviews", "prod-1");
/// assert_eq!(key, "reviews:prod-1");
/// ```
#[macro_export]
macro_rules! storage_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

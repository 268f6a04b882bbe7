//! Canonical query strings.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

/// Query keys owned by navigation. Everything else passes through untouched.
pub const MANAGED_KEYS: [&str; 4] = ["category", "id", "page", "view"];

/// A parsed query string with keys kept in sorted order.
///
/// Two queries are equivalent iff their canonical strings match; since keys
/// are sorted, that is plain equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlQuery {
    params: BTreeMap<String, String>,
}

impl UrlQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// Repeated keys keep their first value; pairs with an empty key are
    /// dropped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut params = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key.is_empty() {
                continue;
            }
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { params }
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Value of `key`, treating an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy of this query with every managed key removed.
    pub fn without_managed(&self) -> Self {
        let mut query = self.clone();
        for key in MANAGED_KEYS {
            query.params.remove(key);
        }
        query
    }

    /// Sorted, form-encoded representation without the leading `?`.
    pub fn to_canonical_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Whether both queries have the same canonical string.
    pub fn is_equivalent(&self, other: &UrlQuery) -> bool {
        self.to_canonical_string() == other.to_canonical_string()
    }
}

impl fmt::Display for UrlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl From<&str> for UrlQuery {
    fn from(raw: &str) -> Self {
        UrlQuery::parse(raw)
    }
}

impl<K, V> FromIterator<(K, V)> for UrlQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = UrlQuery::new();
        for (k, v) in iter {
            query.set(k, v);
        }
        query
    }
}

//! Newtype IDs for catalog entities.
//!
//! Product and category ids travel through the URL as plain strings, so the
//! wrappers are transparent on the wire and only add type safety in code.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a product, e.g. `prod-1`.
    ProductId
);
define_id!(
    /// Identifier of a category, e.g. `cat-6`.
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "prod-1".into();
        assert_eq!(id.as_str(), "prod-1");
        assert_eq!(id.to_string(), "prod-1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("cat-6");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cat-6\"");

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("same"), ProductId::from("same".to_string()));
        assert_ne!(ProductId::new("a"), ProductId::new("b"));
    }
}

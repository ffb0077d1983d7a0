//! Newtype IDs for type-safe identifiers.
//!
//! Zones and methods come from the same reference store and both use plain
//! string keys there; the newtypes keep them from being swapped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
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

            /// True when the ID is empty or only whitespace.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
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

define_id!(ZoneId);
define_id!(ShippingMethodId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ZoneId::new("z1");
        assert_eq!(id.as_str(), "z1");
    }

    #[test]
    fn test_id_from_str() {
        let id: ShippingMethodId = "express".into();
        assert_eq!(id.as_str(), "express");
        assert_eq!(format!("{}", id), "express");
    }

    #[test]
    fn test_blank_id() {
        assert!(ZoneId::new("  ").is_blank());
        assert!(!ZoneId::new("z1").is_blank());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ZoneId::new("z9")).unwrap();
        assert_eq!(json, "\"z9\"");
    }
}

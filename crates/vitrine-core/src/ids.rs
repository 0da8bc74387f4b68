//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a VariantId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype wrappers around the numeric IDs the remote
/// platform assigns to catalog records.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A unique numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a raw value.
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw numeric value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_numeric_id!(ProductId);
define_numeric_id!(VariantId);

/// Opaque key the remote cart assigns to a line item.
///
/// The key's internal structure belongs to the remote platform; local code
/// only ever compares and echoes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
    /// Create a line key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LineKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LineKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_value_roundtrip() {
        let id = VariantId::new(40551);
        assert_eq!(id.value(), 40551);
        assert_eq!(format!("{}", id), "40551");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(7), ProductId::from(7));
        assert_ne!(ProductId::new(7), ProductId::new(8));
    }

    #[test]
    fn test_line_key_is_opaque_string() {
        let key = LineKey::new("40551:a1b2c3");
        assert_eq!(key.as_str(), "40551:a1b2c3");
        assert_eq!(key, LineKey::from("40551:a1b2c3"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: VariantId = serde_json::from_str("12345").unwrap();
        assert_eq!(id, VariantId::new(12345));
        assert_eq!(serde_json::to_string(&id).unwrap(), "12345");
    }
}

//! Strongly-typed aggregate identifiers.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Opaque, immutable identity of an aggregate. Equal iff the values are equal.
pub trait Identifier: Clone + Eq + Hash + Debug + Display + Send + Sync {
    fn value(&self) -> &str;
}

/// Declares a string-backed identifier newtype.
macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh random identifier (lower-case UUID v4).
            pub fn unique() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl $crate::domain::Identifier for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use string_identifier;

#[cfg(test)]
mod tests {
    use super::*;

    string_identifier!(
        /// Test-only identifier.
        SampleId
    );

    #[test]
    fn test_unique_ids_differ() {
        let a = SampleId::unique();
        let b = SampleId::unique();
        assert_ne!(a, b);
        assert_eq!(a.value().len(), 36);
        assert_eq!(a.value(), a.value().to_lowercase());
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(SampleId::from("123"), SampleId::from(String::from("123")));
        assert_eq!(SampleId::from("123").to_string(), "123");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&SampleId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}

use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a stored entity.
///
/// Identities are assigned by the store on insert (SQLite rowid), so every
/// id wraps an `i64`.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn value(&self) -> i64;

    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an id from a path segment or a stored key
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares an `i64` newtype id implementing [`AggregateId`].
#[macro_export]
macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

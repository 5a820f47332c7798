//! Common types shared by all entities

pub mod aggregate_id;

pub use aggregate_id::AggregateId;

/// Normalized form of a client or product name used for case-insensitive
/// matching: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

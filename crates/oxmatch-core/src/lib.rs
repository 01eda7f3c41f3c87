#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Intermediate representation consumed by the oxmatch match-model builder.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON IR dump (`json`)
//! - **Catalog layer**: ordered, name-indexed field classes and legacy match structs
//!
//! The catalog is produced by the protocol loader and is read-only to everything
//! downstream of it.

mod catalog;
mod colors;
mod json;
mod type_len;
mod version;

#[cfg(test)]
mod version_tests;

pub use catalog::{Catalog, FieldClass, LegacyMember, LegacyStruct, MemberKind};
pub use colors::Colors;
pub use type_len::{STANDARD_NAMESPACE, TypeLen};
pub use version::WireVersion;

/// Errors raised while assembling or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid IR JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("class `{0}` is defined more than once")]
    DuplicateClass(String),

    #[error("legacy struct `{0}` is defined more than once")]
    DuplicateLegacyStruct(String),

    #[error("unknown wire version {0} (expected 1..=4)")]
    UnknownVersion(u8),

    #[error("invalid type-len constant `{0}`")]
    InvalidTypeLen(String),
}

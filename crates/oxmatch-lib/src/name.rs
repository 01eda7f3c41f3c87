//! Canonical field names and the naming conventions of field classes.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Prefix shared by every field-class name.
pub const FIELD_CLASS_PREFIX: &str = "of_oxm_";

/// Abstract base of all field classes ("no specific field").
pub const BASE_CLASS: &str = "of_oxm";

/// Suffix of value+mask variants.
pub const MASKED_SUFFIX: &str = "_masked";

/// Marks mask members of the legacy match structs (`eth_src_mask`, ...).
pub const MASK_MARKER: &str = "_mask";

/// Marks header-only field classes.
pub const HEADER_MARKER: &str = "header";

/// Wildcard bitmap member of the legacy match structs.
pub const WILDCARDS_MEMBER: &str = "wildcards";

pub fn is_masked_variant(name: &str) -> bool {
    name.ends_with(MASKED_SUFFIX)
}

pub fn is_header_variant(name: &str) -> bool {
    name.contains(HEADER_MARKER)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("class `{0}` does not start with `of_oxm_`")]
    MissingPrefix(String),

    #[error("class `{0}` has an empty field name")]
    Empty(String),
}

/// Field-class name without its namespace prefix; the key of the unified table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Strip [`FIELD_CLASS_PREFIX`] from a class name.
    pub fn from_class_name(class: &str) -> Result<Self, NameError> {
        let name = class
            .strip_prefix(FIELD_CLASS_PREFIX)
            .ok_or_else(|| NameError::MissingPrefix(class.to_string()))?;
        if name.is_empty() {
            return Err(NameError::Empty(class.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Wrap a name that is already canonical (static tables).
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Field-class name this canonical name was derived from.
    pub fn class_name(&self) -> String {
        class_name_of(&self.0)
    }
}

/// Field-class name for a canonical field name.
pub fn class_name_of(name: &str) -> String {
    format!("{FIELD_CLASS_PREFIX}{name}")
}

impl Borrow<str> for CanonicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Consistency violations between the match model and the IR.

use std::fmt;

use oxmatch_core::WireVersion;

/// Violation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    /// A name expected on one side is absent on the other.
    Missing,
    /// A field class has no unified table entry.
    Orphan,
    /// Both sides have the field, with different value types.
    TypeMismatch,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Orphan => "orphan",
            Self::TypeMismatch => "type-mismatch",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// A legacy struct member has no unified table entry.
    #[error(
        "field `{name}` of `{structure}` (version {version}) is missing from the unified match table"
    )]
    MissingField {
        name: String,
        structure: String,
        version: WireVersion,
    },

    #[error("legacy match struct `{structure}` (version {version}) is missing from the IR")]
    MissingLegacyStruct {
        structure: String,
        version: WireVersion,
    },

    /// A unified table entry has no field class.
    #[error("unified match field `{name}` has no field class `{class}`")]
    MissingFieldClass { name: String, class: String },

    #[error("field class `{class}` has no entry `{name}` in the unified match table")]
    OrphanField { name: String, class: String },

    #[error(
        "masked field class `{class}` has no base entry `{base}` in the unified match table"
    )]
    OrphanMaskedField {
        name: String,
        class: String,
        base: String,
    },

    #[error(
        "type mismatch for field `{name}`: unified table has `{expected}`, `{class}` has `{found}`"
    )]
    TypeMismatch {
        name: String,
        class: String,
        expected: String,
        found: String,
    },
}

impl CheckError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::MissingField { .. }
            | Self::MissingLegacyStruct { .. }
            | Self::MissingFieldClass { .. } => ViolationKind::Missing,
            Self::OrphanField { .. } | Self::OrphanMaskedField { .. } => ViolationKind::Orphan,
            Self::TypeMismatch { .. } => ViolationKind::TypeMismatch,
        }
    }

    /// The field (or struct) the violation is about.
    pub fn subject(&self) -> &str {
        match self {
            Self::MissingField { name, .. }
            | Self::MissingFieldClass { name, .. }
            | Self::OrphanField { name, .. }
            | Self::OrphanMaskedField { name, .. }
            | Self::TypeMismatch { name, .. } => name,
            Self::MissingLegacyStruct { structure, .. } => structure,
        }
    }
}

//! JSON deserialization for IR dumps.
//!
//! The loader writes classes in declaration order; that order becomes the
//! catalog's sequence index, so the array form is used instead of an object.

use serde::Deserialize;

use crate::{
    Catalog, CatalogError, FieldClass, LegacyMember, LegacyStruct, MemberKind, TypeLen,
    WireVersion,
};

impl Catalog {
    /// Parse a catalog from an IR JSON dump.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    classes: Vec<RawClass>,
    #[serde(default)]
    legacy_structs: Vec<RawLegacyStruct>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    name: String,
    #[serde(default)]
    field_class: bool,
    #[serde(default)]
    value_type: Option<String>,
    #[serde(default)]
    type_len: Option<RawTypeLen>,
    #[serde(default)]
    versions: Vec<WireVersion>,
}

/// Type-len as written by the loader: a plain number or a hex string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTypeLen {
    Number(u32),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawLegacyStruct {
    name: String,
    version: WireVersion,
    members: Vec<RawMember>,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    name: String,
    #[serde(rename = "type")]
    member_type: String,
    #[serde(default)]
    kind: MemberKind,
}

impl TryFrom<RawTypeLen> for TypeLen {
    type Error = CatalogError;

    fn try_from(raw: RawTypeLen) -> Result<Self, Self::Error> {
        match raw {
            RawTypeLen::Number(n) => Ok(TypeLen::new(n)),
            RawTypeLen::Text(s) => s.parse(),
        }
    }
}

impl TryFrom<RawClass> for FieldClass {
    type Error = CatalogError;

    fn try_from(raw: RawClass) -> Result<Self, Self::Error> {
        let mut class = if raw.field_class {
            FieldClass::abstract_field(raw.name, raw.versions)
        } else {
            FieldClass::other(raw.name, raw.versions)
        };
        class.value_type = raw.value_type;
        class.type_len = raw.type_len.map(TypeLen::try_from).transpose()?;
        Ok(class)
    }
}

impl From<RawMember> for LegacyMember {
    fn from(raw: RawMember) -> Self {
        LegacyMember::data(raw.name, raw.member_type).with_kind(raw.kind)
    }
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new();
        for class in raw.classes {
            catalog.add_class(class.try_into()?)?;
        }
        for legacy in raw.legacy_structs {
            catalog.add_legacy_struct(LegacyStruct::new(
                legacy.name,
                legacy.version,
                legacy.members.into_iter().map(Into::into),
            ))?;
        }
        Ok(catalog)
    }
}

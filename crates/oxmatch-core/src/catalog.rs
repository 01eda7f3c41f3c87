//! Ordered catalog of IR classes and legacy match structs.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{CatalogError, TypeLen, WireVersion};

/// One protocol class as seen by the match-model builder.
///
/// Most IR classes are not match fields; those carry `is_field_class == false`
/// and are ignored by the builder. `index` is the declaration position assigned
/// by [`Catalog::add_class`] and is the only ordering downstream code relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClass {
    pub name: String,
    pub is_field_class: bool,
    /// Semantic type of the `value` member.
    pub value_type: Option<String>,
    pub type_len: Option<TypeLen>,
    pub versions: BTreeSet<WireVersion>,
    index: usize,
}

impl FieldClass {
    /// A matchable field class with a value member and a type-len constant.
    pub fn field(
        name: impl Into<String>,
        value_type: impl Into<String>,
        type_len: u32,
        versions: impl IntoIterator<Item = WireVersion>,
    ) -> Self {
        Self {
            name: name.into(),
            is_field_class: true,
            value_type: Some(value_type.into()),
            type_len: Some(TypeLen::new(type_len)),
            versions: versions.into_iter().collect(),
            index: 0,
        }
    }

    /// A field class without value or type-len, such as the abstract base class.
    pub fn abstract_field(
        name: impl Into<String>,
        versions: impl IntoIterator<Item = WireVersion>,
    ) -> Self {
        Self {
            name: name.into(),
            is_field_class: true,
            value_type: None,
            type_len: None,
            versions: versions.into_iter().collect(),
            index: 0,
        }
    }

    /// Any other protocol class (messages, actions, ...).
    pub fn other(name: impl Into<String>, versions: impl IntoIterator<Item = WireVersion>) -> Self {
        Self {
            name: name.into(),
            is_field_class: false,
            value_type: None,
            type_len: None,
            versions: versions.into_iter().collect(),
            index: 0,
        }
    }

    /// Declaration position within the owning catalog.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn in_version(&self, version: WireVersion) -> bool {
        self.versions.contains(&version)
    }
}

/// Role of a legacy struct member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    #[default]
    Data,
    Pad,
    Length,
    Type,
}

impl MemberKind {
    /// Members that carry no match semantics.
    pub fn is_skippable(self) -> bool {
        !matches!(self, Self::Data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyMember {
    pub name: String,
    pub member_type: String,
    pub kind: MemberKind,
}

impl LegacyMember {
    pub fn data(name: impl Into<String>, member_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_type: member_type.into(),
            kind: MemberKind::Data,
        }
    }

    pub fn pad(name: impl Into<String>, member_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_type: member_type.into(),
            kind: MemberKind::Pad,
        }
    }

    pub fn with_kind(mut self, kind: MemberKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Fixed-layout match struct of a legacy wire version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyStruct {
    pub name: String,
    pub version: WireVersion,
    pub members: Vec<LegacyMember>,
}

impl LegacyStruct {
    pub fn new(
        name: impl Into<String>,
        version: WireVersion,
        members: impl IntoIterator<Item = LegacyMember>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            members: members.into_iter().collect(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&LegacyMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// IR catalog: field classes in declaration order plus legacy match structs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: IndexMap<String, FieldClass>,
    legacy_structs: IndexMap<String, LegacyStruct>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class, assigning the next sequence index.
    pub fn add_class(&mut self, mut class: FieldClass) -> Result<&FieldClass, CatalogError> {
        let index = self.classes.len();
        match self.classes.entry(class.name.clone()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateClass(class.name)),
            Entry::Vacant(slot) => {
                class.index = index;
                Ok(&*slot.insert(class))
            }
        }
    }

    pub fn add_legacy_struct(&mut self, legacy: LegacyStruct) -> Result<(), CatalogError> {
        match self.legacy_structs.entry(legacy.name.clone()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateLegacyStruct(legacy.name)),
            Entry::Vacant(slot) => {
                slot.insert(legacy);
                Ok(())
            }
        }
    }

    /// Builder-style variant of [`Catalog::add_class`] for fixtures.
    pub fn with_class(mut self, class: FieldClass) -> Result<Self, CatalogError> {
        self.add_class(class)?;
        Ok(self)
    }

    pub fn with_legacy_struct(mut self, legacy: LegacyStruct) -> Result<Self, CatalogError> {
        self.add_legacy_struct(legacy)?;
        Ok(self)
    }

    pub fn class(&self, name: &str) -> Option<&FieldClass> {
        self.classes.get(name)
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Classes in sequence-index order.
    pub fn classes(&self) -> impl Iterator<Item = &FieldClass> {
        self.classes.values()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn legacy_struct(&self, name: &str) -> Option<&LegacyStruct> {
        self.legacy_structs.get(name)
    }

    pub fn legacy_structs(&self) -> impl Iterator<Item = &LegacyStruct> {
        self.legacy_structs.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

//! Unified match model: one entry per canonical field, plus field orderings.
//!
//! Built once from the IR catalog by [`MatchModel::build`] and read-only
//! afterwards. Code emitters consume:
//! - the field table (name, value type, display order, legacy wildcard bits)
//! - per-version field orders (legacy struct order for versions 1 and 2)
//! - the global order, sorted by display order

mod build;
mod dump;


use std::collections::BTreeMap;

use indexmap::IndexMap;
use oxmatch_core::{Catalog, TypeLen, WireVersion};
use serde::Serialize;

use crate::name::{CanonicalName, NameError};
use crate::tables::TableError;

pub use build::ModelBuilder;
pub use dump::ModelPrinter;

/// Semantic descriptor of one matchable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchMember {
    pub name: CanonicalName,
    pub value_type: String,
    /// Display order: type code for standard fields, raw type-len otherwise.
    pub order: u32,
    pub type_len: TypeLen,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1_wc_shift: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2_wc_shift: Option<u8>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub v2_full_mask: bool,
}

impl MatchMember {
    /// Wildcard bit of this field in a fixed-layout version.
    pub fn wildcard_shift(&self, version: WireVersion) -> Option<u8> {
        match version {
            WireVersion::V1_0 => self.v1_wc_shift,
            WireVersion::V1_1 => self.v2_wc_shift,
            _ => None,
        }
    }

    pub fn is_standard(&self) -> bool {
        self.type_len.is_standard()
    }
}

/// Display order of a type-len constant.
///
/// Standard fields sort by type code alone; every other namespace keeps the
/// full constant, which places it after all standard fields.
pub fn display_order(type_len: TypeLen) -> u32 {
    if type_len.is_standard() {
        u32::from(type_len.code())
    } else {
        type_len.raw()
    }
}

/// Errors that abort model construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("static version tables are inconsistent: {0}")]
    Table(#[from] TableError),

    #[error(transparent)]
    InvalidName(#[from] NameError),

    #[error("field class `{class}` has no value member")]
    MissingValueType { class: String },

    #[error("field class `{class}` has no type-len constant")]
    MissingTypeLen { class: String },

    #[error("field `{name}` is defined more than once (second definition: `{class}`)")]
    DuplicateField { name: CanonicalName, class: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchModel {
    fields: IndexMap<CanonicalName, MatchMember>,
    versions: BTreeMap<WireVersion, Vec<CanonicalName>>,
    sorted: Vec<CanonicalName>,
}

impl MatchModel {
    /// Build the unified model from every field class of the catalog.
    pub fn build(catalog: &Catalog) -> Result<Self, BuildError> {
        let mut builder = ModelBuilder::new()?;
        let mut classes: Vec<_> = catalog.classes().collect();
        classes.sort_by_key(|class| class.index());
        for class in classes {
            builder.add_class(class)?;
        }
        Ok(builder.finish())
    }

    pub fn member(&self, name: &str) -> Option<&MatchMember> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Members in catalog traversal order.
    pub fn members(&self) -> impl Iterator<Item = &MatchMember> {
        self.fields.values()
    }

    /// Members in global display order.
    pub fn sorted_members(&self) -> impl Iterator<Item = &MatchMember> {
        self.sorted.iter().map(|name| &self.fields[name])
    }

    /// Canonical names sorted by display order.
    pub fn sorted(&self) -> &[CanonicalName] {
        &self.sorted
    }

    /// Field order of one wire version.
    pub fn version_order(&self, version: WireVersion) -> &[CanonicalName] {
        self.versions
            .get(&version)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn version_orders(&self) -> impl Iterator<Item = (WireVersion, &[CanonicalName])> {
        self.versions
            .iter()
            .map(|(&version, names)| (version, names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

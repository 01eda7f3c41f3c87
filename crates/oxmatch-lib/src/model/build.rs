//! Incremental construction of the unified match model.

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use oxmatch_core::{FieldClass, WireVersion};
use tracing::{debug, info};

use crate::name::{self, CanonicalName};
use crate::tables;

use super::{BuildError, MatchMember, MatchModel, display_order};

/// Accumulates match members one field class at a time.
///
/// Classes must be fed in catalog sequence order: per-version field orders
/// record the order in which classes arrive and are never resorted.
#[derive(Debug)]
pub struct ModelBuilder {
    fields: IndexMap<CanonicalName, MatchMember>,
    /// Names appended per version, first occurrence wins.
    appended: BTreeMap<WireVersion, IndexSet<CanonicalName>>,
}

impl ModelBuilder {
    /// Fails if the static version tables disagree with each other.
    pub fn new() -> Result<Self, BuildError> {
        tables::validate()?;
        Ok(Self {
            fields: IndexMap::new(),
            appended: BTreeMap::new(),
        })
    }

    /// Whether a class contributes a unified table entry.
    ///
    /// Non-field classes, the abstract base, and masked variants do not: a
    /// value+mask field is represented once, under its unmasked name.
    pub fn is_member_class(class: &FieldClass) -> bool {
        class.is_field_class
            && class.name != name::BASE_CLASS
            && !name::is_masked_variant(&class.name)
    }

    /// Add one class. Returns the new member, or `None` if the class was skipped.
    pub fn add_class(&mut self, class: &FieldClass) -> Result<Option<&MatchMember>, BuildError> {
        if !Self::is_member_class(class) {
            return Ok(None);
        }

        let name = CanonicalName::from_class_name(&class.name)?;
        let value_type = class
            .value_type
            .clone()
            .ok_or_else(|| BuildError::MissingValueType {
                class: class.name.clone(),
            })?;
        let type_len = class.type_len.ok_or_else(|| BuildError::MissingTypeLen {
            class: class.name.clone(),
        })?;

        if self.fields.contains_key(&name) {
            return Err(BuildError::DuplicateField {
                name,
                class: class.name.clone(),
            });
        }

        let member = MatchMember {
            value_type,
            order: display_order(type_len),
            type_len,
            v1_wc_shift: tables::wildcard_shift(WireVersion::V1_0, name.as_str()),
            v2_wc_shift: tables::wildcard_shift(WireVersion::V1_1, name.as_str()),
            v2_full_mask: tables::is_full_mask_v2(name.as_str()),
            name: name.clone(),
        };
        debug!(
            field = %name,
            value_type = %member.value_type,
            order = member.order,
            type_len = %type_len,
            "match member"
        );

        for &version in &class.versions {
            self.appended
                .entry(version)
                .or_default()
                .insert(name.clone());
        }

        let (index, _) = self.fields.insert_full(name, member);
        Ok(self.fields.get_index(index).map(|(_, member)| member))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze the table and derive the field orderings.
    ///
    /// Legacy versions start from their static key lists (restricted to keys
    /// present in the table), then take every name recorded for the version.
    pub fn finish(self) -> MatchModel {
        let Self { fields, appended } = self;

        let mut versions = BTreeMap::new();
        for version in WireVersion::ALL {
            let mut order: IndexSet<CanonicalName> = IndexSet::new();
            for &key in tables::legacy_keys(version) {
                if fields.contains_key(key) {
                    order.insert(CanonicalName::from_static(key));
                } else {
                    debug!(version = %version, field = key, "legacy key absent from match table");
                }
            }
            if let Some(names) = appended.get(&version) {
                order.extend(names.iter().cloned());
            }
            versions.insert(version, order.into_iter().collect());
        }

        // Vec::sort_by_key is stable: equal orders keep traversal order.
        let mut sorted: Vec<CanonicalName> = fields.keys().cloned().collect();
        sorted.sort_by_key(|name| fields[name].order);

        info!(fields = fields.len(), "built unified match model");
        MatchModel {
            fields,
            versions,
            sorted,
        }
    }
}

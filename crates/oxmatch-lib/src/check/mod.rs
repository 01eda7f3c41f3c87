//! Consistency checks between the unified match model and the IR.
//!
//! Three passes, run in order:
//! - legacy struct members must be unified fields
//! - field classes must be unified fields (masked variants via their base)
//! - unified fields must be field classes, with the same value type
//!
//! Together they prove the model and the field-class catalog describe the
//! same set of fields with the same types.

mod error;
mod violations;

#[cfg(test)]
mod violations_tests;

use std::collections::HashSet;
use std::ops::ControlFlow;

use oxmatch_core::{Catalog, WireVersion};
use tracing::{debug, info, warn};

use crate::model::MatchModel;
use crate::name::{self, FIELD_CLASS_PREFIX};
use crate::tables;

pub use error::{CheckError, ViolationKind};
pub use violations::Violations;

/// Where violations go while a check runs.
struct Sink {
    violations: Violations,
    stop_at_first: bool,
}

impl Sink {
    fn report(&mut self, violation: CheckError) -> ControlFlow<()> {
        if !self.stop_at_first {
            warn!(kind = %violation.kind(), "{violation}");
        }
        self.violations.push(violation);
        if self.stop_at_first {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Cross-checks a built model against the catalog it was built from.
pub struct Checker<'a> {
    catalog: &'a Catalog,
    model: &'a MatchModel,
}

impl<'a> Checker<'a> {
    pub fn new(catalog: &'a Catalog, model: &'a MatchModel) -> Self {
        Self { catalog, model }
    }

    /// Stop at the first violation.
    pub fn check(&self) -> Result<(), CheckError> {
        let mut sink = Sink {
            violations: Violations::new(),
            stop_at_first: true,
        };
        let _ = self.run(&mut sink);
        match sink.violations.into_vec().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Run every pass to completion and collect all violations.
    pub fn check_all(&self) -> Violations {
        let mut sink = Sink {
            violations: Violations::new(),
            stop_at_first: false,
        };
        let _ = self.run(&mut sink);
        sink.violations
    }

    fn run(&self, sink: &mut Sink) -> ControlFlow<()> {
        self.check_legacy_structs(sink)?;

        let candidates = self.field_class_names();
        self.check_field_classes(&candidates, sink)?;
        self.check_members(&candidates, sink)?;

        if sink.violations.is_empty() {
            info!(fields = self.model.len(), "match model is consistent with the IR");
        }
        ControlFlow::Continue(())
    }

    /// Every member of each legacy struct must name a unified field.
    fn check_legacy_structs(&self, sink: &mut Sink) -> ControlFlow<()> {
        for version in WireVersion::LEGACY {
            let Some(structure) = tables::legacy_struct_name(version) else {
                continue;
            };
            let Some(legacy) = self.catalog.legacy_struct(structure) else {
                sink.report(CheckError::MissingLegacyStruct {
                    structure: structure.to_string(),
                    version,
                })?;
                continue;
            };
            debug!(structure, version = %version, "checking legacy match struct");

            for member in &legacy.members {
                let key = member.name.as_str();
                if key.contains(name::MASK_MARKER)
                    || member.kind.is_skippable()
                    || key == name::WILDCARDS_MEMBER
                {
                    continue;
                }
                if !self.model.contains(key) {
                    sink.report(CheckError::MissingField {
                        name: key.to_string(),
                        structure: structure.to_string(),
                        version,
                    })?;
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Canonical names of all prefixed classes, header variants excluded.
    fn field_class_names(&self) -> Vec<&'a str> {
        self.catalog
            .class_names()
            .filter_map(|class| class.strip_prefix(FIELD_CLASS_PREFIX))
            .filter(|key| !name::is_header_variant(key))
            .collect()
    }

    /// Every field class must have a unified entry, or be a masked variant of one.
    fn check_field_classes(&self, candidates: &[&str], sink: &mut Sink) -> ControlFlow<()> {
        debug!(classes = candidates.len(), "checking field classes");
        for &key in candidates {
            if self.model.contains(key) {
                continue;
            }
            let class = name::class_name_of(key);
            match key.strip_suffix(name::MASKED_SUFFIX) {
                Some(base) if self.model.contains(base) => {}
                Some(base) => sink.report(CheckError::OrphanMaskedField {
                    name: key.to_string(),
                    class,
                    base: base.to_string(),
                })?,
                None => sink.report(CheckError::OrphanField {
                    name: key.to_string(),
                    class,
                })?,
            }
        }
        ControlFlow::Continue(())
    }

    /// Every unified entry must have a field class carrying the same value type.
    fn check_members(&self, candidates: &[&str], sink: &mut Sink) -> ControlFlow<()> {
        let unmasked: HashSet<&str> = candidates
            .iter()
            .copied()
            .filter(|key| !name::is_masked_variant(key))
            .collect();
        debug!(fields = self.model.len(), "checking unified match fields");

        for member in self.model.members() {
            let key = member.name.as_str();
            let class_name = member.name.class_name();
            if !unmasked.contains(key) {
                sink.report(CheckError::MissingFieldClass {
                    name: key.to_string(),
                    class: class_name,
                })?;
                continue;
            }

            let found = self
                .catalog
                .class(&class_name)
                .and_then(|class| class.value_type.as_deref());
            if found != Some(member.value_type.as_str()) {
                sink.report(CheckError::TypeMismatch {
                    name: key.to_string(),
                    expected: member.value_type.clone(),
                    found: found.unwrap_or("<none>").to_string(),
                    class: class_name,
                })?;
            }
        }
        ControlFlow::Continue(())
    }
}

//! Collection of violations from a batch check.

use std::fmt::Write;

use oxmatch_core::Colors;

use super::{CheckError, ViolationKind};

/// Every violation found by [`super::Checker::check_all`], in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<CheckError>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: CheckError) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckError> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&CheckError> {
        self.0.first()
    }

    pub fn count(&self, kind: ViolationKind) -> usize {
        self.0.iter().filter(|v| v.kind() == kind).count()
    }

    pub fn as_slice(&self) -> &[CheckError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<CheckError> {
        self.0
    }

    /// `Ok` when nothing was found.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// One `error[kind]: message` line per violation plus a summary line.
    pub fn render(&self, colors: Colors) -> String {
        let mut out = String::new();
        for v in &self.0 {
            writeln!(
                out,
                "{}error[{}]{}: {v}",
                colors.error,
                v.kind(),
                colors.reset
            )
            .expect("String write never fails");
        }
        if !self.0.is_empty() {
            let noun = if self.0.len() == 1 { "violation" } else { "violations" };
            writeln!(out, "{} {noun}", self.0.len()).expect("String write never fails");
        }
        out
    }
}

impl IntoIterator for Violations {
    type Item = CheckError;
    type IntoIter = std::vec::IntoIter<CheckError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a CheckError;
    type IntoIter = std::slice::Iter<'a, CheckError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

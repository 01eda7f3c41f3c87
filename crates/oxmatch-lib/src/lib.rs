//! oxmatch: unified match model for a versioned protocol code generator.
//!
//! The match abstraction exists in several incompatible wire layouts: fixed
//! structs with a wildcard bitmap in versions 1 and 2, generic typed fields
//! afterwards. This crate derives one order-stable field table from the IR
//! and proves it agrees with the IR before any code is emitted:
//! - `tables` - hand-authored legacy key lists and wildcard bit positions
//! - `name` - canonical field names and field-class naming conventions
//! - `model` - the unified table and its field orderings
//! - `check` - completeness and type agreement against the IR
//!
//! # Example
//!
//! ```
//! use oxmatch_core::{Catalog, FieldClass, WireVersion};
//! use oxmatch_lib::{Checker, MatchModel};
//!
//! let catalog = Catalog::new()
//!     .with_class(FieldClass::field(
//!         "of_oxm_in_port",
//!         "of_port_no_t",
//!         0x8000_0004,
//!         [WireVersion::V1_2],
//!     ))
//!     .unwrap();
//!
//! let model = MatchModel::build(&catalog).unwrap();
//! assert_eq!(model.member("in_port").unwrap().order, 4);
//!
//! // Without the legacy structs the checker reports them as missing.
//! let violations = Checker::new(&catalog, &model).check_all();
//! assert_eq!(violations.len(), 2);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod check;
pub mod model;
pub mod name;
pub mod tables;

#[cfg(test)]
pub mod test_utils;

pub use check::{CheckError, Checker, ViolationKind, Violations};
pub use model::{BuildError, MatchMember, MatchModel, ModelBuilder};
pub use name::CanonicalName;

use oxmatch_core::{Catalog, CatalogError};

/// Errors of the build-and-check pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("match model build failed: {0}")]
    Build(#[from] BuildError),

    #[error("match model check failed: {0}")]
    Check(#[from] CheckError),

    #[error("match model check failed with {} violations", .0.len())]
    Violations(Violations),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Build the model and stop at the first consistency violation.
pub fn build_checked(catalog: &Catalog) -> Result<MatchModel> {
    let model = MatchModel::build(catalog)?;
    Checker::new(catalog, &model).check()?;
    Ok(model)
}

/// Build the model and report every consistency violation at once.
pub fn build_checked_all(catalog: &Catalog) -> Result<MatchModel> {
    let model = MatchModel::build(catalog)?;
    Checker::new(catalog, &model)
        .check_all()
        .into_result()
        .map_err(Error::Violations)?;
    Ok(model)
}

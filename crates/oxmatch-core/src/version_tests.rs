use crate::{CatalogError, WireVersion};

#[test]
fn only_known_versions_construct() {
    assert_eq!(WireVersion::new(1), Some(WireVersion::V1_0));
    assert_eq!(WireVersion::new(4), Some(WireVersion::V1_3));
    assert_eq!(WireVersion::new(0), None);
    assert_eq!(WireVersion::new(5), None);
}

#[test]
fn legacy_versions_are_fixed_layout() {
    for version in WireVersion::LEGACY {
        assert!(version.is_legacy());
    }
    assert!(!WireVersion::V1_2.is_legacy());
    assert!(!WireVersion::V1_3.is_legacy());
}

#[test]
fn release_names() {
    let releases: Vec<_> = WireVersion::ALL.iter().map(|v| v.release()).collect();
    assert_eq!(releases, ["1.0", "1.1", "1.2", "1.3"]);
}

#[test]
fn try_from_reports_unknown_wire_byte() {
    let err = WireVersion::try_from(9u8).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownVersion(9)));
    assert_eq!(err.to_string(), "unknown wire version 9 (expected 1..=4)");
}

#[test]
fn display_is_wire_byte() {
    assert_eq!(WireVersion::V1_1.to_string(), "2");
}

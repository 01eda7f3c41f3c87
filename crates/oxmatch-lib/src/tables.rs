//! Hand-authored tables for the fixed-layout match versions.
//!
//! Unified names follow the 1.2 field catalog; older struct members are
//! aliased onto them. `tcp_src`/`tcp_dst` also stand for UDP ports in
//! versions 1 and 2.

use std::collections::HashSet;

use oxmatch_core::WireVersion;

/// Match struct of wire version 1.
pub const LEGACY_STRUCT_V1: &str = "of_match_v1";

/// Match struct of wire version 2.
pub const LEGACY_STRUCT_V2: &str = "of_match_v2";

/// Fields expressible in the version 1 match struct.
pub const V1_KEYS: &[&str] = &[
    "eth_dst",
    "eth_src",
    "eth_type",
    "in_port",
    "ipv4_dst",
    "ip_proto",
    "ipv4_src",
    "ip_dscp",
    "tcp_dst",
    "tcp_src",
    "vlan_pcp",
    "vlan_vid",
];

/// Bit positions in the version 1 wildcard bitmap.
///
/// `ipv4_src` and `ipv4_dst` start 6-bit prefix-length subfields, hence the gaps.
pub const V1_WC_SHIFTS: &[(&str, u8)] = &[
    ("in_port", 0),
    ("vlan_vid", 1),
    ("eth_src", 2),
    ("eth_dst", 3),
    ("eth_type", 4),
    ("ip_proto", 5),
    ("tcp_src", 6),
    ("tcp_dst", 7),
    ("ipv4_src", 8),
    ("ipv4_dst", 14),
    ("vlan_pcp", 20),
    ("ip_dscp", 21),
];

/// Fields expressible in the version 2 match struct.
pub const V2_KEYS: &[&str] = &[
    "eth_dst",
    "eth_src",
    "eth_type",
    "in_port",
    "ipv4_dst",
    "ip_proto",
    "ipv4_src",
    "ip_dscp",
    "tcp_dst",
    "tcp_src",
    "vlan_pcp",
    "vlan_vid",
    "mpls_label",
    "mpls_tc",
    "metadata",
];

/// Version 2 fields carried with an arbitrary bitmask instead of a wildcard bit.
pub const V2_FULL_MASK: &[&str] = &["eth_dst", "eth_src", "ipv4_dst", "ipv4_src", "metadata"];

/// Bit positions in the version 2 wildcard bitmap.
pub const V2_WC_SHIFTS: &[(&str, u8)] = &[
    ("in_port", 0),
    ("vlan_vid", 1),
    ("vlan_pcp", 2),
    ("eth_type", 3),
    ("ip_dscp", 4),
    ("ip_proto", 5),
    ("tcp_src", 6),
    ("tcp_dst", 7),
    ("mpls_label", 8),
    ("mpls_tc", 9),
];

/// Legacy field names of a version, in struct order. Empty for generic versions.
pub fn legacy_keys(version: WireVersion) -> &'static [&'static str] {
    match version {
        WireVersion::V1_0 => V1_KEYS,
        WireVersion::V1_1 => V2_KEYS,
        _ => &[],
    }
}

/// Name of the fixed-layout match struct of a version.
pub fn legacy_struct_name(version: WireVersion) -> Option<&'static str> {
    match version {
        WireVersion::V1_0 => Some(LEGACY_STRUCT_V1),
        WireVersion::V1_1 => Some(LEGACY_STRUCT_V2),
        _ => None,
    }
}

fn shift_table(version: WireVersion) -> &'static [(&'static str, u8)] {
    match version {
        WireVersion::V1_0 => V1_WC_SHIFTS,
        WireVersion::V1_1 => V2_WC_SHIFTS,
        _ => &[],
    }
}

/// Wildcard bit of `name` in the given legacy version.
pub fn wildcard_shift(version: WireVersion, name: &str) -> Option<u8> {
    shift_table(version)
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, shift)| shift)
}

pub fn is_full_mask_v2(name: &str) -> bool {
    V2_FULL_MASK.contains(&name)
}

/// Inconsistency inside the static tables themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("legacy key `{name}` is listed twice for version {version}")]
    DuplicateKey {
        version: WireVersion,
        name: &'static str,
    },

    #[error("wildcard shift for `{name}` in version {version} names no legacy key")]
    ShiftWithoutKey {
        version: WireVersion,
        name: &'static str,
    },

    #[error("wildcard bit {shift} in version {version} is shared by `{first}` and `{second}`")]
    SharedShift {
        version: WireVersion,
        shift: u8,
        first: &'static str,
        second: &'static str,
    },

    #[error("full-mask field `{0}` is not a version 2 legacy key")]
    FullMaskWithoutKey(&'static str),
}

/// Check the tables against each other.
pub fn validate() -> Result<(), TableError> {
    for version in WireVersion::LEGACY {
        let keys = legacy_keys(version);
        let mut seen = HashSet::new();
        for &name in keys {
            if !seen.insert(name) {
                return Err(TableError::DuplicateKey { version, name });
            }
        }

        let shifts = shift_table(version);
        for (i, &(name, shift)) in shifts.iter().enumerate() {
            if !keys.contains(&name) {
                return Err(TableError::ShiftWithoutKey { version, name });
            }
            if let Some(&(first, _)) = shifts[..i].iter().find(|(_, s)| *s == shift) {
                return Err(TableError::SharedShift {
                    version,
                    shift,
                    first,
                    second: name,
                });
            }
        }
    }

    match V2_FULL_MASK.iter().find(|name| !V2_KEYS.contains(*name)) {
        Some(&name) => Err(TableError::FullMaskWithoutKey(name)),
        None => Ok(()),
    }
}

//! Test fixtures mirroring the protocol IR.

use oxmatch_core::{
    Catalog, FieldClass, LegacyMember, LegacyStruct, MemberKind, STANDARD_NAMESPACE, TypeLen,
    WireVersion,
};

use crate::model::MatchModel;

/// Versions with generic typed match fields.
pub const GENERIC: [WireVersion; 2] = [WireVersion::V1_2, WireVersion::V1_3];

/// (name, value type, field code, payload length, has masked variant)
pub const STANDARD_FIELDS: &[(&str, &str, u16, u16, bool)] = &[
    ("in_port", "of_port_no_t", 0, 4, false),
    ("metadata", "uint64_t", 2, 8, true),
    ("eth_dst", "of_mac_addr_t", 3, 6, true),
    ("eth_src", "of_mac_addr_t", 4, 6, true),
    ("eth_type", "uint16_t", 5, 2, false),
    ("vlan_vid", "uint16_t", 6, 2, true),
    ("vlan_pcp", "uint8_t", 7, 1, false),
    ("ip_dscp", "uint8_t", 8, 1, false),
    ("ip_proto", "uint8_t", 10, 1, false),
    ("ipv4_src", "of_ipv4_t", 11, 4, true),
    ("ipv4_dst", "of_ipv4_t", 12, 4, true),
    ("tcp_src", "uint16_t", 13, 2, false),
    ("tcp_dst", "uint16_t", 14, 2, false),
    ("mpls_label", "uint32_t", 34, 4, false),
    ("mpls_tc", "uint8_t", 35, 1, false),
];

/// Standard-namespace type-len: field code, mask bit, payload length.
pub fn standard_type_len(code: u16, len: u16, masked: bool) -> u32 {
    let payload = if masked { len * 2 } else { len };
    TypeLen::from_parts(STANDARD_NAMESPACE, code << 9 | u16::from(masked) << 8 | payload).raw()
}

pub fn field(name: &str, value_type: &str, type_len: u32) -> FieldClass {
    FieldClass::field(format!("of_oxm_{name}"), value_type, type_len, GENERIC)
}

pub fn v1_struct() -> LegacyStruct {
    LegacyStruct::new(
        "of_match_v1",
        WireVersion::V1_0,
        [
            LegacyMember::data("wildcards", "of_wc_bmap_t"),
            LegacyMember::data("in_port", "of_port_no_t"),
            LegacyMember::data("eth_src", "of_mac_addr_t"),
            LegacyMember::data("eth_dst", "of_mac_addr_t"),
            LegacyMember::data("vlan_vid", "uint16_t"),
            LegacyMember::data("vlan_pcp", "uint8_t"),
            LegacyMember::pad("pad", "uint8_t"),
            LegacyMember::data("eth_type", "uint16_t"),
            LegacyMember::data("ip_dscp", "uint8_t"),
            LegacyMember::data("ip_proto", "uint8_t"),
            LegacyMember::pad("pad2", "uint8_t[2]"),
            LegacyMember::data("ipv4_src", "of_ipv4_t"),
            LegacyMember::data("ipv4_dst", "of_ipv4_t"),
            LegacyMember::data("tcp_src", "uint16_t"),
            LegacyMember::data("tcp_dst", "uint16_t"),
        ],
    )
}

pub fn v2_struct() -> LegacyStruct {
    LegacyStruct::new(
        "of_match_v2",
        WireVersion::V1_1,
        [
            LegacyMember::data("type", "uint16_t").with_kind(MemberKind::Type),
            LegacyMember::data("length", "uint16_t").with_kind(MemberKind::Length),
            LegacyMember::data("in_port", "of_port_no_t"),
            LegacyMember::data("wildcards", "of_wc_bmap_t"),
            LegacyMember::data("eth_src", "of_mac_addr_t"),
            LegacyMember::data("eth_src_mask", "of_mac_addr_t"),
            LegacyMember::data("eth_dst", "of_mac_addr_t"),
            LegacyMember::data("eth_dst_mask", "of_mac_addr_t"),
            LegacyMember::data("vlan_vid", "uint16_t"),
            LegacyMember::data("vlan_pcp", "uint8_t"),
            LegacyMember::pad("pad", "uint8_t"),
            LegacyMember::data("eth_type", "uint16_t"),
            LegacyMember::data("ip_dscp", "uint8_t"),
            LegacyMember::data("ip_proto", "uint8_t"),
            LegacyMember::data("ipv4_src", "of_ipv4_t"),
            LegacyMember::data("ipv4_src_mask", "of_ipv4_t"),
            LegacyMember::data("ipv4_dst", "of_ipv4_t"),
            LegacyMember::data("ipv4_dst_mask", "of_ipv4_t"),
            LegacyMember::data("tcp_src", "uint16_t"),
            LegacyMember::data("tcp_dst", "uint16_t"),
            LegacyMember::data("mpls_label", "uint32_t"),
            LegacyMember::data("mpls_tc", "uint8_t"),
            LegacyMember::pad("pad2", "uint8_t[3]"),
            LegacyMember::data("metadata", "uint64_t"),
            LegacyMember::data("metadata_mask", "uint64_t"),
        ],
    )
}

/// Field classes only, in the given order, no legacy structs.
pub fn catalog_of(classes: impl IntoIterator<Item = FieldClass>) -> Catalog {
    let mut catalog = Catalog::new();
    for class in classes {
        catalog.add_class(class).unwrap();
    }
    catalog
}

/// Every standard field with its masked variant, plus the base and header
/// classes and an unrelated message class.
pub fn standard_classes() -> Vec<FieldClass> {
    let mut classes = vec![
        FieldClass::other("of_hello", WireVersion::ALL),
        FieldClass::abstract_field("of_oxm", GENERIC),
        FieldClass::other("of_oxm_header", GENERIC),
    ];
    for &(name, value_type, code, len, maskable) in STANDARD_FIELDS {
        classes.push(field(name, value_type, standard_type_len(code, len, false)));
        if maskable {
            classes.push(field(
                &format!("{name}_masked"),
                value_type,
                standard_type_len(code, len, true),
            ));
        }
    }
    classes
}

/// The given classes plus both legacy structs.
pub fn catalog_with_structs(
    classes: Vec<FieldClass>,
    v1: LegacyStruct,
    v2: LegacyStruct,
) -> Catalog {
    let mut catalog = catalog_of(classes);
    catalog.add_legacy_struct(v1).unwrap();
    catalog.add_legacy_struct(v2).unwrap();
    catalog
}

/// The full standard catalog, legacy structs included.
pub fn standard_catalog() -> Catalog {
    catalog_with_structs(standard_classes(), v1_struct(), v2_struct())
}

pub fn build(catalog: &Catalog) -> MatchModel {
    MatchModel::build(catalog).unwrap()
}

pub fn names<T: AsRef<str>>(items: &[T]) -> Vec<&str> {
    items.iter().map(AsRef::as_ref).collect()
}

use super::tables::{legacy_tables, render_text};

#[test]
fn render_legacy_tables() {
    insta::assert_snapshot!(render_text(&legacy_tables()), @r"
    of_match_v1 (version 1)
      eth_dst    <<3
      eth_src    <<2
      eth_type   <<4
      in_port    <<0
      ipv4_dst   <<14
      ip_proto   <<5
      ipv4_src   <<8
      ip_dscp    <<21
      tcp_dst    <<7
      tcp_src    <<6
      vlan_pcp   <<20
      vlan_vid   <<1
    of_match_v2 (version 2)
      eth_dst    mask
      eth_src    mask
      eth_type   <<3
      in_port    <<0
      ipv4_dst   mask
      ip_proto   <<5
      ipv4_src   mask
      ip_dscp    <<4
      tcp_dst    <<7
      tcp_src    <<6
      vlan_pcp   <<2
      vlan_vid   <<1
      mpls_label <<8
      mpls_tc    <<9
      metadata   mask
    ");
}

#[test]
fn json_omits_absent_mechanisms() {
    let legacy = legacy_tables();
    let json = serde_json::to_value(&legacy).unwrap();

    assert_eq!(json[0]["structure"], "of_match_v1");
    assert_eq!(json[1]["version"], 2);
    assert_eq!(
        json[1]["keys"][0],
        serde_json::json!({ "name": "eth_dst", "full_mask": true })
    );
    assert_eq!(
        json[1]["keys"][2],
        serde_json::json!({ "name": "eth_type", "wildcard_shift": 3 })
    );
}

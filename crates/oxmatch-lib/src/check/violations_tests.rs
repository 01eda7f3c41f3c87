use oxmatch_core::{Colors, WireVersion};

use crate::check::{CheckError, ViolationKind, Violations};

fn sample() -> Violations {
    let mut violations = Violations::new();
    violations.push(CheckError::MissingField {
        name: "foo_bar".into(),
        structure: "of_match_v1".into(),
        version: WireVersion::V1_0,
    });
    violations.push(CheckError::OrphanField {
        name: "tunnel_id".into(),
        class: "of_oxm_tunnel_id".into(),
    });
    violations.push(CheckError::MissingFieldClass {
        name: "mpls_bos".into(),
        class: "of_oxm_mpls_bos".into(),
    });
    violations
}

#[test]
fn counts_by_kind() {
    let violations = sample();

    assert_eq!(violations.len(), 3);
    assert_eq!(violations.count(ViolationKind::Missing), 2);
    assert_eq!(violations.count(ViolationKind::Orphan), 1);
    assert_eq!(violations.count(ViolationKind::TypeMismatch), 0);
}

#[test]
fn into_result() {
    assert_eq!(Violations::new().into_result(), Ok(()));

    let err = sample().into_result().unwrap_err();
    assert_eq!(err.first().map(CheckError::subject), Some("foo_bar"));
}

#[test]
fn iterates_in_insertion_order() {
    let violations = sample();
    let by_ref: Vec<_> = (&violations).into_iter().map(CheckError::subject).collect();
    assert_eq!(by_ref, ["foo_bar", "tunnel_id", "mpls_bos"]);

    let owned: Vec<_> = violations.into_iter().map(|v| v.kind()).collect();
    assert_eq!(
        owned,
        [
            ViolationKind::Missing,
            ViolationKind::Orphan,
            ViolationKind::Missing
        ]
    );
}

#[test]
fn render_plain() {
    insta::assert_snapshot!(sample().render(Colors::OFF), @r"
    error[missing]: field `foo_bar` of `of_match_v1` (version 1) is missing from the unified match table
    error[orphan]: field class `of_oxm_tunnel_id` has no entry `tunnel_id` in the unified match table
    error[missing]: unified match field `mpls_bos` has no field class `of_oxm_mpls_bos`
    3 violations
    ");
}

#[test]
fn render_single_violation() {
    let mut violations = Violations::new();
    violations.push(CheckError::TypeMismatch {
        name: "ipv4_src".into(),
        class: "of_oxm_ipv4_src".into(),
        expected: "uint32_t".into(),
        found: "of_ipv4_t".into(),
    });

    assert_eq!(
        violations.render(Colors::ON),
        "\x1b[31merror[type-mismatch]\x1b[0m: type mismatch for field `ipv4_src`: \
         unified table has `uint32_t`, `of_oxm_ipv4_src` has `of_ipv4_t`\n1 violation\n"
    );
}

#[test]
fn render_empty() {
    assert_eq!(Violations::new().render(Colors::OFF), "");
}

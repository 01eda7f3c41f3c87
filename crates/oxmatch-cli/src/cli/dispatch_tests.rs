//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Defaults: color, format and check mode when flags are omitted
//! 3. Rejection: unknown values and missing positionals are clap errors

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, tables_command};
use crate::commands::OutputFormat;
use crate::commands::dump::DumpArgs;

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "ir.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.ir_path, PathBuf::from("ir.json"));
    assert!(!params.all);
    assert_eq!(params.color, ColorChoice::Auto);
    assert!(!params.verbose);
}

#[test]
fn check_extracts_flags() {
    let m = check_command()
        .try_get_matches_from(["check", "-", "--all", "--color", "never", "-v"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.ir_path, PathBuf::from("-"));
    assert!(params.all);
    assert_eq!(params.color, ColorChoice::Never);
    assert!(params.verbose);
}

#[test]
fn check_requires_ir_path() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_rejects_unknown_color() {
    let result = check_command().try_get_matches_from(["check", "ir.json", "--color", "rainbow"]);
    assert!(result.is_err());
}

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "ir.json"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.format, OutputFormat::Text);
    assert!(params.check);
}

#[test]
fn dump_extracts_flags() {
    let m = dump_command()
        .try_get_matches_from(["dump", "ir.json", "--format", "json", "--no-check"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.format, OutputFormat::Json);
    assert!(!params.check);
}

#[test]
fn dump_json_is_never_colored() {
    let m = dump_command()
        .try_get_matches_from(["dump", "ir.json", "--format", "json", "--color", "always"])
        .unwrap();
    let args: DumpArgs = DumpParams::from_matches(&m).into();
    assert!(!args.color);

    let m = dump_command()
        .try_get_matches_from(["dump", "ir.json", "--color", "always"])
        .unwrap();
    let args: DumpArgs = DumpParams::from_matches(&m).into();
    assert!(args.color);
}

#[test]
fn dump_rejects_unknown_format() {
    let result = dump_command().try_get_matches_from(["dump", "ir.json", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn tables_takes_no_positional() {
    let m = tables_command()
        .try_get_matches_from(["tables", "--format", "json"])
        .unwrap();
    let params = TablesParams::from_matches(&m);
    assert_eq!(params.format, OutputFormat::Json);

    let result = tables_command().try_get_matches_from(["tables", "ir.json"]);
    assert!(result.is_err());
}

#[test]
fn build_cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["oxmatch"]);
    assert!(result.is_err());

    let m = build_cli()
        .try_get_matches_from(["oxmatch", "check", "ir.json", "--all"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "check");
    assert!(CheckParams::from_matches(sub).all);
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

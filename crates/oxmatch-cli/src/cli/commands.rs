//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("oxmatch")
        .about("Unified match model builder and consistency checker for the protocol IR")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(tables_command())
}

/// Build the model and check it against the IR.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Build the unified match model and check it against the IR")
        .override_usage(
            "\
  oxmatch check <IR>
  oxmatch check <IR> --all",
        )
        .after_help(
            r#"EXAMPLES:
  oxmatch check ir.json               # stop at the first violation
  oxmatch check ir.json --all         # report every violation
  cat ir.json | oxmatch check -       # read the IR from stdin"#,
        )
        .arg(ir_path_arg())
        .arg(all_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Print the unified match model.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print the unified match table and field orders")
        .override_usage(
            "\
  oxmatch dump <IR>
  oxmatch dump <IR> --format json",
        )
        .after_help(
            r#"EXAMPLES:
  oxmatch dump ir.json                # checked model as text
  oxmatch dump ir.json --format json  # machine-readable model
  oxmatch dump ir.json --no-check     # skip the consistency check"#,
        )
        .arg(ir_path_arg())
        .arg(format_arg())
        .arg(no_check_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Print the static legacy tables.
pub fn tables_command() -> Command {
    Command::new("tables")
        .about("Print the legacy key lists and wildcard bit positions")
        .arg(format_arg())
        .arg(verbose_arg())
}

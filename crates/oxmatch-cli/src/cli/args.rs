//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// IR dump file (positional).
pub fn ir_path_arg() -> Arg {
    Arg::new("ir_path")
        .value_name("IR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON IR dump, or - to read from stdin")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Collect every violation (--all).
pub fn all_arg() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Report every violation instead of stopping at the first")
}

/// Skip the consistency check (--no-check).
pub fn no_check_arg() -> Arg {
    Arg::new("no_check")
        .long("no-check")
        .action(ArgAction::SetTrue)
        .help("Dump the model without checking it against the IR")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Debug logging (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Log build and check progress to stderr (overrides RUST_LOG)")
}

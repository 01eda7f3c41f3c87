//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::OutputFormat;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::tables::TablesArgs;

pub struct CheckParams {
    pub ir_path: PathBuf,
    pub all: bool,
    pub color: ColorChoice,
    pub verbose: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ir_path: parse_ir_path(m),
            all: m.get_flag("all"),
            color: parse_color(m),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            ir_path: p.ir_path,
            all: p.all,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub ir_path: PathBuf,
    pub format: OutputFormat,
    pub check: bool,
    pub color: ColorChoice,
    pub verbose: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ir_path: parse_ir_path(m),
            format: parse_format(m),
            check: !m.get_flag("no_check"),
            color: parse_color(m),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        // JSON output is never colored.
        let color = p.format == OutputFormat::Text && p.color.should_colorize();
        Self {
            ir_path: p.ir_path,
            format: p.format,
            check: p.check,
            color,
        }
    }
}

pub struct TablesParams {
    pub format: OutputFormat,
    pub verbose: bool,
}

impl TablesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            format: parse_format(m),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<TablesParams> for TablesArgs {
    fn from(p: TablesParams) -> Self {
        Self { format: p.format }
    }
}

fn parse_ir_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("ir_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

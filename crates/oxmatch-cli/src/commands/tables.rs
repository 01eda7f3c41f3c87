//! `oxmatch tables`: the hand-authored legacy tables, as the builder sees them.

use std::fmt::Write;

use oxmatch_core::WireVersion;
use oxmatch_lib::tables;
use serde::Serialize;

use super::{OutputFormat, fail};

pub struct TablesArgs {
    pub format: OutputFormat,
}

/// Legacy keys of one fixed-layout version, in struct order.
#[derive(Debug, Serialize)]
pub struct LegacyTable {
    pub version: u8,
    pub structure: &'static str,
    pub keys: Vec<LegacyKey>,
}

#[derive(Debug, Serialize)]
pub struct LegacyKey {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard_shift: Option<u8>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub full_mask: bool,
}

impl LegacyKey {
    fn mechanism(&self) -> String {
        match (self.wildcard_shift, self.full_mask) {
            (Some(shift), _) => format!("<<{shift}"),
            (None, true) => "mask".to_string(),
            (None, false) => "-".to_string(),
        }
    }
}

pub fn legacy_tables() -> Vec<LegacyTable> {
    WireVersion::LEGACY
        .into_iter()
        .filter_map(|version| {
            let structure = tables::legacy_struct_name(version)?;
            let keys = tables::legacy_keys(version)
                .iter()
                .map(|&name| LegacyKey {
                    name,
                    wildcard_shift: tables::wildcard_shift(version, name),
                    full_mask: version == WireVersion::V1_1 && tables::is_full_mask_v2(name),
                })
                .collect();
            Some(LegacyTable {
                version: version.wire(),
                structure,
                keys,
            })
        })
        .collect()
}

pub fn render_text(legacy: &[LegacyTable]) -> String {
    let width = legacy
        .iter()
        .flat_map(|table| table.keys.iter().map(|key| key.name.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for table in legacy {
        writeln!(out, "{} (version {})", table.structure, table.version)
            .expect("String write never fails");
        for key in &table.keys {
            writeln!(out, "  {:<width$} {}", key.name, key.mechanism())
                .expect("String write never fails");
        }
    }
    out
}

pub fn run(args: TablesArgs) {
    if let Err(e) = tables::validate() {
        fail(e);
    }

    let legacy = legacy_tables();
    match args.format {
        OutputFormat::Text => print!("{}", render_text(&legacy)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&legacy).unwrap_or_else(|e| fail(e));
            println!("{json}");
        }
    }
}

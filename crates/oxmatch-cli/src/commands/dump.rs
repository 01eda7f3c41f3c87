use std::path::PathBuf;

use oxmatch_lib::{MatchModel, build_checked};

use super::ir_loader::load_catalog;
use super::{OutputFormat, fail};

pub struct DumpArgs {
    pub ir_path: PathBuf,
    pub format: OutputFormat,
    pub check: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let catalog = load_catalog(&args.ir_path).unwrap_or_else(|e| fail(e));

    let model = if args.check {
        build_checked(&catalog).unwrap_or_else(|e| fail(e))
    } else {
        MatchModel::build(&catalog).unwrap_or_else(|e| fail(e))
    };

    match args.format {
        OutputFormat::Text => print!("{}", model.printer().colored(args.color).render()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&model).unwrap_or_else(|e| fail(e));
            println!("{json}");
        }
    }
}

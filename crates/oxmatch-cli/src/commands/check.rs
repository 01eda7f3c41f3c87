use std::path::PathBuf;

use oxmatch_core::Colors;
use oxmatch_lib::{Checker, MatchModel, Violations};

use super::fail;
use super::ir_loader::load_catalog;

pub struct CheckArgs {
    pub ir_path: PathBuf,
    pub all: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let catalog = load_catalog(&args.ir_path).unwrap_or_else(|e| fail(e));
    let model = MatchModel::build(&catalog).unwrap_or_else(|e| fail(e));
    let checker = Checker::new(&catalog, &model);

    let violations = if args.all {
        checker.check_all()
    } else {
        let mut first = Violations::new();
        if let Err(violation) = checker.check() {
            first.push(violation);
        }
        first
    };

    if !violations.is_empty() {
        eprint!("{}", violations.render(Colors::new(args.color)));
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

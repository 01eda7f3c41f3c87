pub mod check;
pub mod dump;
pub mod ir_loader;
pub mod tables;

#[cfg(test)]
mod tables_tests;

/// Output format of `dump` and `tables`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `error: <msg>` and exit with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

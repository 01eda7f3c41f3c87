//! Log output for the CLI.
//!
//! Violations are rendered by the commands themselves, so library events stay
//! quiet unless asked for with `RUST_LOG` or `-v`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "error";
const VERBOSE_FILTER: &str = "debug";

/// Install the stderr subscriber. `verbose` overrides `RUST_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}

//! Tracing setup. Diagnostics go to stderr so stdout stays clean for progress lines and JSON.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Progress already goes to stdout, so
/// only warnings are shown unless `--verbose` is given.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "xcinject=debug,xcinject_core=debug"
    } else {
        "xcinject=warn,xcinject_core=warn"
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::General(format!("Failed to initialise logging: {}", e)))
}

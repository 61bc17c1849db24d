//! Command implementations

pub mod bump;
pub mod changelog;
pub mod memory;
pub mod release;
pub mod releases;
pub mod status;

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; `RUST_LOG` wins unless `verbose` is set
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shipmate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

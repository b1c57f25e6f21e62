use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber used by the binaries. `RUST_LOG` wins over
/// the `verbose` switch when set.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

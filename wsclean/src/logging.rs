// src/logging.rs
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "wsclean=warn";
const VERBOSE_FILTER: &str = "wsclean=debug";

/// Builds the diagnostic filter. `RUST_LOG` wins over `--verbose`.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout
/// carries only the cleanup report. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

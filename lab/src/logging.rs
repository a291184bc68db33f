//! Development-time tracing for the lab console.
//!
//! Diagnostics go to stderr so they never interleave with the lab
//! conversation on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: this crate's warnings only.
pub const DEFAULT_DIRECTIVE: &str = "lab=warn";

/// Install the stderr subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=lab=debug cargo run
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

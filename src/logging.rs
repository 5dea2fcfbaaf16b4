use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "hire_payback=warn";

/// Initialize logging to stderr so reports on stdout stay clean.
///
/// The filter can be overridden with the `RUST_LOG` environment variable.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }
}

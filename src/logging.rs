use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Verbosity comes from `RUST_LOG` and defaults to `warn`; logs
/// go to stderr so they never mix with resolved values on stdout.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

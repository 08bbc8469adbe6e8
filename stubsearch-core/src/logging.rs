use tracing_subscriber::{EnvFilter, fmt};

/// Install the process-wide tracing subscriber.
///
/// Output is JSON with event fields flattened, so the mock's request
/// logs can be fed to the same tooling as the pipeline under test.
/// Filtering comes from `RUST_LOG`, falling back to "info".
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(log_filter: &str) {
    // Prefer RUST_LOG, fall back to HASHKEY_LOG passed in.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter));

    // stdout is reserved for the report.
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .init();
}

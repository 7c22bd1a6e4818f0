use tracing_subscriber::EnvFilter;

/// Initialize logging for a workflow binary.
///
/// stdout belongs to the Alfred JSON protocol, so all log output goes to
/// stderr. Level defaults to `warn`, overridable via `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

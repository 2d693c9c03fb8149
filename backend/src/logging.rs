use tracing_subscriber::EnvFilter;

/// Initialize logging for an embedding application.
///
/// Honors `RUST_LOG` and defaults to `info`. Uses `try_init` so repeated
/// calls (e.g. from tests) are harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

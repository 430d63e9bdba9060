// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `log` records from the engine are bridged.
///
/// `RUST_LOG` overrides `default_level` when set.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

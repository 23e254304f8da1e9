//! Tracing bootstrap for applications embedding the board client.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, which
/// is not an error.
pub fn init_tracing() -> bool {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("[STARTUP] Tracing initialized with filter {}", env_filter);
    }
    installed
}

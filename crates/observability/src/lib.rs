//! Tracing and logging (shared setup).

/// Initialize process-wide logging using `STOCKLENS_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::{LogFormat, init_with};

//! Tracing/logging setup shared by binaries and integration tests.

/// Subscriber configuration and initialization.
pub mod tracing;

pub use crate::tracing::{LogFormat, TracingConfig};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::from_env());
}

//! Tracing and logging setup shared by the catalog binaries and tests.

/// Initialize process-wide tracing.
///
/// Safe to call more than once; calls after the first are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filter, format).
pub mod tracing;

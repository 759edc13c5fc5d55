//! Tracing/logging setup shared by Congo binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{
    LogConfig, LogFormat, ParseLogFilterError, ParseLogFormatError, validate_filter,
};

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    crate::tracing::init(config);
}

//! Common error types for colorex-platform.

use thiserror::Error;

/// Platform-level errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("not supported on this platform")]
    NotSupported,
    #[error("cursor unavailable: {0}")]
    Cursor(String),
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

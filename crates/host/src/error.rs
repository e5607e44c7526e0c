//! Platform error types

use thiserror::Error;

/// Errors reported by host capabilities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The host does not provide the requested capability
    #[error("Capability not supported by host")]
    Unsupported,

    /// A running transition was skipped or aborted by the host
    #[error("Transition aborted: {0}")]
    Aborted(String),

    /// Any other host-side failure
    #[error("Host error: {0}")]
    Host(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

use thiserror::Error;

/// Reasons capability negotiation can fail.
///
/// Every variant is fatal to accelerated rendering for the rest of the session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NegotiationError {
    #[error("accelerated rendering is not supported: {0}")]
    NotSupported(String),

    #[error("no adapter found: {0}")]
    NoAdapterFound(String),

    #[error("no device found: {0}")]
    NoDeviceFound(String),

    #[error("surface configuration failed: {0}")]
    SurfaceConfigurationError(String),
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

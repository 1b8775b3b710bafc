// nfcscan/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// No tag was presented, or the transport reported none
    #[error("tag not found")]
    TagNotFound,

    /// Transport-level failure, with the platform's message
    #[error("transceive failed: {0}")]
    Transceive(String),

    /// The scan was cancelled through its session handle
    #[error("scan cancelled")]
    Cancelled,

    /// Another scan holds the session's scanning flag
    #[error("a scan is already in progress")]
    ScanInProgress,

    /// Operation needs a started session
    #[error("session not started")]
    SessionNotStarted,

    /// A buffer or field has the wrong length
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required (or maximum) length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// Malformed hex input
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The transport does not implement the operation
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Rejected by [`ScanConfigBuilder::build`](crate::config::ScanConfigBuilder::build)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Whether the error means the user (or the platform) cancelled the
    /// technology request rather than the link failing.
    pub fn is_cancellation(&self) -> bool {
        match self {
            Error::Cancelled => true,
            Error::Transceive(msg) | Error::UnsupportedOperation(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.contains("cancelled") || msg.contains("closed")
            }
            _ => false,
        }
    }
}

/// Result alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

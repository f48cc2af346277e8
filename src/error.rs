//! Error types for the boardfs library.

use thiserror::Error;

/// Main error type for boardfs operations.
#[derive(Error, Debug)]
pub enum FsError {
    /// HTTP request failed with status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error (malformed directory listing or metadata).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The device mount is read-only; mutating operations are refused
    /// before any request is sent.
    #[error("Device filesystem is read-only")]
    ReadOnly,

    /// The path does not exist on the device (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A path argument does not satisfy the client's path rules.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// File content was not valid UTF-8 when text was requested.
    #[error("Invalid UTF-8 in file content: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// No device answered any of the probed addresses.
    #[error("No device found for host: {0}")]
    DeviceNotFound(String),

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for boardfs operations.
pub type Result<T> = std::result::Result<T, FsError>;

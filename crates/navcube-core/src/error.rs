//! Error types for navcube-rs.

use thiserror::Error;

/// The main error type for navcube-rs operations.
#[derive(Error, Debug)]
pub enum NavCubeError {
    /// An alignment name outside the accepted set was given to the strict parser.
    #[error("unknown alignment '{0}' (expected one of: bottomRight, bottomLeft, topRight, topLeft)")]
    InvalidAlignment(String),

    /// The plugin has been destroyed and no longer accepts mutations.
    #[error("nav cube has been destroyed")]
    Detached,

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for navcube-rs operations.
pub type Result<T> = std::result::Result<T, NavCubeError>;

//! Rendering error types.

use thiserror::Error;

/// Errors that can occur in the overlay render helpers.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The atlas cell resolution is unusable.
    #[error("invalid atlas cell resolution {0} (must be a power of two >= 32)")]
    InvalidAtlasResolution(u32),

    /// An uploaded image does not match the texture dimensions.
    #[error("texture size mismatch: expected {expected_w}x{expected_h}, got {actual_w}x{actual_h}")]
    TextureSizeMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// A specialized Result type for render helper operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

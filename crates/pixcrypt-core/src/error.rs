//! Error types for pixcrypt operations

use thiserror::Error;

/// Result type for pixcrypt operations
pub type PixResult<T> = Result<T, PixError>;

/// Errors that can occur while loading, transforming or saving images
#[derive(Error, Debug)]
pub enum PixError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid package signature")]
    InvalidSignature,

    #[error("Unsupported package version: {0}")]
    UnsupportedVersion(u8),

    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    #[error("No image loaded")]
    NoSourceImage,

    #[error("No encrypted image")]
    NoEncryptedImage,
}

//! Error types for the avatar pipeline.

use thiserror::Error;

/// Errors produced by the generator and the image pipeline around it.
#[derive(Debug, Error)]
pub enum PfpError {
    /// A polygon needs at least three sides.
    #[error("a polygon needs at least 3 sides, got {0}")]
    InvalidSides(u32),

    /// The string is not a base64 `data:` URL.
    #[error("invalid data url: {0}")]
    InvalidDataUrl(String),

    /// Base64 payload could not be decoded.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Image bytes could not be decoded or encoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The source image has no pixels.
    #[error("image has zero width or height")]
    EmptyImage,

    /// The crop rectangle covers no pixels.
    #[error("crop rectangle {width}x{height} is empty")]
    EmptyCrop { width: f64, height: f64 },

    /// Export configuration JSON could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PfpError>;

use thiserror::Error;

/// Result type alias for operations that may fail with [`FrameMaskError`].
pub type FrameMaskResult<T> = std::result::Result<T, FrameMaskError>;

/// Error types that can occur while loading settings or exporting masks.
///
/// Path generation and color decoding never fail; only the I/O and parsing
/// edges around them do.
#[derive(Debug, Error)]
pub enum FrameMaskError {
    /// Image loading, decoding, or encoding error.
    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),
    /// File system I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Settings document could not be parsed or written.
    #[error("Invalid settings document: {0}")]
    Json(#[from] serde_json::Error),
    /// Shape name is not one of rectangle, circle, polygon or star.
    #[error("Unknown shape `{0}`; expected rectangle, circle, polygon or star")]
    UnknownShape(String),
    /// Aspect ratio is not one of 16:9, 4:3 or 1:1.
    #[error("Unknown aspect ratio `{0}`; expected 16:9, 4:3 or 1:1")]
    UnknownAspectRatio(String),
    /// Custom frame image is not a JPEG or PNG.
    #[error("Unsupported custom image type `{0}`; expected image/jpeg or image/png")]
    UnsupportedImageType(String),
    /// Custom frame image exceeds the upload limit.
    #[error("Custom image is {size} bytes, the limit is {limit}")]
    ImageTooLarge { size: u64, limit: u64 },
    /// Pixel buffer read back from the GPU has the wrong length.
    #[error("Read-back buffer holds {found} bytes, expected {expected}")]
    ReadbackSize { expected: usize, found: usize },
}

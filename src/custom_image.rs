use std::fs;
use std::path::Path;

use image::{ImageFormat, ImageReader};
use log::debug;

use crate::{FrameMaskError, FrameMaskResult};

/// Largest custom frame image accepted, in bytes.
pub const MAX_CUSTOM_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for a custom frame image.
pub const CUSTOM_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Check a custom frame image by its declared MIME type and size in bytes.
///
/// The type is checked before the size.
pub fn check_custom_image(mime_type: &str, size_bytes: u64) -> FrameMaskResult<()> {
    if !CUSTOM_IMAGE_TYPES.contains(&mime_type) {
        return Err(FrameMaskError::UnsupportedImageType(mime_type.to_string()));
    }
    if size_bytes > MAX_CUSTOM_IMAGE_BYTES {
        return Err(FrameMaskError::ImageTooLarge {
            size: size_bytes,
            limit: MAX_CUSTOM_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Check an image file on disk. The format is sniffed from the file contents,
/// not taken from the extension.
pub fn check_custom_image_file(path: impl AsRef<Path>) -> FrameMaskResult<ImageFormat> {
    let path = path.as_ref();
    let size = fs::metadata(path)?.len();
    let Some(format) = ImageReader::open(path)?.with_guessed_format()?.format() else {
        return Err(FrameMaskError::UnsupportedImageType("unknown".to_string()));
    };
    check_custom_image(format.to_mime_type(), size)?;
    debug!("accepted {format:?} custom image of {size} bytes");
    Ok(format)
}

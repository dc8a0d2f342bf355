use image::RgbaImage;
use image::imageops::flip_vertical_in_place;
use log::debug;

use crate::shape::{ShapeKind, ShapeSpec};
use crate::{FrameMaskError, FrameMaskResult};

/// File name the mask download uses for `spec`.
///
/// - circle: `<base>-circle-mask.png`
/// - polygon: `<base>-<N>gon-mask.png`
/// - star: `<base>-<N>star-mask.png`
/// - rectangle: `<base>-rectangle-<W>x<H>-mask.png`
pub fn mask_file_name(base: &str, spec: &ShapeSpec) -> String {
    let points = spec.vertex_count();
    match spec.shape() {
        ShapeKind::Circle => format!("{base}-circle-mask.png"),
        ShapeKind::Polygon => format!("{base}-{points}gon-mask.png"),
        ShapeKind::Star => format!("{base}-{points}star-mask.png"),
        ShapeKind::Rectangle => format!(
            "{base}-rectangle-{}-mask.png",
            spec.aspect_ratio().as_str().replacen(':', "x", 1)
        ),
    }
}

/// File name of a preview screenshot for the given theme.
pub fn screenshot_file_name(theme: &str) -> String {
    format!("{theme}-gallery.png")
}

/// Turn a bottom-up RGBA buffer read back from WebGL into a top-down image.
pub fn flip_gl_readback(width: u32, height: u32, pixels: Vec<u8>) -> FrameMaskResult<RgbaImage> {
    let expected = width as usize * height as usize * 4;
    let found = pixels.len();
    let mut image = RgbaImage::from_raw(width, height, pixels)
        .filter(|_| found == expected)
        .ok_or(FrameMaskError::ReadbackSize { expected, found })?;
    flip_vertical_in_place(&mut image);
    debug!("flipped {width}x{height} read-back buffer");
    Ok(image)
}

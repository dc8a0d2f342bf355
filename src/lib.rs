pub mod binding;
pub mod color;
pub mod config;
pub mod custom_image;
pub mod error;
pub mod export;
pub mod mask;
pub mod path;
pub mod shape;

pub use binding::{Binding, BindingValue, ViewModel, apply_bindings, view_model_bindings};
pub use color::{argb_to_rgba, hex_to_argb, hex_to_argb_opaque, normalize_hex_input};
pub use config::{FrameSettings, MaskExportOptions};
pub use custom_image::{check_custom_image, check_custom_image_file};
pub use error::{FrameMaskError, FrameMaskResult};
pub use export::{flip_gl_readback, mask_file_name, screenshot_file_name};
pub use mask::{generate_mask_path, render_mask};
pub use path::{MaskPath, PathSegment, Point};
pub use shape::{AspectRatio, ShapeKind, ShapeSpec};

use std::path::Path;

use image::{GrayImage, RgbaImage};

use crate::mask::alpha_channel;

/// Entry point for generating and exporting a frame mask.
#[derive(Debug, Clone)]
pub struct FrameMask {
    /// Geometry of the mask.
    spec: ShapeSpec,
    /// How the mask is rasterized and named.
    options: MaskExportOptions,
}

impl FrameMask {
    pub fn new(spec: ShapeSpec) -> Self {
        let options = MaskExportOptions::default().with_canvas_size(spec.canvas_size());
        Self { spec, options }
    }

    /// Build a mask from stored host settings, rendered at `options.canvas_size`.
    pub fn from_settings(settings: &FrameSettings, options: MaskExportOptions) -> Self {
        Self {
            spec: settings.to_shape_spec(options.canvas_size),
            options,
        }
    }

    /// Replace the export options; the shape's canvas size follows them.
    pub fn with_options(mut self, options: MaskExportOptions) -> Self {
        self.spec = self.spec.with_canvas_size(options.canvas_size);
        self.options = options;
        self
    }

    /// Get a reference to the shape description.
    pub fn spec(&self) -> &ShapeSpec {
        &self.spec
    }

    /// Get a reference to the export options.
    pub fn options(&self) -> &MaskExportOptions {
        &self.options
    }

    /// The outline centred on the origin.
    pub fn path(&self) -> MaskPath {
        generate_mask_path(&self.spec)
    }

    /// File name the mask download would use.
    pub fn file_name(&self) -> String {
        mask_file_name(&self.options.base_name, &self.spec)
    }

    /// Rasterize the mask onto a transparent canvas.
    pub fn render(&self) -> MaskImage {
        MaskImage {
            image: render_mask(&self.spec, self.options.fill, self.options.tolerance),
        }
    }
}

/// A rendered mask: the fill color inside the shape, transparent outside.
#[derive(Debug, Clone)]
pub struct MaskImage {
    image: RgbaImage,
}

impl MaskImage {
    /// Get a reference to the RGBA mask.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the handle and return the RGBA mask.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Coverage as a grayscale image taken from the alpha channel.
    pub fn alpha_mask(&self) -> GrayImage {
        alpha_channel(&self.image)
    }

    /// Save the mask to the specified path; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> FrameMaskResult<()> {
        self.image.save(path)?;
        Ok(())
    }
}

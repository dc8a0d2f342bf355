use std::fs;
use std::path::Path;

use image::Rgba;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::FrameMaskResult;
use crate::path::DEFAULT_FLATTEN_TOLERANCE;
use crate::shape::{
    AspectRatio, DEFAULT_CANVAS_SIZE, DEFAULT_VERTEX_COUNT, MAX_VERTEX_COUNT, ShapeKind,
    ShapeSpec,
};

/// Smallest vertex count the generator rounds corners for.
pub const MIN_VERTEX_COUNT: u32 = 3;

/// Frame settings as the host application stores them for a scene source.
///
/// Field names follow the host's JSON document. Missing keys take the panel's
/// defaults, and the string fields keep whatever the host wrote so unknown
/// values survive a load/save round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameSettings {
    pub shape: String,
    pub aspect_ratio: String,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Corner rounding radius in pixels.
    pub border_radius: f64,
    /// Star outer radius as shown by the preview renderer, in percent.
    pub outer_radius: f64,
    /// Stroke color of the frame.
    pub color: String,
    pub stroke_width: f64,
    /// Polygon sides or star points.
    pub points: f64,
    /// Color painted inside the frame.
    pub fill_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_image_url: Option<String>,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rectangle.as_str().to_string(),
            aspect_ratio: AspectRatio::Widescreen.as_str().to_string(),
            rotation: 0.0,
            border_radius: 10.0,
            outer_radius: 50.0,
            color: "#9cbcfa".to_string(),
            stroke_width: 45.0,
            points: f64::from(DEFAULT_VERTEX_COUNT),
            fill_color: "#101026".to_string(),
            custom_image_url: None,
        }
    }
}

impl FrameSettings {
    /// Parse a settings document.
    pub fn from_json(json: &str) -> FrameMaskResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a settings document from disk.
    pub fn load(path: impl AsRef<Path>) -> FrameMaskResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> FrameMaskResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the settings document to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> FrameMaskResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// The stored shape; unknown names fall back to a rectangle.
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.parse().unwrap_or_else(|_| {
            warn!("unknown frame shape `{}`, using rectangle", self.shape);
            ShapeKind::Rectangle
        })
    }

    /// The stored aspect ratio; unknown values fall back to 16:9.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio.parse().unwrap_or_else(|_| {
            warn!("unknown aspect ratio `{}`, using 16:9", self.aspect_ratio);
            AspectRatio::Widescreen
        })
    }

    /// Vertex count with the generator's precondition applied.
    pub fn vertex_count(&self) -> u32 {
        let (count, note) = self.resolve_vertex_count();
        if let Some(note) = note {
            warn!("{note}");
        }
        count
    }

    /// One line for every stored value the lenient accessors replace.
    pub fn fallback_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if let Err(err) = self.shape.parse::<ShapeKind>() {
            notes.push(format!("{err}, using rectangle"));
        }
        if let Err(err) = self.aspect_ratio.parse::<AspectRatio>() {
            notes.push(format!("{err}, using 16:9"));
        }
        if let (_, Some(note)) = self.resolve_vertex_count() {
            notes.push(note);
        }
        notes
    }

    fn resolve_vertex_count(&self) -> (u32, Option<String>) {
        let points = self.points;
        if !points.is_finite() {
            let note = format!("{points} points is not a count, using {DEFAULT_VERTEX_COUNT}");
            return (DEFAULT_VERTEX_COUNT, Some(note));
        }
        let rounded = points.round();
        if rounded < f64::from(MIN_VERTEX_COUNT) {
            let note = format!("{points} points is below the minimum, using {MIN_VERTEX_COUNT}");
            return (MIN_VERTEX_COUNT, Some(note));
        }
        if rounded > f64::from(MAX_VERTEX_COUNT) {
            let note = format!("{points} points is above the maximum, using {MAX_VERTEX_COUNT}");
            return (MAX_VERTEX_COUNT, Some(note));
        }
        (rounded as u32, None)
    }

    /// Build the generator input for a `canvas_size` square raster.
    pub fn to_shape_spec(&self, canvas_size: u32) -> ShapeSpec {
        ShapeSpec::new(self.shape_kind())
            .with_rotation(self.rotation)
            .with_corner_radius(self.border_radius)
            .with_vertex_count(self.vertex_count())
            .with_aspect_ratio(self.aspect_ratio())
            .with_canvas_size(canvas_size)
    }
}

/// Options describing how a mask is exported.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskExportOptions {
    /// Side length of the square output image.
    pub canvas_size: u32,
    /// Prefix of the derived file name.
    pub base_name: String,
    /// Color painted inside the mask; everything else stays transparent.
    pub fill: Rgba<u8>,
    /// Maximum curve flattening error in pixels.
    pub tolerance: f64,
}

impl Default for MaskExportOptions {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            base_name: "webcam".to_string(),
            fill: Rgba([255, 255, 255, 255]),
            tolerance: DEFAULT_FLATTEN_TOLERANCE,
        }
    }
}

impl MaskExportOptions {
    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn with_fill(mut self, fill: Rgba<u8>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

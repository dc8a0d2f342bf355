use std::fmt;
use std::str::FromStr;

use crate::FrameMaskError;

/// Side length of the square raster the mask export renders into.
pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
/// Default star outer radius as a fraction of the canvas size.
pub const DEFAULT_OUTER_RADIUS_FRACTION: f64 = 0.4;
/// Default number of polygon sides or star points.
pub const DEFAULT_VERTEX_COUNT: u32 = 5;
/// Upper bound on polygon sides and star points.
pub const MAX_VERTEX_COUNT: u32 = 100;

/// The silhouette a frame mask is cut to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Polygon,
    Star,
}

impl ShapeKind {
    /// Name used in settings documents and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Star => "star",
        }
    }

    /// Human readable name given to the scene source in the host application.
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle Frame",
            ShapeKind::Circle => "Circle Frame",
            ShapeKind::Polygon => "Polygon Frame",
            ShapeKind::Star => "Star Frame",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = FrameMaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "polygon" => Ok(ShapeKind::Polygon),
            "star" => Ok(ShapeKind::Star),
            other => Err(FrameMaskError::UnknownShape(other.to_string())),
        }
    }
}

/// Aspect ratio of a rectangular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    #[default]
    Widescreen,
    Standard,
    Square,
}

impl AspectRatio {
    /// The `W:H` form stored in settings documents.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Standard => "4:3",
            AspectRatio::Square => "1:1",
        }
    }

    /// Height divided by width.
    pub fn height_factor(self) -> f64 {
        match self {
            AspectRatio::Widescreen => 9.0 / 16.0,
            AspectRatio::Standard => 3.0 / 4.0,
            AspectRatio::Square => 1.0,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = FrameMaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(AspectRatio::Widescreen),
            "4:3" => Ok(AspectRatio::Standard),
            "1:1" => Ok(AspectRatio::Square),
            other => Err(FrameMaskError::UnknownAspectRatio(other.to_string())),
        }
    }
}

/// Immutable description of one mask to generate.
///
/// The setters clamp their input, so a `ShapeSpec` never carries a negative
/// corner radius, an outer radius fraction outside (0, 1], or a zero canvas.
/// The vertex count is kept as given; clamping it is the job of the settings
/// layer (see [`FrameSettings::to_shape_spec`](crate::FrameSettings::to_shape_spec)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    pub(crate) shape: ShapeKind,
    pub(crate) rotation_degrees: f64,
    pub(crate) corner_radius: f64,
    pub(crate) outer_radius_fraction: f64,
    pub(crate) vertex_count: u32,
    pub(crate) aspect_ratio: AspectRatio,
    pub(crate) canvas_size: u32,
}

impl ShapeSpec {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            rotation_degrees: 0.0,
            corner_radius: 0.0,
            outer_radius_fraction: DEFAULT_OUTER_RADIUS_FRACTION,
            vertex_count: DEFAULT_VERTEX_COUNT,
            aspect_ratio: AspectRatio::default(),
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }

    /// Rotate the generation frame, clockwise-positive in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = if degrees.is_finite() { degrees } else { 0.0 };
        self
    }

    /// Requested rounding radius; negative and non-finite values become zero.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        self
    }

    /// Star outer radius as a fraction of the canvas size.
    pub fn with_outer_radius_fraction(mut self, fraction: f64) -> Self {
        self.outer_radius_fraction = if fraction.is_finite() && fraction > 0.0 {
            fraction.min(1.0)
        } else {
            DEFAULT_OUTER_RADIUS_FRACTION
        };
        self
    }

    /// Polygon sides or star points, capped at [`MAX_VERTEX_COUNT`].
    pub fn with_vertex_count(mut self, count: u32) -> Self {
        self.vertex_count = count.min(MAX_VERTEX_COUNT);
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Side length of the square target raster; zero becomes one.
    pub fn with_canvas_size(mut self, size: u32) -> Self {
        self.canvas_size = size.max(1);
        self
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn outer_radius_fraction(&self) -> f64 {
        self.outer_radius_fraction
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }
}

impl Default for ShapeSpec {
    fn default() -> Self {
        Self::new(ShapeKind::default())
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use frame_mask::shape::MAX_VERTEX_COUNT;
use frame_mask::{AspectRatio, ShapeKind, argb_to_rgba, hex_to_argb_opaque, normalize_hex_input};
use image::Rgba;

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(author, version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the frame mask as a PNG
    Mask(MaskCommand),
    /// Print the mask outline as SVG path data
    Path(PathCommand),
    /// Print the packed ARGB value of a hex color
    Color(ColorCommand),
    /// Convert a raw bottom-up RGBA read-back dump into a PNG
    Screenshot(ScreenshotCommand),
    /// Show how a settings document drives the mask and the preview
    Inspect(InspectCommand),
    /// Check that a file can be used as the custom frame image
    Image(ImageCommand),
}

/// Frame shapes.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShapeArg {
    Rectangle,
    Circle,
    Polygon,
    Star,
}

impl From<ShapeArg> for ShapeKind {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Rectangle => ShapeKind::Rectangle,
            ShapeArg::Circle => ShapeKind::Circle,
            ShapeArg::Polygon => ShapeKind::Polygon,
            ShapeArg::Star => ShapeKind::Star,
        }
    }
}

/// Rectangle aspect ratios.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AspectRatioArg {
    #[value(name = "16:9")]
    Widescreen,
    #[value(name = "4:3")]
    Standard,
    #[value(name = "1:1")]
    Square,
}

impl From<AspectRatioArg> for AspectRatio {
    fn from(value: AspectRatioArg) -> Self {
        match value {
            AspectRatioArg::Widescreen => AspectRatio::Widescreen,
            AspectRatioArg::Standard => AspectRatio::Standard,
            AspectRatioArg::Square => AspectRatio::Square,
        }
    }
}

/// Shape selection shared by the commands that generate a mask.
///
/// Flags override the values read from `--settings`.
#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Host settings document (JSON) to start from
    #[arg(short = 's', long, env = "FRAME_MASK_SETTINGS")]
    pub settings: Option<PathBuf>,
    /// Frame shape
    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,
    /// Rectangle aspect ratio
    #[arg(long = "aspect-ratio", value_enum)]
    pub aspect_ratio: Option<AspectRatioArg>,
    /// Clockwise rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub rotation: Option<f64>,
    /// Corner rounding radius in pixels
    #[arg(long = "corner-radius")]
    pub corner_radius: Option<f64>,
    /// Polygon sides or star points
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=i64::from(MAX_VERTEX_COUNT)))]
    pub points: Option<u32>,
    /// Star outer radius as a fraction of the canvas size
    #[arg(long = "outer-radius-fraction", default_value_t = 0.4)]
    pub outer_radius_fraction: f64,
    /// Side length of the square canvas in pixels
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub size: u32,
}

#[derive(Args, Debug)]
pub struct MaskCommand {
    #[command(flatten)]
    pub shape: ShapeArgs,
    /// Output path (defaults to the derived mask name, e.g. `webcam-6gon-mask.png`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Prefix of the derived file name
    #[arg(long = "base-name", default_value = "webcam")]
    pub base_name: String,
    /// Fill color inside the mask (`#RRGGBB`)
    #[arg(long, default_value = "#ffffff", value_parser = parse_fill)]
    pub fill: Rgba<u8>,
    /// Maximum curve flattening error in pixels
    #[arg(long, default_value_t = 0.25)]
    pub tolerance: f64,
    /// Save only the coverage as a grayscale image
    #[arg(long = "alpha-only")]
    pub alpha_only: bool,
}

#[derive(Args, Debug)]
pub struct PathCommand {
    #[command(flatten)]
    pub shape: ShapeArgs,
    /// Keep the outline centred on the origin instead of the canvas centre
    #[arg(long)]
    pub centered: bool,
    /// Wrap the path data in a complete SVG document
    #[arg(long)]
    pub document: bool,
}

#[derive(Args, Debug)]
pub struct ColorCommand {
    /// Color in `#RGB`, `#RRGGBB` or `#RRGGBBAA` form
    pub hex: String,
    /// Alpha used unless the color carries its own (0-255 or 0x00-0xFF)
    #[arg(long, default_value = "255", value_parser = parse_alpha)]
    pub alpha: u8,
}

#[derive(Args, Debug)]
pub struct ScreenshotCommand {
    /// Raw RGBA dump, bottom row first
    pub input: PathBuf,
    /// Width of the read-back buffer in pixels
    #[arg(long)]
    pub width: u32,
    /// Height of the read-back buffer in pixels
    #[arg(long)]
    pub height: u32,
    /// Output path (defaults to `<theme>-gallery.png`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Theme name used for the default file name
    #[arg(long, default_value = "default")]
    pub theme: String,
}

#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Host settings document (JSON)
    pub settings: PathBuf,
    /// Show the fill color as the transparent preview would receive it
    #[arg(long)]
    pub transparent: bool,
}

#[derive(Args, Debug)]
pub struct ImageCommand {
    /// JPEG or PNG file, at most 10 MB
    pub path: PathBuf,
}

fn parse_fill(value: &str) -> Result<Rgba<u8>, String> {
    let hex = normalize_hex_input(value)
        .ok_or_else(|| format!("fill color must be six hex digits like #ffffff, got `{value}`"))?;
    Ok(Rgba(argb_to_rgba(hex_to_argb_opaque(&hex))))
}

fn parse_alpha(value: &str) -> Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|_| format!("alpha must be 0-255 or 0x00-0xFF, got `{value}`"))
}

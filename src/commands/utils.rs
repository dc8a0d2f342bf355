use frame_mask::{FrameMaskResult, FrameSettings, ShapeSpec};

use crate::cli::ShapeArgs;

/// Load the settings document (if any) and apply the command line overrides.
pub fn resolve_settings(args: &ShapeArgs) -> FrameMaskResult<FrameSettings> {
    let mut settings = match &args.settings {
        Some(path) => FrameSettings::load(path)?,
        None => FrameSettings::default(),
    };

    if let Some(shape) = args.shape {
        settings.shape = frame_mask::ShapeKind::from(shape).as_str().to_string();
    }
    if let Some(ratio) = args.aspect_ratio {
        settings.aspect_ratio = frame_mask::AspectRatio::from(ratio).as_str().to_string();
    }
    if let Some(rotation) = args.rotation {
        settings.rotation = rotation;
    }
    if let Some(radius) = args.corner_radius {
        settings.border_radius = radius;
    }
    if let Some(points) = args.points {
        settings.points = f64::from(points);
    }
    warn_fallbacks(&settings);
    Ok(settings)
}

/// Tell the user about every stored value the mask will not use as written.
pub fn warn_fallbacks(settings: &FrameSettings) {
    for note in settings.fallback_notes() {
        eprintln!("Warning: {note}");
    }
}

/// The convenience function to build the generator input from the shape arguments.
pub fn resolve_spec(args: &ShapeArgs) -> FrameMaskResult<ShapeSpec> {
    let settings = resolve_settings(args)?;
    Ok(settings
        .to_shape_spec(args.size)
        .with_outer_radius_fraction(args.outer_radius_fraction))
}

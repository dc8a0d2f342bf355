use frame_mask::{
    BindingValue, FrameMask, FrameMaskResult, FrameSettings, MaskExportOptions, view_model_bindings,
};

use crate::cli::InspectCommand;

use super::utils::warn_fallbacks;

/// The main function to run the inspect command.
pub fn run(cmd: InspectCommand) -> FrameMaskResult<()> {
    let settings = FrameSettings::load(&cmd.settings)?;
    warn_fallbacks(&settings);
    let mask = FrameMask::from_settings(&settings, MaskExportOptions::default());
    let spec = mask.spec();

    println!("{}", spec.shape().display_name());
    println!("  mask file:     {}", mask.file_name());
    println!("  rotation:      {}", spec.rotation_degrees());
    println!("  corner radius: {}", spec.corner_radius());
    println!("  points:        {}", spec.vertex_count());
    println!("  aspect ratio:  {}", spec.aspect_ratio());
    if let Some(url) = &settings.custom_image_url {
        println!("  custom image:  {url}");
    }

    println!("Preview inputs:");
    for binding in view_model_bindings(&settings, cmd.transparent) {
        match binding.value {
            BindingValue::Number(v) => println!("  {:<12} {v}", binding.name),
            BindingValue::Color(argb) => println!("  {:<12} 0x{argb:08X}", binding.name),
            BindingValue::Enum(v) => println!("  {:<12} {v}", binding.name),
        }
    }

    Ok(())
}

use frame_mask::{FrameMask, FrameMaskResult, MaskExportOptions};

use crate::cli::MaskCommand;

use super::utils::resolve_spec;

/// The main function to run the mask command.
pub fn run(cmd: MaskCommand) -> FrameMaskResult<()> {
    let spec = resolve_spec(&cmd.shape)?;
    let options = MaskExportOptions::default()
        .with_canvas_size(spec.canvas_size())
        .with_base_name(cmd.base_name.as_str())
        .with_fill(cmd.fill)
        .with_tolerance(cmd.tolerance);
    let mask = FrameMask::new(spec).with_options(options);
    let output_path = cmd.output.clone().unwrap_or_else(|| mask.file_name().into());

    let rendered = mask.render();
    if cmd.alpha_only {
        rendered.alpha_mask().save(&output_path)?;
        println!("Alpha mask PNG saved to {}", output_path.display());
    } else {
        rendered.save(&output_path)?;
        println!(
            "{} mask PNG saved to {}",
            spec.shape().display_name(),
            output_path.display()
        );
    }

    Ok(())
}

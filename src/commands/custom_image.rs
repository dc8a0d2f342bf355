use frame_mask::{FrameMaskResult, check_custom_image_file};

use crate::cli::ImageCommand;

/// The main function to run the image command.
pub fn run(cmd: ImageCommand) -> FrameMaskResult<()> {
    let format = check_custom_image_file(&cmd.path)?;
    println!(
        "{} can be used as a custom frame image ({})",
        cmd.path.display(),
        format.to_mime_type()
    );
    Ok(())
}

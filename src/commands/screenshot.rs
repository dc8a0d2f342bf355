use std::fs;
use std::path::PathBuf;

use frame_mask::{FrameMaskResult, flip_gl_readback, screenshot_file_name};

use crate::cli::ScreenshotCommand;

/// The main function to run the screenshot command.
pub fn run(cmd: ScreenshotCommand) -> FrameMaskResult<()> {
    let pixels = fs::read(&cmd.input)?;
    let image = flip_gl_readback(cmd.width, cmd.height, pixels)?;
    let output_path = cmd
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(screenshot_file_name(&cmd.theme)));
    image.save(&output_path)?;
    println!("Screenshot PNG saved to {}", output_path.display());
    Ok(())
}

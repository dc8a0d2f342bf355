mod color;
mod custom_image;
mod inspect;
mod mask;
mod path;
mod screenshot;
mod utils;

use frame_mask::FrameMaskResult;

use crate::cli::{Cli, Commands};

/// The main function to run the command based on CLI input.
pub fn run(cli: Cli) -> FrameMaskResult<()> {
    dispatch(cli.command)
}

/// Dispatch the command to the appropriate handler.
fn dispatch(command: Commands) -> FrameMaskResult<()> {
    match command {
        Commands::Mask(cmd) => mask::run(cmd),
        Commands::Path(cmd) => path::run(cmd),
        Commands::Color(cmd) => color::run(cmd),
        Commands::Screenshot(cmd) => screenshot::run(cmd),
        Commands::Inspect(cmd) => inspect::run(cmd),
        Commands::Image(cmd) => custom_image::run(cmd),
    }
}

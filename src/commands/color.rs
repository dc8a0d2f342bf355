use frame_mask::{FrameMaskResult, argb_to_rgba, hex_to_argb};

use crate::cli::ColorCommand;

/// The main function to run the color command.
pub fn run(cmd: ColorCommand) -> FrameMaskResult<()> {
    let argb = hex_to_argb(&cmd.hex, cmd.alpha);
    let [r, g, b, a] = argb_to_rgba(argb);
    println!("0x{argb:08X} ({argb}) rgba({r}, {g}, {b}, {a})");
    Ok(())
}

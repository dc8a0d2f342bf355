use frame_mask::{FrameMaskResult, generate_mask_path};

use crate::cli::PathCommand;

use super::utils::resolve_spec;

/// The main function to run the path command.
pub fn run(cmd: PathCommand) -> FrameMaskResult<()> {
    let spec = resolve_spec(&cmd.shape)?;
    let size = spec.canvas_size();
    let mut path = generate_mask_path(&spec);
    if !cmd.centered {
        let half = f64::from(size) / 2.0;
        path = path.translated(half, half);
    }

    if cmd.document {
        println!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">"
        );
        println!("  <path d=\"{path}\" fill=\"#ffffff\"/>");
        println!("</svg>");
    } else {
        println!("{path}");
    }

    Ok(())
}

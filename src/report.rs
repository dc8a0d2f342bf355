use frame_mask::FrameMaskError;

pub fn report_error(err: &FrameMaskError) {
    match err {
        FrameMaskError::ReadbackSize { expected, found } => {
            eprintln!("Read-back buffer holds {found} bytes, expected {expected}.");
            eprintln!();
            eprintln!("The dump must contain width * height * 4 bytes of RGBA data:");
            eprintln!("  - Check --width and --height against the canvas size");
            eprintln!("  - Make sure the dump was read with RGBA / UNSIGNED_BYTE");
        }
        FrameMaskError::UnsupportedImageType(_) | FrameMaskError::ImageTooLarge { .. } => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("Custom frame images must be JPG or PNG files of at most 10 MB.");
        }
        FrameMaskError::Json(_) => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("Settings are the JSON document the panel stores, for example:");
            eprintln!("  {{ \"shape\": \"star\", \"points\": 5, \"borderRadius\": 10 }}");
        }
        _ => {
            eprintln!("{err}");
        }
    }
}

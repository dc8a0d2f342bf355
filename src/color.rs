/// Alpha used when neither the caller nor the color string supplies one.
pub const OPAQUE: u8 = 0xFF;

/// Decode a `#RGB`, `#RRGGBB` or `#RRGGBBAA` color into a packed ARGB integer.
///
/// The alpha byte is `default_alpha` unless the eight-digit form carries its
/// own. Anything else, including the empty string and digits without the
/// leading `#`, decodes as white with `default_alpha`. Channel order is
/// `(a << 24) | (r << 16) | (g << 8) | b`.
pub fn hex_to_argb(hex: &str, default_alpha: u8) -> u32 {
    let channels = hex.trim().strip_prefix('#').and_then(parse_channels);
    match channels {
        Some(([r, g, b], alpha)) => pack_argb(alpha.unwrap_or(default_alpha), r, g, b),
        None => pack_argb(default_alpha, 0xFF, 0xFF, 0xFF),
    }
}

/// [`hex_to_argb`] with an opaque default alpha.
pub fn hex_to_argb_opaque(hex: &str) -> u32 {
    hex_to_argb(hex, OPAQUE)
}

fn parse_channels(digits: &str) -> Option<([u8; 3], Option<u8>)> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match digits.len() {
        3 => {
            let nibble = |i: usize| byte(i..i + 1).map(|v| v * 0x11);
            Some(([nibble(0)?, nibble(1)?, nibble(2)?], None))
        }
        6 => Some(([byte(0..2)?, byte(2..4)?, byte(4..6)?], None)),
        8 => Some(([byte(0..2)?, byte(2..4)?, byte(4..6)?], Some(byte(6..8)?))),
        _ => None,
    }
}

pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Unpack an ARGB integer into `[r, g, b, a]` bytes for image buffers.
pub fn argb_to_rgba(argb: u32) -> [u8; 4] {
    let [a, r, g, b] = argb.to_be_bytes();
    [r, g, b, a]
}

/// Normalize a typed color: add the missing `#` and accept exactly six hex digits.
pub fn normalize_hex_input(input: &str) -> Option<String> {
    let input = input.trim();
    let digits = input.strip_prefix('#').unwrap_or(input);
    (digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .then(|| format!("#{digits}"))
}

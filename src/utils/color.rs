/// Darkens a `#rrggbb` color by `ratio` (0.0 keeps the color, 1.0 is black).
/// Anything that does not parse as a six-digit hex color is returned
/// unchanged.
pub fn shade(ratio: f32, color: &str) -> String {
    let Some((r, g, b)) = parse_hex(color) else {
        return color.to_string();
    };
    let factor = (1.0 - ratio).clamp(0.0, 1.0);

    format!(
        "#{:02x}{:02x}{:02x}",
        scale(r, factor),
        scale(g, factor),
        scale(b, factor)
    )
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn scale(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).round() as u8
}

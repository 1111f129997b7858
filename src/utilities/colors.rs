// Color Utilities
// Parsing of configured colors and conversion to ratatui colors

use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Convert an RGB tuple to ratatui Color
pub fn rgb(color: (u8, u8, u8)) -> Color {
    let (r, g, b) = color;
    Color::Rgb(r, g, b)
}

/// Parse "#rrggbb", "rrggbb" or a basic color name into an RGB tuple
pub fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    let named = match value.to_lowercase().as_str() {
        "black" => Some((0, 0, 0)),
        "white" => Some((255, 255, 255)),
        "red" => Some((255, 59, 48)),
        "green" => Some((52, 199, 89)),
        "blue" => Some((10, 132, 255)),
        "yellow" => Some((255, 204, 0)),
        "cyan" => Some((50, 173, 230)),
        "gray" | "grey" => Some((142, 142, 147)),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    Some((
        u8::from_str_radix(&hex[0..2], 16).ok()?,
        u8::from_str_radix(&hex[2..4], 16).ok()?,
        u8::from_str_radix(&hex[4..6], 16).ok()?,
    ))
}

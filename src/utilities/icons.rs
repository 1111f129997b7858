// Icon Utilities
// Maps configured icon names to terminal glyphs

/// Glyph for a known icon name
pub fn icon_glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "house" | "home" => "⌂",
        "person" | "profile" => "☺",
        "gear" | "settings" => "⚙",
        "star" => "★",
        "heart" => "♥",
        "search" | "magnifyingglass" => "⌕",
        "mail" | "envelope" => "✉",
        "clock" => "◷",
        _ => return None,
    };
    Some(glyph)
}

// Utilities module
// Helper functions and tools

pub mod colors;
pub mod icons;

pub use colors::{hex_color, parse_color, rgb};
pub use icons::icon_glyph;

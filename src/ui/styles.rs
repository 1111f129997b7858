// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::core::app_config::DisplaySettings;
use crate::utilities::{hex_color, rgb};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn footer_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // === Content Panel ===

    pub fn content_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn content_body() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn border() -> Style {
        Style::default().fg(hex_color(0x444444))
    }

    // === Tab Bar ===
    // Colors are compiled from config.yaml and may be overridden at runtime

    pub fn bar_color(display: &DisplaySettings) -> Color {
        rgb(display.bar_color)
    }

    /// Soft shadow traced just above the bar's top edge
    pub fn shadow() -> Color {
        hex_color(0x3a3a3c)
    }

    /// Fill of the lifted button
    pub fn accent_color(display: &DisplaySettings) -> Color {
        rgb(display.accent_color)
    }

    /// Icon tint, identical in both states
    pub fn tint(display: &DisplaySettings) -> Style {
        Style::default()
            .fg(rgb(display.tint_color))
            .add_modifier(Modifier::BOLD)
    }
}

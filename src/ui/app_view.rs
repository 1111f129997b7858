// Application View
// Main application layout and rendering

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_wave_bar, wave_bar::bar_region_height, Styles};
use crate::core::App;
use crate::utilities::icon_glyph;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let bar_height = bar_region_height(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(0),             // Tab content
            Constraint::Length(1),          // Footer
            Constraint::Length(bar_height), // Wave bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_content(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
    render_wave_bar(f, app, chunks[3], Instant::now());
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str())
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the content of the tab last reported through the selection callback
fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let items = app.controller.items();
    let Some(item) = items.get(app.content_index()) else {
        return;
    };

    let glyph = icon_glyph(item.icon.name()).unwrap_or("?");
    let text = vec![
        Line::from(Span::styled(format!("{} {}", glyph, item.name), Styles::content_title())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Tab {} of {} ({})", item.index + 1, items.len(), item.id),
            Styles::content_body(),
        )),
    ];

    let content = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title(item.name.as_str()),
        );
    f.render_widget(content, area);
}

/// Render the footer: key bindings then status text
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, binding) in app.bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::footer()));
        }
        spans.push(Span::styled(binding.key.as_str(), Styles::footer_key()));
        spans.push(Span::styled(format!(": {}", binding.description), Styles::footer()));
    }
    if !app.status_text.is_empty() {
        spans.push(Span::styled(format!("  {}", app.status_text), Styles::content_body()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// UI module
// TUI views for the wave tab bar

pub mod app_view;
pub mod styles;
pub mod wave_bar;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::{Duration, Instant};

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use styles::Styles;
pub use wave_bar::render_wave_bar;

/// Frame interval while an animation is in flight
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Poll interval when nothing moves
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Render the UI; the first draw doubles as the bootstrap layout pass
        terminal.draw(|f| render_app(f, app))?;

        let timeout = if app.controller.layer().is_animating(Instant::now()) {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        // Handle events
        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(EventHandler::handle(event));
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

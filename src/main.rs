// Wave Tab Bar
// TUI demo of a tab bar whose selected button rises out of a wave-shaped notch

// IMPORTS ------------------>>

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use wave_tabbar::core::App;
use wave_tabbar::load_and_validate_config;
use wave_tabbar::ui::run_app;

//--------------------------------------------------------<<

/// Overrides the log file location
const LOG_ENV_VAR: &str = "WAVE_TABBAR_LOG";

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    setup_tracing();

    // Load and validate configuration from YAML file
    let config = load_and_validate_config(None)?;
    let mouse_enabled = config.settings.display.mouse_enabled;
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "Application exited with error");
    }
    result
}

/// Log to a file so output never lands on the alternate screen
fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let log_path = std::env::var(LOG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("wave-tabbar.log"));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!(path = ?log_path, "Tracing initialized");
}

// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Select the tab left of the current one
    PreviousTab,

    /// Select the tab right of the current one
    NextTab,

    /// Select a tab by index
    SelectTab(usize),

    /// Left click at a terminal cell
    Click { column: u16, row: u16 },

    /// Terminal size changed
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::PreviousTab,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::NextTab,

            // Digit keys are 1-based
            KeyCode::Char(c @ '1'..='9') => AppEvent::SelectTab(c as usize - '1' as usize),

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

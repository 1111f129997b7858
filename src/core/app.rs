// Application State
// Hosts the selection controller: item list, layout collaborator and navigation context

use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

use super::controller::{BootstrapOutcome, SelectionController};
use super::events::AppEvent;
use super::layout::{BarLayout, LayoutPass, Viewport};
use super::AppConfig;
use crate::config::BindingConfigYaml;
use crate::config_validation::ValidatedConfig;
use crate::render::TerminalLayer;

/// Main application state
pub struct App {
    /// Effective configuration (compiled defaults merged with YAML overrides)
    pub config: AppConfig,

    /// Window title
    pub title: String,

    /// Key bindings shown in the footer
    pub bindings: Vec<BindingConfigYaml>,

    /// Status bar text
    pub status_text: String,

    /// Single authority over the selected tab
    pub controller: SelectionController<TerminalLayer>,

    /// Button spacing rules
    pub layout: BarLayout,

    /// Geometry of the last layout pass
    pub last_pass: Option<LayoutPass>,

    /// Cell mapping of the last drawn bar
    pub viewport: Option<Viewport>,

    /// Tab whose content is displayed, written by the selection callback
    content_index: Rc<Cell<usize>>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(validated: ValidatedConfig) -> Self {
        let config = validated.settings;
        let content_index = Rc::new(Cell::new(0));

        let navigation = Rc::clone(&content_index);
        let controller = SelectionController::new(
            validated.items,
            config.wave.geometry(),
            config.wave.offsets(),
            config.wave.timing(),
            TerminalLayer::new(),
        )
        .on_select(move |index| navigation.set(index));

        Self {
            layout: config.wave.bar_layout(),
            config,
            title: validated.title,
            bindings: validated.bindings,
            status_text: validated.status_text,
            controller,
            last_pass: None,
            viewport: None,
            content_index,
            should_quit: false,
        }
    }

    /// Index of the tab whose content is shown
    pub fn content_index(&self) -> usize {
        self.content_index.get()
    }

    /// Report a completed layout of a bar `viewport.width_cells` columns wide
    ///
    /// Seeds the wave on the first pass; later passes only re-anchor when the geometry changed.
    pub fn layout_complete(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        let pass = self.layout.compute(viewport.bar_width(), self.controller.item_count());

        match self.controller.layout_complete(&pass) {
            BootstrapOutcome::Seeded | BootstrapOutcome::Deferred => {}
            BootstrapOutcome::AlreadyInitialized => {
                if self.last_pass.as_ref() != Some(&pass) {
                    self.controller.relayout(&pass);
                }
            }
        }
        self.last_pass = Some(pass);
    }

    /// Select a tab through the controller using the laid out center
    pub fn select(&mut self, index: usize) {
        if index >= self.controller.buttons().len() {
            debug!(index, "Ignoring selection without laid out button");
            return;
        }
        self.controller.select_index(index);
    }

    /// Move selection left
    pub fn select_previous(&mut self) {
        let index = self.controller.selected_index();
        if index > 0 {
            self.select(index - 1);
        }
    }

    /// Move selection right
    pub fn select_next(&mut self) {
        let index = self.controller.selected_index();
        if index + 1 < self.controller.item_count() {
            self.select(index + 1);
        }
    }

    /// Handle a left click at a terminal cell
    pub fn click(&mut self, column: u16, row: u16) {
        let (Some(viewport), Some(pass)) = (self.viewport, self.last_pass.as_ref()) else {
            return;
        };
        let Some(point) = viewport.to_bar_point(column, row) else {
            return;
        };

        let verticals = self.controller.verticals();
        if let Some(index) = self.layout.hit_test(pass, &verticals, point) {
            self.select(index);
        }
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::PreviousTab => self.select_previous(),
            AppEvent::NextTab => self.select_next(),
            AppEvent::SelectTab(index) => {
                if index < self.controller.item_count() {
                    self.select(index);
                }
            }
            AppEvent::Click { column, row } => {
                if self.config.display.mouse_enabled {
                    self.click(column, row);
                }
            }
            // Picked up by the next layout pass
            AppEvent::Resize => {}
            AppEvent::None => {}
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

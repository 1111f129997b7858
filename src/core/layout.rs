// Bar Layout
// Button spacing rules and the per-pass geometry reported to the controller

use super::geometry::Point;
use super::tab::{LiftOffsets, VerticalState};

/// Geometry reported by one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPass {
    pub bar_width: f64,
    pub bar_height: f64,
    /// Horizontal center of each button, in item order
    pub button_centers: Vec<f64>,
}

impl LayoutPass {
    /// A pass is usable once buttons exist and the bar has a size
    pub fn is_laid_out(&self) -> bool {
        !self.button_centers.is_empty() && self.bar_width > 0.0 && self.bar_height > 0.0
    }
}

/// Evenly spaced row of fixed-width buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub button_width: f64,
    pub bar_height: f64,
    pub offsets: LiftOffsets,
}

impl BarLayout {
    /// Lay out `item_count` buttons across `bar_width`
    ///
    /// Gaps are equal, including the ones before the first and after the last button.
    pub fn compute(&self, bar_width: f64, item_count: usize) -> LayoutPass {
        let n = item_count as f64;
        let spacing = (bar_width - n * self.button_width) / (n + 1.0);
        let button_centers = (0..item_count)
            .map(|i| spacing + i as f64 * (self.button_width + spacing) + self.button_width / 2.0)
            .collect();

        LayoutPass {
            bar_width,
            bar_height: self.bar_height,
            button_centers,
        }
    }

    /// Index of the button whose circular footprint contains `point`
    ///
    /// `verticals` gives each button's current state so lifted buttons are hit where they are drawn.
    pub fn hit_test(&self, pass: &LayoutPass, verticals: &[VerticalState], point: Point) -> Option<usize> {
        let radius = self.button_width / 2.0;
        pass.button_centers
            .iter()
            .zip(verticals)
            .position(|(&center_x, &vertical)| {
                let center_y = self.offsets.offset_for(vertical);
                let dx = point.x - center_x;
                let dy = point.y - center_y;
                dx * dx + dy * dy <= radius * radius
            })
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        use crate::core::app_config::compiled;
        Self {
            button_width: compiled::BUTTON_WIDTH,
            bar_height: compiled::BAR_HEIGHT,
            offsets: LiftOffsets::default(),
        }
    }
}

/// Mapping between terminal cells and bar points
///
/// The drawing area holds `headroom_rows` rows above the bar's top edge for lifted buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Column of the bar's left edge
    pub left: u16,
    /// Row whose top is the bar's top edge
    pub top_edge_row: u16,
    pub width_cells: u16,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Viewport {
    /// Rows needed above the top edge so a lifted button of `button_width` is fully visible
    pub fn headroom_rows(button_width: f64, lifted_offset: f64, cell_height: f64) -> u16 {
        let overhang = (button_width / 2.0 - lifted_offset).max(0.0);
        ((overhang / cell_height).ceil() as u16).max(1)
    }

    /// Rows needed to show the whole bar
    pub fn bar_rows(bar_height: f64, cell_height: f64) -> u16 {
        ((bar_height / cell_height).ceil() as u16).max(1)
    }

    pub fn bar_width(&self) -> f64 {
        self.width_cells as f64 * self.cell_width
    }

    /// Bar-local point at the center of a terminal cell, `None` left or right of the bar
    pub fn to_bar_point(&self, column: u16, row: u16) -> Option<Point> {
        if column < self.left || column >= self.left.saturating_add(self.width_cells) {
            return None;
        }
        let x = (f64::from(column - self.left) + 0.5) * self.cell_width;
        let y = (f64::from(row) - f64::from(self.top_edge_row) + 0.5) * self.cell_height;
        Some(Point::new(x, y))
    }
}

// Wave Bar
// Draws the bar silhouette and its buttons with a braille canvas

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    Frame,
};

use super::Styles;
use crate::core::{App, ButtonFill, Point, Viewport};
use crate::render::ButtonFrame;
use crate::utilities::icon_glyph;

/// Rows the bar region needs: headroom for lifted buttons plus the bar itself
pub fn bar_region_height(app: &App) -> u16 {
    let wave = &app.config.wave;
    let cell_height = app.config.display.cell_height;
    Viewport::headroom_rows(wave.button_width, wave.lifted_offset, cell_height)
        .saturating_add(Viewport::bar_rows(wave.bar_height, cell_height))
}

/// Shadow offset above the top edge, in points
const SHADOW_LIFT: f64 = 2.0;

/// Depth of the top edge below y = 0 at `x`
///
/// Takes the deepest crossing so a notch running past the bar ends still reads correctly.
pub fn top_edge_depth(top_edge: &[Point], x: f64) -> f64 {
    top_edge
        .windows(2)
        .filter_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let (lo, hi) = if a.x <= b.x { (a, b) } else { (b, a) };
            if x < lo.x || x > hi.x {
                return None;
            }
            if hi.x == lo.x {
                return Some(lo.y.max(hi.y));
            }
            let t = (x - lo.x) / (hi.x - lo.x);
            Some(lo.y + (hi.y - lo.y) * t)
        })
        .fold(0.0, f64::max)
}

/// Report the layout pass for `area` and draw the bar
pub fn render_wave_bar(f: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let wave = app.config.wave.clone();
    let display = app.config.display.clone();
    let headroom = Viewport::headroom_rows(wave.button_width, wave.lifted_offset, display.cell_height);

    let viewport = Viewport {
        left: area.x,
        top_edge_row: area.y.saturating_add(headroom),
        width_cells: area.width,
        cell_width: display.cell_width,
        cell_height: display.cell_height,
    };
    app.layout_complete(viewport);

    // Nothing exists to draw until the wave is bootstrapped
    let Some(outline) = app.controller.layer_mut().outline_at(now) else {
        return;
    };
    let buttons = app.controller.layer_mut().buttons_at(now);
    let centers = app
        .last_pass
        .as_ref()
        .map(|p| p.button_centers.clone())
        .unwrap_or_default();

    let bar_width = viewport.bar_width();
    let top = f64::from(headroom) * display.cell_height;
    let bottom = -(f64::from(area.height.saturating_sub(headroom)) * display.cell_height);
    let bar_color = Styles::bar_color(&display);
    let accent = Styles::accent_color(&display);

    // Vertical fill strokes, two per column to match braille resolution
    let top_edge = outline.top_edge(display.curve_steps);
    let step = display.cell_width / 2.0;
    let strokes: Vec<CanvasLine> = (0..)
        .map(|i| i as f64 * step + step / 2.0)
        .take_while(|&x| x < bar_width)
        .map(|x| CanvasLine {
            x1: x,
            y1: -top_edge_depth(&top_edge, x),
            x2: x,
            y2: -wave.bar_height,
            color: bar_color,
        })
        .collect();

    // Shadow traces the top edge, drawn over the fill's first row
    let shadow_color = Styles::shadow();
    let shadow: Vec<CanvasLine> = top_edge
        .windows(2)
        .map(|pair| CanvasLine {
            x1: pair[0].x,
            y1: SHADOW_LIFT - pair[0].y,
            x2: pair[1].x,
            y2: SHADOW_LIFT - pair[1].y,
            color: shadow_color,
        })
        .collect();

    let radius = wave.button_width / 2.0;
    let items = app.controller.items().to_vec();
    let sprites: Vec<(f64, ButtonFrame, &'static str)> = buttons
        .iter()
        .zip(&centers)
        .zip(&items)
        .filter_map(|((frame, &center_x), item)| {
            frame.map(|frame| (center_x, frame, icon_glyph(item.icon.name()).unwrap_or("?")))
        })
        .collect();

    let tint = Styles::tint(&display);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(Color::Reset)
        .x_bounds([0.0, bar_width])
        .y_bounds([bottom, top])
        .paint(|ctx| {
            for stroke in &strokes {
                ctx.draw(stroke);
            }
            for line in &shadow {
                ctx.draw(line);
            }
            ctx.layer();

            for (center_x, frame, glyph) in &sprites {
                let center_y = -frame.offset_y;
                if frame.treatment.fill == ButtonFill::Accent {
                    let mut r = radius * frame.treatment.corner_rounding * 2.0;
                    while r > 0.0 {
                        ctx.draw(&Circle {
                            x: *center_x,
                            y: center_y,
                            radius: r,
                            color: accent,
                        });
                        r -= step;
                    }
                }
                ctx.print(
                    center_x - display.cell_width / 2.0,
                    center_y,
                    Span::styled(*glyph, tint),
                );
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::config_validation::validate_config;
    use crate::core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_top_edge_depth_follows_notch() {
        let edge = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(140.0, 40.0),
            Point::new(180.0, 0.0),
            Point::new(300.0, 0.0),
        ];
        assert_eq!(top_edge_depth(&edge, 50.0), 0.0);
        assert_eq!(top_edge_depth(&edge, 140.0), 40.0);
        assert_eq!(top_edge_depth(&edge, 120.0), 20.0);
        assert_eq!(top_edge_depth(&edge, 400.0), 0.0);
    }

    #[test]
    fn test_top_edge_depth_handles_notch_past_left_end() {
        let edge = vec![
            Point::new(0.0, 0.0),
            Point::new(-40.0, 0.0),
            Point::new(0.0, 40.0),
            Point::new(40.0, 0.0),
            Point::new(300.0, 0.0),
        ];
        assert_eq!(top_edge_depth(&edge, 0.0), 40.0);
        assert_eq!(top_edge_depth(&edge, 20.0), 20.0);
    }

    #[test]
    fn test_first_draw_bootstraps_and_shows_icons() {
        let config = parse_config(include_str!("../config.yaml")).unwrap();
        let mut app = App::new(validate_config(config, AppConfig::default()).unwrap());
        let height = bar_region_height(&app);
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_wave_bar(f, &mut app, area, Instant::now());
            })
            .unwrap();

        assert!(app.controller.is_initialized());
        let symbols: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(symbols.contains('⌂'));
        assert!(symbols.contains('⚙'));
    }

    #[test]
    fn test_shadow_runs_along_top_edge() {
        let config = parse_config(include_str!("../config.yaml")).unwrap();
        let mut app = App::new(validate_config(config, AppConfig::default()).unwrap());
        let height = bar_region_height(&app);
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_wave_bar(f, &mut app, area, Instant::now());
            })
            .unwrap();

        // Flat stretch of the edge between the second and third buttons
        let headroom = Viewport::headroom_rows(60.0, 0.0, 16.0);
        let cell = &terminal.backend().buffer()[(40, headroom - 1)];
        assert_eq!(cell.fg, Styles::shadow());
    }

    #[test]
    fn test_region_height_saturates() {
        let config = parse_config(include_str!("../config.yaml")).unwrap();
        let mut defaults = AppConfig::default();
        defaults.wave.bar_height = 1.0e9;
        defaults.display.cell_height = 1.0;
        let app = App::new(validate_config(config, defaults).unwrap());
        assert_eq!(bar_region_height(&app), u16::MAX);
    }
}

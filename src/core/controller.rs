// Selection Controller
// Single authority for the selected tab and for sequencing lift + wave transitions

use tracing::{debug, info};

use super::animation::{AnimationHandle, Timing};
use super::geometry::{WaveGeometry, WaveOutline};
use super::layout::LayoutPass;
use super::tab::{ButtonGeometry, ButtonTreatment, LiftOffsets, TabItem, VerticalState};

/// Consumer of outlines and button treatments
///
/// The rendering layer owns the displayed shape and replaces it; a new animation on the
/// same property supersedes the running one.
pub trait RenderLayer {
    /// Display an outline immediately
    fn show_outline(&mut self, outline: WaveOutline);

    /// Interpolate from one outline to another
    fn animate_outline(&mut self, handle: AnimationHandle);

    /// Apply a button treatment, easing its vertical offset when `timing` is given
    fn apply_button(&mut self, index: usize, treatment: ButtonTreatment, timing: Option<Timing>);
}

/// Seeding state of the wave position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WavePhase {
    /// No layout has reported button geometry yet; no outline exists
    Uninitialized,
    /// Wave seeded; holds the center of the committed notch
    Initialized { center_x: f64 },
}

/// Result of reporting a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// This pass seeded the wave
    Seeded,
    /// The wave was seeded by an earlier pass
    AlreadyInitialized,
    /// The pass carried no usable geometry
    Deferred,
}

/// Bar dimensions from the latest layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarSize {
    width: f64,
    height: f64,
}

type SelectionCallback = Box<dyn FnMut(usize)>;

pub struct SelectionController<R: RenderLayer> {
    items: Vec<TabItem>,
    selected_index: usize,
    phase: WavePhase,
    buttons: Vec<ButtonGeometry>,
    bar: Option<BarSize>,
    geometry: WaveGeometry,
    offsets: LiftOffsets,
    timing: Timing,
    layer: R,
    on_select: Option<SelectionCallback>,
}

impl<R: RenderLayer> SelectionController<R> {
    /// Create a controller for a fixed item list; tab 0 starts selected
    pub fn new(items: Vec<TabItem>, geometry: WaveGeometry, offsets: LiftOffsets, timing: Timing, layer: R) -> Self {
        assert!(!items.is_empty(), "tab bar needs at least one item");
        for (position, item) in items.iter().enumerate() {
            assert_eq!(item.index, position, "tab items must be indexed in order");
        }

        Self {
            items,
            selected_index: 0,
            phase: WavePhase::Uninitialized,
            buttons: Vec::new(),
            bar: None,
            geometry,
            offsets,
            timing,
            layer,
            on_select: None,
        }
    }

    /// Register the navigation callback notified on every selection
    pub fn on_select(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Center of the committed notch, `None` before bootstrap
    pub fn current_wave_center_x(&self) -> Option<f64> {
        match self.phase {
            WavePhase::Uninitialized => None,
            WavePhase::Initialized { center_x } => Some(center_x),
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.phase, WavePhase::Initialized { .. })
    }

    pub fn buttons(&self) -> &[ButtonGeometry] {
        &self.buttons
    }

    pub fn verticals(&self) -> Vec<VerticalState> {
        self.buttons.iter().map(|b| b.vertical).collect()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn layer(&self) -> &R {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut R {
        &mut self.layer
    }

    /// Report a completed layout pass
    ///
    /// The first pass with button geometry seeds the wave under the selected tab and renders
    /// without animation. Every later pass leaves the wave alone.
    pub fn layout_complete(&mut self, pass: &LayoutPass) -> BootstrapOutcome {
        if self.is_initialized() {
            return BootstrapOutcome::AlreadyInitialized;
        }
        if !pass.is_laid_out() {
            debug!(buttons = pass.button_centers.len(), "Layout pass without geometry, bootstrap deferred");
            return BootstrapOutcome::Deferred;
        }
        assert_eq!(
            pass.button_centers.len(),
            self.items.len(),
            "layout reported {} buttons for {} items",
            pass.button_centers.len(),
            self.items.len()
        );

        self.record_layout(pass);
        let center_x = self.buttons[self.selected_index].center_x;
        self.phase = WavePhase::Initialized { center_x };

        if let Some(outline) = self.outline_at(center_x) {
            self.layer.show_outline(outline);
        }
        self.update_visual_state(false);

        info!(center_x, selected = self.selected_index, "Wave bootstrapped");
        BootstrapOutcome::Seeded
    }

    /// Report changed bounds after bootstrap
    ///
    /// Records the new centers and re-renders the notch under the selected tab without
    /// animation. Before bootstrap this is the same as [`Self::layout_complete`].
    pub fn relayout(&mut self, pass: &LayoutPass) {
        if !self.is_initialized() {
            self.layout_complete(pass);
            return;
        }
        if !pass.is_laid_out() || pass.button_centers.len() != self.items.len() {
            debug!("Ignoring relayout without matching geometry");
            return;
        }

        self.record_layout(pass);
        let center_x = self.buttons[self.selected_index].center_x;
        self.phase = WavePhase::Initialized { center_x };

        if let Some(outline) = self.outline_at(center_x) {
            self.layer.show_outline(outline);
        }
        self.update_visual_state(false);
        debug!(center_x, width = pass.bar_width, "Wave re-anchored after bounds change");
    }

    /// Select `index`, moving the notch to `center_x`
    ///
    /// Panics when `index` is out of range.
    pub fn select_tab(&mut self, index: usize, center_x: f64) {
        assert!(
            index < self.items.len(),
            "tab index {} out of range for {} items",
            index,
            self.items.len()
        );

        let previous = self.selected_index;
        self.selected_index = index;
        self.update_visual_state(true);

        if let WavePhase::Initialized { center_x: from_x } = self.phase {
            if let (Some(from), Some(to)) = (self.outline_at(from_x), self.outline_at(center_x)) {
                self.layer.animate_outline(AnimationHandle::new(from, to, self.timing));
            }
            self.phase = WavePhase::Initialized { center_x };
            debug!(from_x, to_x = center_x, "Wave transition issued");
        }

        info!(previous, selected = index, "Tab selected");
        if let Some(callback) = self.on_select.as_mut() {
            callback(index);
        }
    }

    /// Select `index` using the center recorded by the last layout pass
    pub fn select_index(&mut self, index: usize) {
        assert!(
            index < self.buttons.len(),
            "tab index {} has no laid out button",
            index
        );
        let center_x = self.buttons[index].center_x;
        self.select_tab(index, center_x);
    }

    /// Apply the lifted or resting treatment to every button
    fn update_visual_state(&mut self, animated: bool) {
        let timing = animated.then_some(self.timing);
        for index in 0..self.items.len() {
            let treatment = self.offsets.treatment(index == self.selected_index);
            if let Some(button) = self.buttons.get_mut(index) {
                button.vertical = treatment.vertical;
            }
            self.layer.apply_button(index, treatment, timing);
        }
    }

    fn record_layout(&mut self, pass: &LayoutPass) {
        self.bar = Some(BarSize {
            width: pass.bar_width,
            height: pass.bar_height,
        });
        self.buttons = pass
            .button_centers
            .iter()
            .enumerate()
            .map(|(index, &center_x)| ButtonGeometry {
                center_x,
                vertical: VerticalState::for_selection(index == self.selected_index),
            })
            .collect();
    }

    /// Outline at `center_x`, or nothing while the bar has no size
    fn outline_at(&self, center_x: f64) -> Option<WaveOutline> {
        self.bar
            .map(|bar| self.geometry.outline(center_x, bar.width, bar.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::Easing;
    use crate::core::geometry::WaveProfile;
    use crate::core::tab::{ButtonFill, IconRef};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Show(WaveOutline),
        Animate(AnimationHandle),
        Button(usize, ButtonTreatment, Option<Timing>),
    }

    #[derive(Default)]
    struct RecordingLayer {
        calls: Vec<Call>,
    }

    impl RecordingLayer {
        fn shows(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Show(_))).count()
        }

        fn animations(&self) -> Vec<&AnimationHandle> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Animate(handle) => Some(handle),
                    _ => None,
                })
                .collect()
        }
    }

    impl RenderLayer for RecordingLayer {
        fn show_outline(&mut self, outline: WaveOutline) {
            self.calls.push(Call::Show(outline));
        }

        fn animate_outline(&mut self, handle: AnimationHandle) {
            self.calls.push(Call::Animate(handle));
        }

        fn apply_button(&mut self, index: usize, treatment: ButtonTreatment, timing: Option<Timing>) {
            self.calls.push(Call::Button(index, treatment, timing));
        }
    }

    const BAR_WIDTH: f64 = 420.0;
    const BAR_HEIGHT: f64 = 90.0;

    fn geometry() -> WaveGeometry {
        WaveGeometry::new(WaveProfile::from_depth(40.0))
    }

    fn timing() -> Timing {
        Timing::new(Duration::from_millis(300), Easing::EaseInEaseOut)
    }

    fn items(count: usize) -> Vec<TabItem> {
        (0..count)
            .map(|index| TabItem {
                index,
                id: format!("tab-{}", index),
                name: format!("Tab {}", index),
                icon: IconRef::new("house"),
            })
            .collect()
    }

    fn pass() -> LayoutPass {
        LayoutPass {
            bar_width: BAR_WIDTH,
            bar_height: BAR_HEIGHT,
            button_centers: vec![90.0, 210.0, 330.0],
        }
    }

    fn controller() -> SelectionController<RecordingLayer> {
        SelectionController::new(
            items(3),
            geometry(),
            LiftOffsets { resting: 25.0, lifted: 0.0 },
            timing(),
            RecordingLayer::default(),
        )
    }

    fn bootstrapped() -> SelectionController<RecordingLayer> {
        let mut c = controller();
        assert_eq!(c.layout_complete(&pass()), BootstrapOutcome::Seeded);
        c
    }

    fn lifted_indices<R: RenderLayer>(c: &SelectionController<R>) -> Vec<usize> {
        c.buttons()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.vertical.is_lifted())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_starts_uninitialized_on_tab_zero() {
        let c = controller();
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.phase(), WavePhase::Uninitialized);
        assert_eq!(c.current_wave_center_x(), None);
        assert!(c.layer().calls.is_empty());
    }

    #[test]
    fn test_bootstrap_seeds_first_tab_without_animation() {
        let c = bootstrapped();
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.current_wave_center_x(), Some(90.0));
        assert_eq!(lifted_indices(&c), vec![0]);

        let calls = &c.layer().calls;
        assert_eq!(calls[0], Call::Show(geometry().outline(90.0, BAR_WIDTH, BAR_HEIGHT)));
        assert!(c.layer().animations().is_empty());
        // Initial treatments are applied instantly
        for call in &calls[1..] {
            match call {
                Call::Button(_, _, timing) => assert_eq!(*timing, None),
                other => panic!("unexpected call {:?}", other),
            }
        }
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let mut c = bootstrapped();
        for _ in 0..4 {
            assert_eq!(c.layout_complete(&pass()), BootstrapOutcome::AlreadyInitialized);
        }
        assert_eq!(c.layer().shows(), 1);
        assert_eq!(c.current_wave_center_x(), Some(90.0));
    }

    #[test]
    fn test_later_layout_does_not_snap_back_to_first_tab() {
        let mut c = bootstrapped();
        c.select_tab(2, 330.0);
        let mut wider = pass();
        wider.bar_width = 600.0;
        assert_eq!(c.layout_complete(&wider), BootstrapOutcome::AlreadyInitialized);
        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.current_wave_center_x(), Some(330.0));
    }

    #[test]
    fn test_empty_layout_defers_bootstrap() {
        let mut c = controller();
        let empty = LayoutPass {
            bar_width: BAR_WIDTH,
            bar_height: BAR_HEIGHT,
            button_centers: Vec::new(),
        };
        assert_eq!(c.layout_complete(&empty), BootstrapOutcome::Deferred);
        assert_eq!(c.phase(), WavePhase::Uninitialized);
        assert!(c.layer().calls.is_empty());

        assert_eq!(c.layout_complete(&pass()), BootstrapOutcome::Seeded);
    }

    #[test]
    fn test_tap_commits_state_and_issues_animation() {
        let mut c = bootstrapped();
        c.select_tab(2, 330.0);

        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.current_wave_center_x(), Some(330.0));
        assert_eq!(lifted_indices(&c), vec![2]);

        let animations = c.layer().animations();
        assert_eq!(animations.len(), 1);
        assert_eq!(animations[0].from_outline, geometry().outline(90.0, BAR_WIDTH, BAR_HEIGHT));
        assert_eq!(animations[0].to_outline, geometry().outline(330.0, BAR_WIDTH, BAR_HEIGHT));
        assert_eq!(animations[0].duration, Duration::from_millis(300));
        assert_eq!(animations[0].easing, Easing::EaseInEaseOut);
    }

    #[test]
    fn test_lift_and_wave_share_timing() {
        let mut c = bootstrapped();
        c.layer_mut().calls.clear();
        c.select_tab(1, 210.0);

        let handle_timing = c.layer().animations()[0].timing();
        let lifts: Vec<_> = c
            .layer()
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Button(index, treatment, timing) => Some((*index, *treatment, *timing)),
                _ => None,
            })
            .collect();
        assert_eq!(lifts.len(), 3);
        for (index, treatment, timing) in lifts {
            assert_eq!(timing, Some(handle_timing));
            assert_eq!(treatment.vertical.is_lifted(), index == 1);
            assert_eq!(treatment.fill == ButtonFill::Accent, index == 1);
        }
    }

    #[test]
    fn test_rapid_double_tap_uses_logical_target() {
        let mut c = bootstrapped();
        c.select_tab(1, 210.0);
        c.select_tab(2, 330.0);

        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.current_wave_center_x(), Some(330.0));

        let animations = c.layer().animations();
        assert_eq!(animations.len(), 2);
        assert_eq!(animations[1].from_outline, geometry().outline(210.0, BAR_WIDTH, BAR_HEIGHT));
        assert_eq!(animations[1].to_outline, geometry().outline(330.0, BAR_WIDTH, BAR_HEIGHT));
    }

    #[test]
    fn test_exactly_one_lifted_after_any_sequence() {
        let mut c = bootstrapped();
        let centers = [90.0, 210.0, 330.0];
        for &index in &[2, 2, 0, 1, 0, 2, 1, 1] {
            c.select_tab(index, centers[index]);
            assert_eq!(lifted_indices(&c), vec![index]);
            assert_eq!(c.selected_index(), index);
            assert_eq!(c.current_wave_center_x(), Some(centers[index]));
        }
    }

    #[test]
    fn test_selection_before_bootstrap_skips_geometry() {
        let mut c = controller();
        c.select_tab(1, 210.0);
        assert_eq!(c.selected_index(), 1);
        assert_eq!(c.current_wave_center_x(), None);
        assert!(c.layer().animations().is_empty());
        assert_eq!(c.layer().shows(), 0);
    }

    #[test]
    fn test_callback_receives_selected_index() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut c = controller().on_select(move |index| sink.borrow_mut().push(index));
        c.layout_complete(&pass());
        c.select_tab(2, 330.0);
        c.select_tab(0, 90.0);
        assert_eq!(*seen.borrow(), vec![2, 0]);
    }

    #[test]
    fn test_select_index_uses_layout_center() {
        let mut c = bootstrapped();
        c.select_index(1);
        assert_eq!(c.current_wave_center_x(), Some(210.0));
    }

    #[test]
    fn test_relayout_keeps_selected_tab_under_notch() {
        let mut c = bootstrapped();
        c.select_tab(2, 330.0);
        let shows_before = c.layer().shows();

        let resized = LayoutPass {
            bar_width: 600.0,
            bar_height: BAR_HEIGHT,
            button_centers: vec![120.0, 300.0, 480.0],
        };
        c.relayout(&resized);

        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.current_wave_center_x(), Some(480.0));
        assert_eq!(c.layer().shows(), shows_before + 1);
        assert_eq!(
            c.layer().calls.iter().rev().find_map(|call| match call {
                Call::Show(outline) => Some(outline.clone()),
                _ => None,
            }),
            Some(geometry().outline(480.0, 600.0, BAR_HEIGHT))
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_fails_fast() {
        let mut c = bootstrapped();
        c.select_tab(3, 450.0);
    }
}

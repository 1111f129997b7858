// Wave Layer
// Terminal-side rendering layer: owns the displayed outline and plays animations

use std::time::Instant;

use crate::core::{AnimationHandle, ButtonTreatment, RenderLayer, Timing, WaveOutline};

/// Wave morph currently playing
#[derive(Debug, Clone)]
struct RunningMorph {
    handle: AnimationHandle,
    started: Instant,
}

/// Vertical offset tween of one button
#[derive(Debug, Clone, Copy)]
struct OffsetTween {
    from: f64,
    to: f64,
    timing: Timing,
    started: Instant,
}

impl OffsetTween {
    fn value_at(&self, now: Instant) -> f64 {
        let t = self.timing.progress(now.saturating_duration_since(self.started));
        self.from + (self.to - self.from) * t
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.timing.is_finished(now.saturating_duration_since(self.started))
    }
}

/// Displayed state of one button
#[derive(Debug, Clone, Copy)]
struct ButtonSprite {
    treatment: ButtonTreatment,
    tween: Option<OffsetTween>,
}

impl ButtonSprite {
    fn offset_at(&self, now: Instant) -> f64 {
        match &self.tween {
            Some(tween) => tween.value_at(now),
            None => self.treatment.offset_y,
        }
    }
}

/// Snapshot of one button for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonFrame {
    pub treatment: ButtonTreatment,
    pub offset_y: f64,
}

/// Rendering layer backing the terminal view
///
/// The model outline is replaced on every request; a running morph is superseded by the next one.
#[derive(Debug, Default)]
pub struct TerminalLayer {
    model: Option<WaveOutline>,
    morph: Option<RunningMorph>,
    buttons: Vec<Option<ButtonSprite>>,
}

impl TerminalLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any morph or lift is still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        let morphing = self
            .morph
            .as_ref()
            .map(|m| !m.handle.timing().is_finished(now.saturating_duration_since(m.started)))
            .unwrap_or(false);
        morphing
            || self
                .buttons
                .iter()
                .flatten()
                .any(|b| b.tween.map(|t| !t.is_finished(now)).unwrap_or(false))
    }

    /// Outline to draw at `now`; `None` until the first outline arrives
    pub fn outline_at(&mut self, now: Instant) -> Option<WaveOutline> {
        if let Some(morph) = &self.morph {
            let elapsed = now.saturating_duration_since(morph.started);
            if !morph.handle.timing().is_finished(elapsed) {
                return Some(morph.handle.outline_at(elapsed));
            }
            self.morph = None;
        }
        self.model.clone()
    }

    /// Button snapshots to draw at `now`, in item order
    pub fn buttons_at(&mut self, now: Instant) -> Vec<Option<ButtonFrame>> {
        self.buttons
            .iter_mut()
            .map(|slot| {
                slot.as_mut().map(|sprite| {
                    if sprite.tween.map(|t| t.is_finished(now)).unwrap_or(false) {
                        sprite.tween = None;
                    }
                    ButtonFrame {
                        treatment: sprite.treatment,
                        offset_y: sprite.offset_at(now),
                    }
                })
            })
            .collect()
    }

    fn apply_button_at(&mut self, index: usize, treatment: ButtonTreatment, timing: Option<Timing>, now: Instant) {
        if self.buttons.len() <= index {
            self.buttons.resize(index + 1, None);
        }

        let tween = match (timing, &self.buttons[index]) {
            (Some(timing), Some(current)) => {
                let from = current.offset_at(now);
                (from != treatment.offset_y).then_some(OffsetTween {
                    from,
                    to: treatment.offset_y,
                    timing,
                    started: now,
                })
            }
            _ => None,
        };

        self.buttons[index] = Some(ButtonSprite { treatment, tween });
    }
}

impl RenderLayer for TerminalLayer {
    fn show_outline(&mut self, outline: WaveOutline) {
        self.morph = None;
        self.model = Some(outline);
    }

    fn animate_outline(&mut self, handle: AnimationHandle) {
        self.model = Some(handle.to_outline.clone());
        self.morph = Some(RunningMorph {
            handle,
            started: Instant::now(),
        });
    }

    fn apply_button(&mut self, index: usize, treatment: ButtonTreatment, timing: Option<Timing>) {
        self.apply_button_at(index, treatment, timing, Instant::now());
    }
}

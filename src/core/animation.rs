// Animation Descriptors
// Easing curves, shared timing and the from/to handle passed to the rendering layer

use std::time::Duration;

use super::geometry::WaveOutline;

/// Timing curve applied to normalized animation progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Symmetric ease-in/ease-out, cubic Bézier (0.42, 0.0) (0.58, 1.0)
    #[default]
    EaseInEaseOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInEaseOut => cubic_bezier_ease(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Solve a CSS-style timing curve: find the curve parameter whose x equals `x`, return its y
fn cubic_bezier_ease(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let sample = |a1: f64, a2: f64, s: f64| {
        let ms = 1.0 - s;
        3.0 * ms * ms * s * a1 + 3.0 * ms * s * s * a2 + s * s * s
    };
    let slope = |a1: f64, a2: f64, s: f64| {
        let ms = 1.0 - s;
        3.0 * ms * ms * a1 + 6.0 * ms * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    };

    // Newton first, bisection if the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = sample(x1, x2, s);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(y1, y2, s)
}

/// Duration and easing shared by every animation of one transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed`; a zero duration is complete immediately
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(linear)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(crate::core::app_config::compiled::ANIMATION_MS),
            easing: Easing::default(),
        }
    }
}

/// One wave morph, consumed once by the rendering layer
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationHandle {
    pub from_outline: WaveOutline,
    pub to_outline: WaveOutline,
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationHandle {
    pub fn new(from_outline: WaveOutline, to_outline: WaveOutline, timing: Timing) -> Self {
        Self {
            from_outline,
            to_outline,
            duration: timing.duration,
            easing: timing.easing,
        }
    }

    pub fn timing(&self) -> Timing {
        Timing::new(self.duration, self.easing)
    }

    /// Outline shown after `elapsed`; falls back to the target if the outlines cannot be interpolated
    pub fn outline_at(&self, elapsed: Duration) -> WaveOutline {
        let t = self.timing().progress(elapsed);
        self.from_outline
            .interpolate(&self.to_outline, t)
            .unwrap_or_else(|| self.to_outline.clone())
    }
}

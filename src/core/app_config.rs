// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

use super::animation::{Easing, Timing};
use super::geometry::{WaveGeometry, WaveProfile};
use super::layout::BarLayout;
use super::tab::LiftOffsets;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for the wave tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Notch, button and animation settings
    pub wave: WaveSettings,

    /// Terminal display settings
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveSettings {
    /// Depth of the notch below the top edge
    pub notch_depth: f64,

    /// Duration shared by the lift and the wave morph
    pub animation_ms: u64,

    pub button_width: f64,

    pub bar_height: f64,

    /// Button center below the top edge when resting
    pub resting_offset: f64,

    /// Button center below the top edge when lifted
    pub lifted_offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Points per terminal column
    pub cell_width: f64,

    /// Points per terminal row
    pub cell_height: f64,

    /// Points generated per curve when drawing
    pub curve_steps: usize,

    /// Enable mouse support
    pub mouse_enabled: bool,

    pub bar_color: (u8, u8, u8),
    pub accent_color: (u8, u8, u8),
    pub tint_color: (u8, u8, u8),
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            notch_depth: compiled::NOTCH_DEPTH,
            animation_ms: compiled::ANIMATION_MS,
            button_width: compiled::BUTTON_WIDTH,
            bar_height: compiled::BAR_HEIGHT,
            resting_offset: compiled::RESTING_OFFSET,
            lifted_offset: compiled::LIFTED_OFFSET,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            cell_width: compiled::CELL_WIDTH,
            cell_height: compiled::CELL_HEIGHT,
            curve_steps: compiled::CURVE_STEPS,
            mouse_enabled: compiled::MOUSE_ENABLED,
            bar_color: compiled::BAR_COLOR,
            accent_color: compiled::ACCENT_COLOR,
            tint_color: compiled::TINT_COLOR,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wave: WaveSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl WaveSettings {
    pub fn geometry(&self) -> WaveGeometry {
        WaveGeometry::new(WaveProfile::from_depth(self.notch_depth))
    }

    pub fn timing(&self) -> Timing {
        Timing::new(Duration::from_millis(self.animation_ms), Easing::EaseInEaseOut)
    }

    pub fn offsets(&self) -> LiftOffsets {
        LiftOffsets {
            resting: self.resting_offset,
            lifted: self.lifted_offset,
        }
    }

    pub fn bar_layout(&self) -> BarLayout {
        BarLayout {
            button_width: self.button_width,
            bar_height: self.bar_height,
            offsets: self.offsets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_build_consistent_collaborators() {
        let wave = WaveSettings {
            notch_depth: 40.0,
            animation_ms: 300,
            button_width: 60.0,
            bar_height: 90.0,
            resting_offset: 25.0,
            lifted_offset: 0.0,
        };
        assert_eq!(wave.geometry().profile().half_width, 80.0);
        assert_eq!(wave.timing().duration, Duration::from_millis(300));
        assert_eq!(wave.timing().easing, Easing::EaseInEaseOut);
        assert_eq!(wave.bar_layout().offsets.resting, 25.0);
        assert_eq!(wave.bar_layout().bar_height, 90.0);
    }
}

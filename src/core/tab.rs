// Tab Items
// Item identity, per-button geometry and the two visual treatments

use std::fmt;

/// Opaque icon reference, resolved to a glyph by the view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the fixed item list
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub icon: IconRef,
}

/// Vertical position of a button relative to the bar's resting row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalState {
    Resting,
    Lifted,
}

impl VerticalState {
    pub fn for_selection(selected: bool) -> Self {
        if selected {
            VerticalState::Lifted
        } else {
            VerticalState::Resting
        }
    }

    pub fn is_lifted(&self) -> bool {
        matches!(self, VerticalState::Lifted)
    }
}

/// Horizontal center assigned at layout time plus the vertical state driven by selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    pub center_x: f64,
    pub vertical: VerticalState,
}

/// Fill used behind a button's icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFill {
    Clear,
    Accent,
}

/// Complete visual treatment of one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonTreatment {
    pub vertical: VerticalState,
    pub fill: ButtonFill,
    /// Corner rounding as a fraction of the button width (0.5 = circle)
    pub corner_rounding: f64,
    /// Distance of the button center below the bar's top edge
    pub offset_y: f64,
}

/// Offsets of the two vertical states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftOffsets {
    pub resting: f64,
    pub lifted: f64,
}

impl LiftOffsets {
    pub fn offset_for(&self, vertical: VerticalState) -> f64 {
        match vertical {
            VerticalState::Resting => self.resting,
            VerticalState::Lifted => self.lifted,
        }
    }

    /// Treatment for a button, purely as a function of whether it is selected
    pub fn treatment(&self, selected: bool) -> ButtonTreatment {
        let vertical = VerticalState::for_selection(selected);
        if selected {
            ButtonTreatment {
                vertical,
                fill: ButtonFill::Accent,
                corner_rounding: 0.5,
                offset_y: self.offset_for(vertical),
            }
        } else {
            ButtonTreatment {
                vertical,
                fill: ButtonFill::Clear,
                corner_rounding: 0.0,
                offset_y: self.offset_for(vertical),
            }
        }
    }
}

impl Default for LiftOffsets {
    fn default() -> Self {
        use crate::core::app_config::compiled;
        Self {
            resting: compiled::RESTING_OFFSET,
            lifted: compiled::LIFTED_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treatment_follows_selection() {
        let offsets = LiftOffsets { resting: 25.0, lifted: 0.0 };

        let selected = offsets.treatment(true);
        assert_eq!(selected.vertical, VerticalState::Lifted);
        assert_eq!(selected.fill, ButtonFill::Accent);
        assert_eq!(selected.corner_rounding, 0.5);
        assert_eq!(selected.offset_y, 0.0);

        let resting = offsets.treatment(false);
        assert_eq!(resting.vertical, VerticalState::Resting);
        assert_eq!(resting.fill, ButtonFill::Clear);
        assert_eq!(resting.offset_y, 25.0);
    }
}

use serde::{Deserialize, Serialize};

use crate::model::{Domain, NumericRange};

/// Range, grid and tick layout of one axis at one zoom level.
///
/// The range is always symmetric, `[-max, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisDescription {
    pub max: f64,
    pub grid_line_spacing: f64,
    pub tick_mark_spacing: f64,
    pub tick_label_spacing: f64,
}

impl AxisDescription {
    pub const fn new(
        max: f64,
        grid_line_spacing: f64,
        tick_mark_spacing: f64,
        tick_label_spacing: f64,
    ) -> Self {
        Self {
            max,
            grid_line_spacing,
            tick_mark_spacing,
            tick_label_spacing,
        }
    }

    pub fn range(&self) -> NumericRange {
        NumericRange::symmetric(self.max)
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if !(self.max.is_finite() && self.max > 0.0) {
            return Err(format!("max must be positive, got {}", self.max));
        }
        for (name, spacing) in [
            ("grid line spacing", self.grid_line_spacing),
            ("tick mark spacing", self.tick_mark_spacing),
            ("tick label spacing", self.tick_label_spacing),
        ] {
            if !(spacing.is_finite() && spacing > 0.0) {
                return Err(format!("{} must be positive, got {}", name, spacing));
            }
        }
        Ok(())
    }
}

/// Absolute x range for a description whose values are multiples of the fundamental.
///
/// One ladder serves every domain: the time domain scales by the fundamental period
/// `period`, the others by the fundamental wavelength `wavelength`.
pub fn x_range_for_domain(
    description: &AxisDescription,
    domain: Domain,
    wavelength: f64,
    period: f64,
) -> NumericRange {
    assert!(wavelength > 0.0, "fundamental wavelength must be positive");
    assert!(period > 0.0, "fundamental period must be positive");
    let scale = if domain.is_time_axis() { period } else { wavelength };
    description.range().scaled(scale)
}

// src/axis/presets.rs
//
// Hand-curated zoom ladders. X values are multiples of the fundamental wavelength
// (or period, in the time domain); see `x_range_for_domain`.

use once_cell::sync::Lazy;

use super::{AxisDescription, AxisLadder, LadderRule};
use crate::utils::log_console;

/// The most zoomed-in x axis must still show half of the fundamental, i.e. a range
/// of length 1/2 or `max >= 1/4`.
const HALF_FUNDAMENTAL: LadderRule = LadderRule::NarrowestAtLeast(0.25);

pub static X_AXIS_LADDER: Lazy<AxisLadder> = Lazy::new(|| {
    let ladder = AxisLadder::new(
        vec![
            AxisDescription::new(2.0, 0.5, 0.5, 1.0),
            AxisDescription::new(1.5, 0.25, 0.5, 0.5),
            AxisDescription::new(1.0, 0.25, 0.25, 0.5),
            AxisDescription::new(0.75, 0.125, 0.25, 0.25),
            AxisDescription::new(0.5, 0.125, 0.125, 0.25),
            AxisDescription::new(0.25, 0.0625, 0.125, 0.125),
        ],
        &[HALF_FUNDAMENTAL],
    );
    log_console(&format!("Built x axis ladder with {} levels", ladder.len()));
    ladder
});

/// Index of `max = 1` (one fundamental each side of the origin).
pub const X_AXIS_DEFAULT_LEVEL: usize = 2;

pub static SUM_Y_AXIS_LADDER: Lazy<AxisLadder> = Lazy::new(|| {
    let ladder = AxisLadder::new(
        vec![
            AxisDescription::new(10.0, 5.0, 5.0, 5.0),
            AxisDescription::new(8.0, 2.0, 2.0, 4.0),
            AxisDescription::new(6.0, 2.0, 2.0, 2.0),
            AxisDescription::new(5.0, 1.0, 1.0, 5.0),
            AxisDescription::new(4.0, 1.0, 1.0, 2.0),
            AxisDescription::new(3.0, 1.0, 1.0, 1.0),
            AxisDescription::new(2.0, 0.5, 0.5, 1.0),
        ],
        &[],
    );
    log_console(&format!("Built sum y axis ladder with {} levels", ladder.len()));
    ladder
});

/// Index of `max = 2`, the narrowest sum range.
pub const SUM_Y_AXIS_DEFAULT_LEVEL: usize = 6;

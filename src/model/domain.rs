use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// The independent variable a waveform is plotted against.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    #[default]
    Space = 0,
    Time = 1,
    SpaceAndTime = 2,
}

impl Domain {
    /// Whether the horizontal axis is measured in milliseconds rather than meters.
    pub fn is_time_axis(&self) -> bool {
        matches!(self, Domain::Time)
    }

    /// Phase of harmonic `order` at horizontal coordinate `x` and time `t`.
    ///
    /// `wavelength` and `period` are the fundamental's. In the space domain `x` is a
    /// position, in the time domain it is a time and `t` is ignored, and in the
    /// space-and-time domain the wave travels to the right as `t` advances.
    #[inline]
    pub fn phase(&self, order: f64, x: f64, t: f64, wavelength: f64, period: f64) -> f64 {
        match self {
            Domain::Space => 2.0 * PI * order * x / wavelength,
            Domain::Time => 2.0 * PI * order * x / period,
            Domain::SpaceAndTime => 2.0 * PI * order * (x / wavelength - t / period),
        }
    }
}

/// Which trigonometric basis function the series sums.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesType {
    #[default]
    Sine = 0,
    Cosine = 1,
}

impl SeriesType {
    #[inline]
    pub fn apply(&self, angle: f64) -> f64 {
        match self {
            SeriesType::Sine => angle.sin(),
            SeriesType::Cosine => angle.cos(),
        }
    }
}

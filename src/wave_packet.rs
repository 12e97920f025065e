//! Gaussian wave packets built from evenly spaced Fourier components.
//!
//! Component `n` has wave number `k_n = n * Δk` and amplitude
//!
//! ```text
//! A_n = Δk / (σk √(2π)) * exp(-(k_n - k0)² / (2 σk²))
//! ```
//!
//! so that as `Δk → 0` the sum of components approaches the continuous packet
//! `exp(-σk² x² / 2) * f(k0 x)`. The packet's spatial width is `σx = 1 / σk`; only
//! `σk` is stored and `σx` is derived from it.
//!
//! In the time domain the same numbers are used for angular frequency, `ω_n = k_n`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::model::{Domain, SeriesType};
use crate::sampling::{DataSet, Point, SampleGrid};

/// Largest wave number (or angular frequency) a component may have.
pub const K_MAX: f64 = 24.0 * PI;
pub const DEFAULT_CENTER: f64 = 12.0 * PI;
pub const DEFAULT_K_WIDTH: f64 = 3.0 * PI;
pub const DEFAULT_COMPONENT_SPACING: f64 = PI / 2.0;

/// Spacings offered to the user. Zero means a continuous spectrum.
pub const COMPONENT_SPACING_CHOICES: [f64; 5] = [0.0, PI / 4.0, PI / 2.0, PI, 2.0 * PI];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub wave_number: f64,
    pub amplitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavePacket {
    center: f64,
    component_spacing: f64,
    k_width: f64,
}

fn assert_plottable(domain: Domain) {
    assert!(
        domain != Domain::SpaceAndTime,
        "wave packets are plotted in space or in time, not both"
    );
}

impl WavePacket {
    pub fn new(center: f64, component_spacing: f64, k_width: f64) -> Self {
        assert!(
            center > 0.0 && center <= K_MAX,
            "center {} outside (0, {}]",
            center,
            K_MAX
        );
        assert!(
            component_spacing >= 0.0,
            "component spacing must be non-negative, got {}",
            component_spacing
        );
        assert!(k_width > 0.0, "k width must be positive, got {}", k_width);
        Self {
            center,
            component_spacing,
            k_width,
        }
    }

    /// `k0`, the wave number at the peak of the amplitude spectrum.
    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn set_center(&mut self, center: f64) {
        *self = Self::new(center, self.component_spacing, self.k_width);
    }

    /// `Δk`
    pub fn component_spacing(&self) -> f64 {
        self.component_spacing
    }

    pub fn set_component_spacing(&mut self, component_spacing: f64) {
        *self = Self::new(self.center, component_spacing, self.k_width);
    }

    pub fn is_continuous(&self) -> bool {
        self.component_spacing == 0.0
    }

    /// `σk`, standard deviation of the amplitude spectrum.
    pub fn k_width(&self) -> f64 {
        self.k_width
    }

    pub fn set_k_width(&mut self, k_width: f64) {
        *self = Self::new(self.center, self.component_spacing, k_width);
    }

    /// `σx = 1 / σk`
    pub fn x_width(&self) -> f64 {
        1.0 / self.k_width
    }

    pub fn set_x_width(&mut self, x_width: f64) {
        assert!(x_width > 0.0, "x width must be positive, got {}", x_width);
        self.set_k_width(1.0 / x_width);
    }

    /// Gaussian amplitude density at wave number `k`.
    pub fn amplitude_density(&self, k: f64) -> f64 {
        let d = k - self.center;
        (-(d * d) / (2.0 * self.k_width * self.k_width)).exp() / (self.k_width * (2.0 * PI).sqrt())
    }

    /// Components `Δk, 2Δk, ...` up to [`K_MAX`]. Empty for a continuous packet.
    pub fn components(&self) -> Vec<Component> {
        if self.is_continuous() {
            return Vec::new();
        }
        let spacing = self.component_spacing;
        (1..)
            .map(|n| n as f64 * spacing)
            .take_while(|&k| k <= K_MAX + 1e-9)
            .map(|k| Component {
                wave_number: k,
                amplitude: spacing * self.amplitude_density(k),
            })
            .collect()
    }

    /// Amplitude spectrum over a wave-number grid, as drawn behind the component bars.
    pub fn sample_amplitude_spectrum(&self, grid: &SampleGrid) -> DataSet {
        let scale = if self.is_continuous() {
            1.0
        } else {
            self.component_spacing
        };
        let points = grid
            .xs()
            .map(|k| Point {
                x: k,
                y: scale * self.amplitude_density(k),
            })
            .collect();
        DataSet::new(points)
    }

    pub fn sample_component(
        &self,
        component: &Component,
        domain: Domain,
        series_type: SeriesType,
        grid: &SampleGrid,
    ) -> DataSet {
        assert_plottable(domain);
        let points = grid
            .xs()
            .map(|x| Point {
                x,
                y: component.amplitude * series_type.apply(component.wave_number * x),
            })
            .collect();
        DataSet::new(points)
    }

    /// Sum of all [`WavePacket::components`] on a shared grid.
    ///
    /// A continuous packet has no components; plot it with
    /// [`WavePacket::sample_continuous_waveform`] instead. Panics if called on one.
    pub fn sample_components_sum(
        &self,
        domain: Domain,
        series_type: SeriesType,
        grid: &SampleGrid,
    ) -> DataSet {
        assert_plottable(domain);
        assert!(
            !self.is_continuous(),
            "a continuous packet has no components to sum"
        );
        let components = self.components();
        let points = grid
            .xs()
            .map(|x| {
                let y = components
                    .iter()
                    .filter(|c| c.amplitude != 0.0)
                    .map(|c| c.amplitude * series_type.apply(c.wave_number * x))
                    .sum();
                Point { x, y }
            })
            .collect();
        DataSet::new(points)
    }

    /// The packet a continuous spectrum produces: `exp(-σk² x² / 2) * f(k0 x)`.
    pub fn sample_continuous_waveform(
        &self,
        domain: Domain,
        series_type: SeriesType,
        grid: &SampleGrid,
    ) -> DataSet {
        assert_plottable(domain);
        let points = grid
            .xs()
            .map(|x| Point {
                x,
                y: self.envelope(x) * series_type.apply(self.center * x),
            })
            .collect();
        DataSet::new(points)
    }

    /// Upper envelope `exp(-x² / (2 σx²))`; the lower envelope is its negation.
    pub fn sample_envelope(&self, domain: Domain, grid: &SampleGrid) -> DataSet {
        assert_plottable(domain);
        let points = grid
            .xs()
            .map(|x| Point {
                x,
                y: self.envelope(x),
            })
            .collect();
        DataSet::new(points)
    }

    fn envelope(&self, x: f64) -> f64 {
        let sigma_x = self.x_width();
        (-(x * x) / (2.0 * sigma_x * sigma_x)).exp()
    }
}

impl Default for WavePacket {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_COMPONENT_SPACING, DEFAULT_K_WIDTH)
    }
}

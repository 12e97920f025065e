use serde::Serialize;

use super::NumericRange;

/// Amplitudes are bounded by `[-DEFAULT_MAX_AMPLITUDE, DEFAULT_MAX_AMPLITUDE]` unless a
/// series is configured otherwise.
pub const DEFAULT_MAX_AMPLITUDE: f64 = 1.5;

/// One term of a Fourier series.
///
/// Frequency, wavelength and period are fixed when the harmonic is built; only the
/// amplitude changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Harmonic {
    order: usize,
    frequency: f64,
    wavelength: f64,
    period: f64,
    amplitude: f64,
    amplitude_range: NumericRange,
}

impl Harmonic {
    /// `fundamental_frequency` is in Hz, `fundamental_wavelength` in meters. The period
    /// is reported in milliseconds.
    pub fn new(
        order: usize,
        fundamental_frequency: f64,
        fundamental_wavelength: f64,
        max_amplitude: f64,
    ) -> Self {
        assert!(order >= 1, "harmonic order must be >= 1, got {}", order);
        assert!(
            fundamental_frequency > 0.0,
            "fundamental frequency must be positive"
        );
        assert!(
            fundamental_wavelength > 0.0,
            "fundamental wavelength must be positive"
        );
        assert!(max_amplitude > 0.0, "max amplitude must be positive");

        let frequency = fundamental_frequency * order as f64;
        Self {
            order,
            frequency,
            wavelength: fundamental_wavelength / order as f64,
            period: 1000.0 / frequency,
            amplitude: 0.0,
            amplitude_range: NumericRange::symmetric(max_amplitude),
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn amplitude_range(&self) -> NumericRange {
        self.amplitude_range
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        assert!(
            self.amplitude_range.contains(amplitude),
            "amplitude {} for harmonic {} is outside [{}, {}]",
            amplitude,
            self.order,
            self.amplitude_range.min,
            self.amplitude_range.max
        );
        self.amplitude = amplitude;
    }
}

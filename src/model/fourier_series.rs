use serde::{Deserialize, Serialize};

use super::harmonic::{Harmonic, DEFAULT_MAX_AMPLITUDE};

/// Number of harmonics every series carries, whether or not they are in use.
pub const MAX_HARMONICS: usize = 11;

const DEFAULT_FUNDAMENTAL_FREQUENCY: f64 = 440.0; // Hz
const DEFAULT_FUNDAMENTAL_WAVELENGTH: f64 = 1.0; // m

/// An `(order, amplitude)` pair, the unit the sampler works with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub order: usize,
    pub amplitude: f64,
}

impl Term {
    pub fn new(order: usize, amplitude: f64) -> Self {
        Self { order, amplitude }
    }
}

/// A fixed-size array of harmonics plus the count of those in use.
///
/// Harmonics past `number_of_harmonics` stay in the array with their amplitude
/// pinned to zero, so the layout never changes shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    harmonics: Vec<Harmonic>,
    number_of_harmonics: usize,
    fundamental_frequency: f64,
    fundamental_wavelength: f64,
}

impl FourierSeries {
    pub fn new(
        max_harmonics: usize,
        fundamental_frequency: f64,
        fundamental_wavelength: f64,
        max_amplitude: f64,
    ) -> Self {
        assert!(max_harmonics >= 1, "a series needs at least one harmonic");
        let harmonics = (1..=max_harmonics)
            .map(|order| {
                Harmonic::new(
                    order,
                    fundamental_frequency,
                    fundamental_wavelength,
                    max_amplitude,
                )
            })
            .collect();
        Self {
            harmonics,
            number_of_harmonics: max_harmonics,
            fundamental_frequency,
            fundamental_wavelength,
        }
    }

    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Harmonics currently in use, fundamental first.
    pub fn relevant_harmonics(&self) -> &[Harmonic] {
        &self.harmonics[..self.number_of_harmonics]
    }

    pub fn harmonic(&self, order: usize) -> &Harmonic {
        assert!(
            order >= 1 && order <= self.harmonics.len(),
            "no harmonic of order {}",
            order
        );
        &self.harmonics[order - 1]
    }

    pub fn max_harmonics(&self) -> usize {
        self.harmonics.len()
    }

    pub fn number_of_harmonics(&self) -> usize {
        self.number_of_harmonics
    }

    /// Changes how many harmonics are in use. Harmonics that fall out of use are zeroed.
    pub fn set_number_of_harmonics(&mut self, number_of_harmonics: usize) {
        assert!(
            number_of_harmonics >= 1 && number_of_harmonics <= self.harmonics.len(),
            "number of harmonics must be in [1, {}], got {}",
            self.harmonics.len(),
            number_of_harmonics
        );
        self.number_of_harmonics = number_of_harmonics;
        for harmonic in &mut self.harmonics[number_of_harmonics..] {
            harmonic.set_amplitude(0.0);
        }
    }

    pub fn fundamental_frequency(&self) -> f64 {
        self.fundamental_frequency
    }

    pub fn fundamental_wavelength(&self) -> f64 {
        self.fundamental_wavelength
    }

    /// Period of the fundamental, in milliseconds.
    pub fn fundamental_period(&self) -> f64 {
        1000.0 / self.fundamental_frequency
    }

    pub fn max_amplitude(&self) -> f64 {
        self.harmonics[0].amplitude_range().max
    }

    /// Sets the amplitude of one harmonic. Only harmonics in use may become non-zero.
    pub fn set_amplitude(&mut self, order: usize, amplitude: f64) {
        assert!(
            order >= 1 && order <= self.harmonics.len(),
            "no harmonic of order {}",
            order
        );
        assert!(
            order <= self.number_of_harmonics || amplitude == 0.0,
            "harmonic {} is not in use (number of harmonics is {})",
            order,
            self.number_of_harmonics
        );
        self.harmonics[order - 1].set_amplitude(amplitude);
    }

    /// Replaces the amplitude vector, fundamental first.
    ///
    /// Missing entries are zero, and entries past `number_of_harmonics` are forced to
    /// zero regardless of their value.
    pub fn set_amplitudes(&mut self, amplitudes: &[f64]) {
        assert!(
            amplitudes.len() <= self.harmonics.len(),
            "got {} amplitudes for a series of {} harmonics",
            amplitudes.len(),
            self.harmonics.len()
        );
        let active = self.number_of_harmonics;
        for (i, harmonic) in self.harmonics.iter_mut().enumerate() {
            let amplitude = if i < active {
                amplitudes.get(i).copied().unwrap_or(0.0)
            } else {
                0.0
            };
            harmonic.set_amplitude(amplitude);
        }
    }

    /// The full amplitude vector, including harmonics that are not in use.
    pub fn amplitudes(&self) -> Vec<f64> {
        self.harmonics.iter().map(Harmonic::amplitude).collect()
    }

    pub fn set_all_zero(&mut self) {
        for harmonic in &mut self.harmonics {
            harmonic.set_amplitude(0.0);
        }
    }

    pub fn is_all_zero(&self) -> bool {
        self.harmonics.iter().all(|h| h.amplitude() == 0.0)
    }

    /// `(order, amplitude)` of every harmonic in use, zero amplitudes included.
    pub fn terms(&self) -> Vec<Term> {
        self.relevant_harmonics()
            .iter()
            .map(|h| Term::new(h.order(), h.amplitude()))
            .collect()
    }
}

impl Default for FourierSeries {
    fn default() -> Self {
        Self::new(
            MAX_HARMONICS,
            DEFAULT_FUNDAMENTAL_FREQUENCY,
            DEFAULT_FUNDAMENTAL_WAVELENGTH,
            DEFAULT_MAX_AMPLITUDE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let series = FourierSeries::default();
        assert_eq!(series.harmonics().len(), MAX_HARMONICS);
        assert_eq!(series.number_of_harmonics(), MAX_HARMONICS);
        assert!(series.is_all_zero());
        for (i, harmonic) in series.harmonics().iter().enumerate() {
            assert_eq!(harmonic.order(), i + 1);
        }
        assert!((series.fundamental_period() - 1000.0 / 440.0).abs() < 1e-12);
    }

    #[test]
    fn test_reducing_harmonics_zeroes_the_rest() {
        let mut series = FourierSeries::default();
        series.set_amplitudes(&[1.0, 0.5, 0.25, 0.125]);
        series.set_number_of_harmonics(2);

        assert_eq!(series.harmonics().len(), MAX_HARMONICS);
        assert_eq!(series.relevant_harmonics().len(), 2);
        assert_eq!(&series.amplitudes()[..4], &[1.0, 0.5, 0.0, 0.0]);
        assert_eq!(series.terms(), vec![Term::new(1, 1.0), Term::new(2, 0.5)]);
    }

    #[test]
    fn test_set_amplitudes_truncates_to_active_count() {
        let mut series = FourierSeries::default();
        series.set_number_of_harmonics(3);
        series.set_amplitudes(&[0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(&series.amplitudes()[..5], &[0.1, 0.2, 0.3, 0.0, 0.0]);
    }

    #[test]
    fn test_set_all_zero() {
        let mut series = FourierSeries::default();
        series.set_amplitude(4, -1.2);
        assert!(!series.is_all_zero());
        series.set_all_zero();
        assert!(series.is_all_zero());
    }

    #[test]
    #[should_panic]
    fn test_inactive_harmonic_cannot_be_set() {
        let mut series = FourierSeries::default();
        series.set_number_of_harmonics(2);
        series.set_amplitude(5, 1.0);
    }

    #[test]
    #[should_panic]
    fn test_too_many_amplitudes_panics() {
        let mut series = FourierSeries::default();
        series.set_amplitudes(&[0.0; MAX_HARMONICS + 1]);
    }
}

//! Tunable constants of the simulation, loadable from a JSON file.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "maxHarmonics": 8, "sumPoints": 2000 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FourierError, FourierResult};
use crate::game::AmplitudeGenerator;
use crate::model::{FourierSeries, DEFAULT_MAX_AMPLITUDE, MAX_HARMONICS};
use crate::sampling::DEFAULT_SUM_POINTS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub max_amplitude: f64,
    pub max_harmonics: usize,
    /// Hz
    pub fundamental_frequency: f64,
    /// meters
    pub fundamental_wavelength: f64,
    pub sum_points: usize,
    /// Points for the highest harmonic; lower harmonics get proportionally fewer.
    pub max_harmonic_points: usize,
    /// Game answers are multiples of this.
    pub amplitude_step: f64,
    /// Generator attempts before accepting a repeat of the previous challenge.
    pub challenge_attempts: usize,
    /// Largest per-harmonic difference at which a guess still matches the answer.
    pub answer_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_amplitude: DEFAULT_MAX_AMPLITUDE,
            max_harmonics: MAX_HARMONICS,
            fundamental_frequency: 440.0,
            fundamental_wavelength: 1.0,
            sum_points: DEFAULT_SUM_POINTS,
            max_harmonic_points: DEFAULT_SUM_POINTS,
            amplitude_step: 0.1,
            challenge_attempts: 10,
            answer_threshold: 0.005,
        }
    }
}

fn positive(field: &'static str, value: f64) -> FourierResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FourierError::ConfigValue {
            field,
            reason: format!("must be positive, got {}", value),
        })
    }
}

fn at_least(field: &'static str, value: usize, min: usize) -> FourierResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(FourierError::ConfigValue {
            field,
            reason: format!("must be at least {}, got {}", min, value),
        })
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> FourierResult<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FourierResult<()> {
        positive("maxAmplitude", self.max_amplitude)?;
        positive("fundamentalFrequency", self.fundamental_frequency)?;
        positive("fundamentalWavelength", self.fundamental_wavelength)?;
        positive("amplitudeStep", self.amplitude_step)?;
        positive("answerThreshold", self.answer_threshold)?;
        at_least("maxHarmonics", self.max_harmonics, 1)?;
        at_least("sumPoints", self.sum_points, 2)?;
        at_least("maxHarmonicPoints", self.max_harmonic_points, 2)?;
        at_least("challengeAttempts", self.challenge_attempts, 1)?;

        if self.amplitude_step > self.max_amplitude {
            return Err(FourierError::ConfigValue {
                field: "amplitudeStep",
                reason: format!(
                    "{} exceeds maxAmplitude {}",
                    self.amplitude_step, self.max_amplitude
                ),
            });
        }
        Ok(())
    }

    /// Period of the fundamental, in milliseconds.
    pub fn fundamental_period(&self) -> f64 {
        1000.0 / self.fundamental_frequency
    }

    /// A zeroed series laid out according to this config.
    pub fn fourier_series(&self) -> FourierSeries {
        FourierSeries::new(
            self.max_harmonics,
            self.fundamental_frequency,
            self.fundamental_wavelength,
            self.max_amplitude,
        )
    }

    /// Entropy-seeded challenge generator that retries `challengeAttempts` times.
    pub fn amplitude_generator(&self) -> AmplitudeGenerator {
        AmplitudeGenerator::new().with_max_attempts(self.challenge_attempts)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> FourierResult<SimulationConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| FourierError::ConfigRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    SimulationConfig::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_harmonics, 11);
        assert!((config.fundamental_period() - 1000.0 / 440.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(r#"{ "maxHarmonics": 8, "sumPoints": 2000 }"#)
            .unwrap();
        assert_eq!(config.max_harmonics, 8);
        assert_eq!(config.sum_points, 2000);
        assert_eq!(config.max_amplitude, 1.5);

        let series = config.fourier_series();
        assert_eq!(series.max_harmonics(), 8);
        assert_eq!(series.max_amplitude(), 1.5);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SimulationConfig::from_json(r#"{ "fundamentalFrequency": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            FourierError::ConfigValue {
                field: "fundamentalFrequency",
                ..
            }
        ));

        let err = SimulationConfig::from_json(r#"{ "sumPoints": 1 }"#).unwrap_err();
        assert!(matches!(err, FourierError::ConfigValue { field: "sumPoints", .. }));

        let err = SimulationConfig::from_json(r#"{ "amplitudeStep": 2.0 }"#).unwrap_err();
        assert!(matches!(err, FourierError::ConfigValue { field: "amplitudeStep", .. }));
    }

    #[test]
    fn test_generator_uses_challenge_attempts() {
        let config = SimulationConfig::from_json(r#"{ "challengeAttempts": 3 }"#).unwrap();
        assert_eq!(config.amplitude_generator().max_attempts(), 3);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json("{ maxHarmonics: 3 }"),
            Err(FourierError::ConfigFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FourierError::ConfigRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_round_trips_camel_case() {
        let json = serde_json::to_value(SimulationConfig::default()).unwrap();
        assert!(json.get("maxHarmonicPoints").is_some());
        assert!(json.get("max_harmonic_points").is_none());
    }
}

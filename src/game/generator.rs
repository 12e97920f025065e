// src/game/generator.rs

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::utils::warn_console;

pub const DEFAULT_AMPLITUDE_STEP: f64 = 0.1;

/// Attempts at finding an amplitude vector that differs from the previous challenge.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Result of [`AmplitudeGenerator::generate_avoiding_similarity`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAmplitudes {
    pub amplitudes: Vec<f64>,
    pub attempts: usize,
    /// True when every attempt reproduced the previous vector and the last one was
    /// returned anyway.
    pub similar_to_previous: bool,
}

/// Random answer vectors for game challenges.
pub struct AmplitudeGenerator<R: Rng = StdRng> {
    rng: R,
    max_attempts: usize,
}

impl AmplitudeGenerator<StdRng> {
    /// Generator seeded from the platform's entropy source.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        if let Err(e) = getrandom::fill(&mut seed) {
            warn_console(&format!("No entropy for amplitude generator: {}", e));
        }
        Self::from_rng(StdRng::from_seed(seed))
    }

    /// Reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AmplitudeGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AmplitudeGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        assert!(max_attempts >= 1, "need at least one attempt");
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Vector of `number_of_harmonics` amplitudes, exactly `number_of_non_zero` of them
    /// non-zero.
    ///
    /// Non-zero positions are chosen uniformly without replacement. Each non-zero value
    /// has a magnitude drawn uniformly from the multiples of `step` in
    /// `[step, max_amplitude]`, and a random sign.
    pub fn generate(
        &mut self,
        number_of_harmonics: usize,
        number_of_non_zero: usize,
        max_amplitude: f64,
        step: f64,
    ) -> Vec<f64> {
        assert!(
            number_of_non_zero <= number_of_harmonics,
            "cannot place {} non-zero amplitudes in {} harmonics",
            number_of_non_zero,
            number_of_harmonics
        );
        assert!(
            step.is_finite() && step > 0.0,
            "step must be positive and finite, got {}",
            step
        );
        assert!(
            max_amplitude.is_finite(),
            "max amplitude must be finite, got {}",
            max_amplitude
        );
        assert!(
            max_amplitude >= step,
            "max amplitude {} is smaller than step {}",
            max_amplitude,
            step
        );

        let mut amplitudes = vec![0.0; number_of_harmonics];
        let positions = index::sample(&mut self.rng, number_of_harmonics, number_of_non_zero);
        for i in positions.iter() {
            amplitudes[i] = self.non_zero_amplitude(max_amplitude, step);
        }
        amplitudes
    }

    /// Like [`AmplitudeGenerator::generate`], but retries while the result equals
    /// `previous` exactly.
    ///
    /// Gives up after `max_attempts` and returns the last vector with
    /// `similar_to_previous` set.
    pub fn generate_avoiding_similarity(
        &mut self,
        number_of_harmonics: usize,
        number_of_non_zero: usize,
        max_amplitude: f64,
        step: f64,
        previous: Option<&[f64]>,
    ) -> GeneratedAmplitudes {
        let mut attempts = 0;
        loop {
            let amplitudes =
                self.generate(number_of_harmonics, number_of_non_zero, max_amplitude, step);
            attempts += 1;

            let similar = previous.is_some_and(|p| p == amplitudes.as_slice());
            if !similar || attempts >= self.max_attempts {
                if similar {
                    warn_console(&format!(
                        "Challenge generator repeated the previous amplitudes after {} attempts",
                        attempts
                    ));
                }
                return GeneratedAmplitudes {
                    amplitudes,
                    attempts,
                    similar_to_previous: similar,
                };
            }
        }
    }

    fn non_zero_amplitude(&mut self, max_amplitude: f64, step: f64) -> f64 {
        // Largest multiple of `step` that fits, tolerating 1.5 / 0.1 = 15.000000000000002.
        let max_steps = (max_amplitude / step + 1e-9).floor() as u64;
        let steps = self.rng.random_range(1..=max_steps);
        let value = (steps as f64 * step).min(max_amplitude);
        if self.rng.random_bool(0.5) {
            value
        } else {
            -value
        }
    }
}

// waveform.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::SeriesType;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Target waveforms offered on the discrete screen.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Waveform {
    Sinusoid = 0,
    Triangle = 1,
    Square = 2,
    Sawtooth = 3,
    WavePacket = 4,
    Custom = 5,
}

impl Waveform {
    /// Sawtooth has no cosine form; everything else works with both series types.
    pub fn supports(&self, series_type: SeriesType) -> bool {
        !matches!((self, series_type), (Waveform::Sawtooth, SeriesType::Cosine))
    }

    /// Whether [`Waveform::amplitudes`] produces a vector for this waveform.
    pub fn has_preset_amplitudes(&self) -> bool {
        !matches!(self, Waveform::WavePacket | Waveform::Custom)
    }

    /// Amplitudes of the first `number_of_harmonics` harmonics of this waveform.
    ///
    /// `None` for custom and wave-packet waveforms, which are shaped by the user, and
    /// for combinations that [`Waveform::supports`] rejects.
    pub fn amplitudes(
        &self,
        number_of_harmonics: usize,
        series_type: SeriesType,
    ) -> Option<Vec<f64>> {
        if !self.has_preset_amplitudes() || !self.supports(series_type) {
            return None;
        }

        let amplitudes = (1..=number_of_harmonics)
            .map(|n| {
                let order = n as f64;
                let odd = n % 2 == 1;
                // (-1)^((n-1)/2) for odd n: +1, -1, +1, ... on orders 1, 3, 5, ...
                let alternating = if (n / 2) % 2 == 0 { 1.0 } else { -1.0 };
                match self {
                    Waveform::Sinusoid => {
                        if n == 1 {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    Waveform::Square if odd => match series_type {
                        SeriesType::Sine => 1.0 / order,
                        SeriesType::Cosine => alternating / order,
                    },
                    Waveform::Triangle if odd => match series_type {
                        SeriesType::Sine => alternating / (order * order),
                        SeriesType::Cosine => 1.0 / (order * order),
                    },
                    Waveform::Sawtooth => {
                        if odd {
                            1.0 / order
                        } else {
                            -1.0 / order
                        }
                    }
                    _ => 0.0,
                }
            })
            .collect();
        Some(amplitudes)
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sinusoid" | "sine" => Ok(Waveform::Sinusoid),
            "triangle" => Ok(Waveform::Triangle),
            "square" => Ok(Waveform::Square),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            "wavepacket" | "wave-packet" => Ok(Waveform::WavePacket),
            "custom" => Ok(Waveform::Custom),
            _ => Err(format!("Unknown waveform '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPSILON, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_sinusoid() {
        let amplitudes = Waveform::Sinusoid.amplitudes(4, SeriesType::Cosine).unwrap();
        assert_eq!(amplitudes, vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_square() {
        let sine = Waveform::Square.amplitudes(5, SeriesType::Sine).unwrap();
        assert_close(&sine, &[1.0, 0.0, 1.0 / 3.0, 0.0, 1.0 / 5.0]);

        let cosine = Waveform::Square.amplitudes(5, SeriesType::Cosine).unwrap();
        assert_close(&cosine, &[1.0, 0.0, -1.0 / 3.0, 0.0, 1.0 / 5.0]);
    }

    #[test]
    fn test_triangle() {
        let sine = Waveform::Triangle.amplitudes(7, SeriesType::Sine).unwrap();
        assert_close(
            &sine,
            &[1.0, 0.0, -1.0 / 9.0, 0.0, 1.0 / 25.0, 0.0, -1.0 / 49.0],
        );

        let cosine = Waveform::Triangle.amplitudes(3, SeriesType::Cosine).unwrap();
        assert_close(&cosine, &[1.0, 0.0, 1.0 / 9.0]);
    }

    #[test]
    fn test_sawtooth_is_sine_only() {
        let sine = Waveform::Sawtooth.amplitudes(4, SeriesType::Sine).unwrap();
        assert_close(&sine, &[1.0, -0.5, 1.0 / 3.0, -0.25]);
        assert!(!Waveform::Sawtooth.supports(SeriesType::Cosine));
        assert!(Waveform::Sawtooth.amplitudes(4, SeriesType::Cosine).is_none());
    }

    #[test]
    fn test_user_shaped_waveforms_have_no_preset() {
        assert!(Waveform::Custom.amplitudes(11, SeriesType::Sine).is_none());
        assert!(Waveform::WavePacket.amplitudes(11, SeriesType::Sine).is_none());
    }

    #[test]
    fn test_presets_fit_the_amplitude_range() {
        for waveform in [
            Waveform::Sinusoid,
            Waveform::Triangle,
            Waveform::Square,
            Waveform::Sawtooth,
        ] {
            let amplitudes = waveform.amplitudes(11, SeriesType::Sine).unwrap();
            assert!(amplitudes.iter().all(|a| a.abs() <= 1.5));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Square".parse::<Waveform>(), Ok(Waveform::Square));
        assert_eq!("saw".parse::<Waveform>(), Ok(Waveform::Sawtooth));
        assert!("noise".parse::<Waveform>().is_err());
    }
}

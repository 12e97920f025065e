// src/wasm.rs
//
// JavaScript-facing wrappers. Contract violations that would panic natively are turned
// into `Err(JsValue)` here so a bad call from the UI does not abort the module.

use rustc_hash::FxHashMap;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use js_sys::Function;

use crate::axis::{
    AxisLadder, SUM_Y_AXIS_DEFAULT_LEVEL, SUM_Y_AXIS_LADDER, X_AXIS_DEFAULT_LEVEL, X_AXIS_LADDER,
};
use crate::chart::{auto_scale_level, harmonic_data_sets, sum_data_set, ChartSnapshot};
use crate::config::SimulationConfig;
use crate::emphasis::{EmphasisSet, ListenerId};
use crate::game::AmplitudeGenerator;
use crate::model::{Domain, FourierSeries, SeriesType};
use crate::sampling::Point;
use crate::utils::warn_console;
use crate::waveform::Waveform;

#[derive(Serialize)]
struct HarmonicPoints<'a> {
    order: usize,
    points: &'a [Point],
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn check_amplitude(amplitude: f64, max_amplitude: f64) -> Result<(), String> {
    if amplitude.is_finite() && amplitude.abs() <= max_amplitude {
        Ok(())
    } else {
        Err(format!(
            "Amplitude {} outside [-{}, {}]",
            amplitude, max_amplitude, max_amplitude
        ))
    }
}

fn check_amplitudes(
    amplitudes: &[f64],
    max_harmonics: usize,
    max_amplitude: f64,
) -> Result<(), String> {
    if amplitudes.len() > max_harmonics {
        return Err(format!(
            "Got {} amplitudes for {} harmonics",
            amplitudes.len(),
            max_harmonics
        ));
    }
    amplitudes
        .iter()
        .try_for_each(|&a| check_amplitude(a, max_amplitude))
}

fn check_challenge_request(
    number_of_harmonics: usize,
    number_of_non_zero: usize,
    max_amplitude: f64,
    step: f64,
) -> Result<(), String> {
    if number_of_non_zero > number_of_harmonics {
        return Err(format!(
            "Cannot place {} non-zero amplitudes in {} harmonics",
            number_of_non_zero, number_of_harmonics
        ));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(format!("Amplitude step {} must be positive and finite", step));
    }
    if !(max_amplitude.is_finite() && max_amplitude >= step) {
        return Err(format!(
            "Max amplitude {} must be finite and at least the step {}",
            max_amplitude, step
        ));
    }
    Ok(())
}

fn zoom(ladder: &AxisLadder, level: usize, zoom_in: bool) -> usize {
    if zoom_in {
        ladder.zoom_in(level)
    } else {
        ladder.zoom_out(level)
    }
}

/// A Fourier series plus the view state of its Harmonics and Sum charts.
#[wasm_bindgen]
pub struct WaveSimulation {
    config: SimulationConfig,
    series: FourierSeries,
    snapshot: ChartSnapshot,
    sum_y_zoom_level: usize,
    auto_scale: bool,
}

#[wasm_bindgen]
impl WaveSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WaveSimulation {
        Self::with_config(SimulationConfig::default())
    }

    pub fn from_config_json(json: &str) -> Result<WaveSimulation, JsValue> {
        let config = SimulationConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: SimulationConfig) -> WaveSimulation {
        let series = config.fourier_series();
        WaveSimulation {
            config,
            series,
            snapshot: ChartSnapshot::new(Domain::Space, SeriesType::Sine, 0.0, X_AXIS_DEFAULT_LEVEL),
            sum_y_zoom_level: SUM_Y_AXIS_DEFAULT_LEVEL,
            auto_scale: false,
        }
    }

    pub fn amplitudes(&self) -> Vec<f64> {
        self.series.amplitudes()
    }

    pub fn set_amplitude(&mut self, order: usize, amplitude: f64) -> Result<(), JsValue> {
        if order < 1 || order > self.series.number_of_harmonics() {
            return Err(JsValue::from_str(&format!(
                "Harmonic {} is not active",
                order
            )));
        }
        check_amplitude(amplitude, self.series.max_amplitude()).map_err(js_error)?;
        self.series.set_amplitude(order, amplitude);
        Ok(())
    }

    pub fn set_amplitudes(&mut self, amplitudes: Vec<f64>) -> Result<(), JsValue> {
        check_amplitudes(
            &amplitudes,
            self.series.max_harmonics(),
            self.series.max_amplitude(),
        )
        .map_err(js_error)?;
        self.series.set_amplitudes(&amplitudes);
        Ok(())
    }

    pub fn set_number_of_harmonics(&mut self, number_of_harmonics: usize) -> Result<(), JsValue> {
        if number_of_harmonics < 1 || number_of_harmonics > self.series.max_harmonics() {
            return Err(JsValue::from_str(&format!(
                "Number of harmonics {} out of range",
                number_of_harmonics
            )));
        }
        self.series.set_number_of_harmonics(number_of_harmonics);
        Ok(())
    }

    /// Loads a preset waveform's amplitudes. Returns false if the waveform has none for
    /// the current series type.
    pub fn apply_waveform(&mut self, waveform: Waveform) -> bool {
        match waveform.amplitudes(self.series.number_of_harmonics(), self.snapshot.series_type) {
            Some(amplitudes) => {
                self.series.set_amplitudes(&amplitudes);
                true
            }
            None => false,
        }
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.snapshot.domain = domain;
    }

    pub fn set_series_type(&mut self, series_type: SeriesType) {
        self.snapshot.series_type = series_type;
    }

    /// Elapsed time in milliseconds.
    pub fn set_time(&mut self, t: f64) -> Result<(), JsValue> {
        if !(t.is_finite() && t >= 0.0) {
            return Err(JsValue::from_str("Time must be non-negative"));
        }
        self.snapshot.t = t;
        Ok(())
    }

    pub fn x_zoom_level(&self) -> usize {
        self.snapshot.x_zoom_level
    }

    pub fn zoom_x(&mut self, zoom_in: bool) -> usize {
        self.snapshot.x_zoom_level = zoom(&X_AXIS_LADDER, self.snapshot.x_zoom_level, zoom_in);
        self.snapshot.x_zoom_level
    }

    pub fn sum_y_zoom_level(&self) -> usize {
        self.sum_y_zoom_level
    }

    pub fn zoom_sum_y(&mut self, zoom_in: bool) -> usize {
        self.auto_scale = false;
        self.sum_y_zoom_level = zoom(&SUM_Y_AXIS_LADDER, self.sum_y_zoom_level, zoom_in);
        self.sum_y_zoom_level
    }

    pub fn set_auto_scale(&mut self, auto_scale: bool) {
        self.auto_scale = auto_scale;
    }

    /// `[{ order, points: [{ x, y }] }]` for every relevant harmonic.
    pub fn harmonic_data_sets(&self) -> Result<JsValue, JsValue> {
        let data_sets = harmonic_data_sets(
            &self.series,
            &self.snapshot,
            &X_AXIS_LADDER,
            self.config.max_harmonic_points,
        );
        let payload: Vec<HarmonicPoints> = data_sets
            .iter()
            .map(|(order, data_set)| HarmonicPoints {
                order: *order,
                points: data_set.points(),
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&payload)?)
    }

    /// Points of the sum. With auto-scale on, also moves the sum's y zoom level to fit.
    pub fn sum_data_set(&mut self) -> Result<JsValue, JsValue> {
        let data_set = sum_data_set(
            &self.series,
            &self.snapshot,
            &X_AXIS_LADDER,
            self.config.sum_points,
        );
        if self.auto_scale {
            self.sum_y_zoom_level = auto_scale_level(&data_set, &SUM_Y_AXIS_LADDER);
        }
        Ok(serde_wasm_bindgen::to_value(data_set.points())?)
    }
}

impl Default for WaveSimulation {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct WasmAmplitudeGenerator {
    generator: AmplitudeGenerator,
    previous: Option<Vec<f64>>,
}

#[wasm_bindgen]
impl WasmAmplitudeGenerator {
    #[wasm_bindgen(constructor)]
    pub fn new(max_attempts: usize) -> Result<WasmAmplitudeGenerator, JsValue> {
        Self::build(AmplitudeGenerator::new(), max_attempts)
    }

    /// Generator configured by a `SimulationConfig` JSON document.
    pub fn from_config_json(json: &str) -> Result<WasmAmplitudeGenerator, JsValue> {
        let config = SimulationConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(WasmAmplitudeGenerator {
            generator: config.amplitude_generator(),
            previous: None,
        })
    }

    pub fn seeded(seed: u64, max_attempts: usize) -> Result<WasmAmplitudeGenerator, JsValue> {
        Self::build(AmplitudeGenerator::with_seed(seed), max_attempts)
    }

    fn build(
        generator: AmplitudeGenerator,
        max_attempts: usize,
    ) -> Result<WasmAmplitudeGenerator, JsValue> {
        if max_attempts == 0 {
            return Err(JsValue::from_str("max_attempts must be at least 1"));
        }
        Ok(WasmAmplitudeGenerator {
            generator: generator.with_max_attempts(max_attempts),
            previous: None,
        })
    }

    /// Next challenge answer, different from the one this call returned last time when
    /// possible. Resolves to `{ amplitudes, attempts, similarToPrevious }`.
    pub fn next(
        &mut self,
        number_of_harmonics: usize,
        number_of_non_zero: usize,
        max_amplitude: f64,
        step: f64,
    ) -> Result<JsValue, JsValue> {
        check_challenge_request(number_of_harmonics, number_of_non_zero, max_amplitude, step)
            .map_err(js_error)?;
        let generated = self.generator.generate_avoiding_similarity(
            number_of_harmonics,
            number_of_non_zero,
            max_amplitude,
            step,
            self.previous.as_deref(),
        );
        self.previous = Some(generated.amplitudes.clone());
        Ok(serde_wasm_bindgen::to_value(&generated)?)
    }
}

/// Emphasis set keyed by UI source names, holding harmonic orders.
#[wasm_bindgen]
pub struct WasmEmphasisSet {
    set: EmphasisSet<String, usize>,
    listener_ids: FxHashMap<u32, ListenerId>,
    next_handle: u32,
}

#[wasm_bindgen]
impl WasmEmphasisSet {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEmphasisSet {
        WasmEmphasisSet {
            set: EmphasisSet::new(),
            listener_ids: FxHashMap::default(),
            next_handle: 0,
        }
    }

    pub fn add(&mut self, source: String, order: usize) -> Result<(), JsValue> {
        if self.set.has(&source) {
            return Err(JsValue::from_str(&format!(
                "Source '{}' is already emphasizing a harmonic",
                source
            )));
        }
        self.set.add(source, order);
        Ok(())
    }

    pub fn remove(&mut self, source: &str) -> Result<usize, JsValue> {
        let source = source.to_string();
        if !self.set.has(&source) {
            return Err(JsValue::from_str(&format!(
                "Source '{}' is not emphasizing a harmonic",
                source
            )));
        }
        Ok(self.set.remove(&source))
    }

    pub fn has(&self, source: &str) -> bool {
        self.set.has(&source.to_string())
    }

    pub fn emphasizes(&self, order: usize) -> bool {
        self.set.emphasizes(&order)
    }

    pub fn size(&self) -> usize {
        self.set.size()
    }

    pub fn clear(&mut self) {
        self.set.clear();
    }

    /// Calls `callback` with no arguments whenever the size changes. Returns a handle
    /// for [`WasmEmphasisSet::remove_listener`].
    pub fn on_change(&mut self, callback: Function) -> u32 {
        let id = self.set.on_change(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                warn_console(&format!("Emphasis listener threw: {:?}", e));
            }
        });
        let handle = self.next_handle;
        self.next_handle += 1;
        self.listener_ids.insert(handle, id);
        handle
    }

    pub fn remove_listener(&mut self, handle: u32) -> bool {
        match self.listener_ids.remove(&handle) {
            Some(id) => self.set.remove_listener(id),
            None => false,
        }
    }
}

impl Default for WasmEmphasisSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_checks_reject_non_finite_values() {
        assert!(check_amplitude(1.5, 1.5).is_ok());
        assert!(check_amplitude(-0.3, 1.5).is_ok());
        assert!(check_amplitude(1.6, 1.5).is_err());
        assert!(check_amplitude(f64::NAN, 1.5).is_err());
        assert!(check_amplitude(f64::INFINITY, 1.5).is_err());
        assert!(check_amplitude(f64::NEG_INFINITY, 1.5).is_err());
    }

    #[test]
    fn test_amplitude_vector_checks() {
        assert!(check_amplitudes(&[0.5, -1.0, 0.0], 11, 1.5).is_ok());
        assert!(check_amplitudes(&[0.0; 12], 11, 1.5).is_err());
        assert!(check_amplitudes(&[0.5, f64::NAN], 11, 1.5).is_err());
    }

    #[test]
    fn test_challenge_request_checks() {
        assert!(check_challenge_request(11, 3, 1.5, 0.1).is_ok());
        assert!(check_challenge_request(3, 4, 1.5, 0.1).is_err());
        assert!(check_challenge_request(3, 1, f64::INFINITY, 0.1).is_err());
        assert!(check_challenge_request(3, 1, f64::NAN, 0.1).is_err());
        assert!(check_challenge_request(3, 1, 1.5, f64::NAN).is_err());
        assert!(check_challenge_request(3, 1, 1.5, 0.0).is_err());
        assert!(check_challenge_request(3, 1, 0.05, 0.1).is_err());
    }

    #[test]
    fn test_valid_amplitudes_reach_the_series() {
        let mut simulation = WaveSimulation::new();
        assert!(simulation.set_amplitudes(vec![0.5, 0.0, -1.5]).is_ok());
        assert!(simulation.set_amplitude(2, 0.25).is_ok());

        let amplitudes = simulation.amplitudes();
        assert_eq!(&amplitudes[..3], &[0.5, 0.25, -1.5]);
        assert!(amplitudes[3..].iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_zoom_clamps_at_both_ends() {
        let mut simulation = WaveSimulation::new();
        for _ in 0..10 {
            simulation.zoom_x(true);
        }
        assert_eq!(simulation.x_zoom_level(), X_AXIS_LADDER.narrowest_level());
        for _ in 0..10 {
            simulation.zoom_sum_y(false);
        }
        assert_eq!(simulation.sum_y_zoom_level(), 0);
    }
}

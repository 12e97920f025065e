// src/chart.rs
//
// Glue between a Fourier series and the Harmonics / Sum charts.

use serde::{Deserialize, Serialize};

use crate::axis::{x_range_for_domain, AxisLadder};
use crate::model::{Domain, FourierSeries, SeriesType};
use crate::sampling::{points_for_harmonic, sample_harmonic, sample_sum, DataSet, SampleGrid, WaveContext};

/// View state both charts read when recomputing.
///
/// The Harmonics and Sum charts are built from the same snapshot, so they always share
/// `x_zoom_level` and therefore the same x range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub domain: Domain,
    pub series_type: SeriesType,
    pub t: f64,
    pub x_zoom_level: usize,
}

impl ChartSnapshot {
    pub fn new(domain: Domain, series_type: SeriesType, t: f64, x_zoom_level: usize) -> Self {
        Self {
            domain,
            series_type,
            t,
            x_zoom_level,
        }
    }

    pub fn wave_context(&self, series: &FourierSeries) -> WaveContext {
        WaveContext {
            domain: self.domain,
            series_type: self.series_type,
            wavelength: series.fundamental_wavelength(),
            period: series.fundamental_period(),
            t: self.t,
        }
    }

    fn grid(&self, series: &FourierSeries, x_ladder: &AxisLadder, number_of_points: usize) -> SampleGrid {
        let x_range = x_range_for_domain(
            x_ladder.get(self.x_zoom_level),
            self.domain,
            series.fundamental_wavelength(),
            series.fundamental_period(),
        );
        SampleGrid::new(x_range, number_of_points)
    }
}

/// One data set per relevant harmonic, sampled at a density proportional to its order.
pub fn harmonic_data_sets(
    series: &FourierSeries,
    snapshot: &ChartSnapshot,
    x_ladder: &AxisLadder,
    max_points: usize,
) -> Vec<(usize, DataSet)> {
    let context = snapshot.wave_context(series);
    let total = series.max_harmonics();
    series
        .relevant_harmonics()
        .iter()
        .map(|harmonic| {
            let order = harmonic.order();
            let points = points_for_harmonic(order, max_points, total);
            let grid = snapshot.grid(series, x_ladder, points);
            (order, sample_harmonic(order, harmonic.amplitude(), &context, &grid))
        })
        .collect()
}

pub fn sum_data_set(
    series: &FourierSeries,
    snapshot: &ChartSnapshot,
    x_ladder: &AxisLadder,
    sum_points: usize,
) -> DataSet {
    let context = snapshot.wave_context(series);
    let grid = snapshot.grid(series, x_ladder, sum_points);
    sample_sum(&series.terms(), &context, &grid)
}

pub fn max_abs_y(data_set: &DataSet) -> f64 {
    data_set.max_abs_y()
}

/// Zoom level of `y_ladder` that just fits `data_set`, for the Sum chart's auto-scale.
pub fn auto_scale_level(data_set: &DataSet, y_ladder: &AxisLadder) -> usize {
    y_ladder.level_for_max(max_abs_y(data_set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{SUM_Y_AXIS_DEFAULT_LEVEL, SUM_Y_AXIS_LADDER, X_AXIS_DEFAULT_LEVEL, X_AXIS_LADDER};
    use crate::config::SimulationConfig;
    use crate::waveform::Waveform;

    fn snapshot(domain: Domain) -> ChartSnapshot {
        ChartSnapshot::new(domain, SeriesType::Sine, 0.0, X_AXIS_DEFAULT_LEVEL)
    }

    #[test]
    fn test_harmonic_data_sets_follow_relevant_harmonics() {
        let mut series = SimulationConfig::default().fourier_series();
        series.set_number_of_harmonics(4);

        let data_sets = harmonic_data_sets(&series, &snapshot(Domain::Space), &X_AXIS_LADDER, 1000);
        let orders: Vec<usize> = data_sets.iter().map(|(order, _)| *order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);

        let lengths: Vec<usize> = data_sets.iter().map(|(_, d)| d.len()).collect();
        assert_eq!(lengths, vec![91, 182, 273, 364]);
    }

    #[test]
    fn test_charts_share_x_range() {
        let series = SimulationConfig::default().fourier_series();
        let snapshot = snapshot(Domain::Time);
        let sum = sum_data_set(&series, &snapshot, &X_AXIS_LADDER, 1000);
        let harmonics = harmonic_data_sets(&series, &snapshot, &X_AXIS_LADDER, 1000);

        let first = sum.points()[0].x;
        let last = sum.points()[sum.len() - 1].x;
        // Level 2 spans one period either side, in milliseconds.
        assert!((last - series.fundamental_period()).abs() < 1e-9);
        for (_, data_set) in &harmonics {
            let points = data_set.points();
            assert!((points[0].x - first).abs() < 1e-9);
            assert!((points[points.len() - 1].x - last).abs() < 1e-9);
        }
    }

    #[test]
    fn test_auto_scale_fits_square_wave() {
        let mut series = SimulationConfig::default().fourier_series();
        let amplitudes = Waveform::Square
            .amplitudes(series.max_harmonics(), SeriesType::Sine)
            .unwrap();
        series.set_amplitudes(&amplitudes);

        let sum = sum_data_set(&series, &snapshot(Domain::Space), &X_AXIS_LADDER, 1000);
        let peak = max_abs_y(&sum);
        assert!(peak > 0.7 && peak < 1.2, "peak {}", peak);

        let level = auto_scale_level(&sum, &SUM_Y_AXIS_LADDER);
        assert_eq!(level, SUM_Y_AXIS_DEFAULT_LEVEL);
        assert!(SUM_Y_AXIS_LADDER.get(level).max >= peak);
    }

    #[test]
    fn test_all_zero_series_scales_to_narrowest() {
        let series = SimulationConfig::default().fourier_series();
        let sum = sum_data_set(&series, &snapshot(Domain::Space), &X_AXIS_LADDER, 100);
        assert_eq!(max_abs_y(&sum), 0.0);
        assert_eq!(
            auto_scale_level(&sum, &SUM_Y_AXIS_LADDER),
            SUM_Y_AXIS_LADDER.narrowest_level()
        );
    }
}

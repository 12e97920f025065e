// src/sampling/sampler.rs

use serde::{Deserialize, Serialize};

use super::{DataSet, Point};
use crate::model::{Domain, NumericRange, SeriesType, Term};

/// Points used for a sum, independent of which harmonics are active.
pub const DEFAULT_SUM_POINTS: usize = 1000;

/// Everything about the current view that affects a waveform's shape, read at the
/// moment of the recompute.
///
/// `wavelength` and `period` are the fundamental's (meters and milliseconds), `t` is
/// the elapsed time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveContext {
    pub domain: Domain,
    pub series_type: SeriesType,
    pub wavelength: f64,
    pub period: f64,
    pub t: f64,
}

impl WaveContext {
    fn validate(&self) {
        assert!(
            self.wavelength > 0.0,
            "fundamental wavelength must be positive, got {}",
            self.wavelength
        );
        assert!(
            self.period > 0.0,
            "fundamental period must be positive, got {}",
            self.period
        );
        assert!(self.t >= 0.0, "time must be non-negative, got {}", self.t);
    }
}

/// Evenly spaced horizontal sample positions covering `x_range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleGrid {
    pub x_range: NumericRange,
    pub number_of_points: usize,
}

impl SampleGrid {
    pub fn new(x_range: NumericRange, number_of_points: usize) -> Self {
        let grid = Self {
            x_range,
            number_of_points,
        };
        grid.validate();
        grid
    }

    fn validate(&self) {
        assert!(
            self.number_of_points >= 2,
            "need at least 2 points, got {}",
            self.number_of_points
        );
        assert!(
            self.x_range.min.is_finite() && self.x_range.max.is_finite(),
            "x range must be finite"
        );
        assert!(
            self.x_range.min < self.x_range.max,
            "x range [{}, {}] is empty",
            self.x_range.min,
            self.x_range.max
        );
    }

    pub fn dx(&self) -> f64 {
        self.x_range.length() / (self.number_of_points - 1) as f64
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> {
        let min = self.x_range.min;
        let dx = self.dx();
        (0..self.number_of_points).map(move |i| min + i as f64 * dx)
    }
}

/// Displacement of a single harmonic at horizontal coordinate `x`.
#[inline]
pub fn harmonic_value(order: usize, amplitude: f64, context: &WaveContext, x: f64) -> f64 {
    let phase = context.domain.phase(
        order as f64,
        x,
        context.t,
        context.wavelength,
        context.period,
    );
    amplitude * context.series_type.apply(phase)
}

/// Samples one harmonic over `grid`.
///
/// A zero amplitude still yields a full data set of zeros.
pub fn sample_harmonic(
    order: usize,
    amplitude: f64,
    context: &WaveContext,
    grid: &SampleGrid,
) -> DataSet {
    assert!(order >= 1, "harmonic order must be >= 1, got {}", order);
    context.validate();
    grid.validate();

    let points = grid
        .xs()
        .map(|x| Point {
            x,
            y: harmonic_value(order, amplitude, context, x),
        })
        .collect();
    DataSet::new(points)
}

/// Samples the sum of `terms` over `grid`.
///
/// Every harmonic is evaluated on the same grid rather than reusing per-harmonic data
/// sets, since those are sampled at densities that depend on order. Terms with zero
/// amplitude are skipped.
pub fn sample_sum(terms: &[Term], context: &WaveContext, grid: &SampleGrid) -> DataSet {
    for term in terms {
        assert!(
            term.order >= 1,
            "harmonic order must be >= 1, got {}",
            term.order
        );
    }
    context.validate();
    grid.validate();

    let active: Vec<&Term> = terms.iter().filter(|t| t.amplitude != 0.0).collect();

    let points = grid
        .xs()
        .map(|x| {
            let y = active
                .iter()
                .map(|term| harmonic_value(term.order, term.amplitude, context, x))
                .sum();
            Point { x, y }
        })
        .collect();
    DataSet::new(points)
}

/// Points to use when plotting harmonic `order` on its own.
///
/// Higher harmonics oscillate faster, so they get proportionally more points:
/// `ceil(max_points * order / total_harmonics)`, never fewer than 2.
pub fn points_for_harmonic(order: usize, max_points: usize, total_harmonics: usize) -> usize {
    assert!(
        order >= 1 && order <= total_harmonics,
        "order {} outside [1, {}]",
        order,
        total_harmonics
    );
    assert!(max_points >= 2, "need at least 2 points, got {}", max_points);

    let points = (max_points * order).div_ceil(total_harmonics);
    points.max(2)
}

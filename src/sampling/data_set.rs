use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Sampled points of one plotted waveform, in increasing `x`.
///
/// A data set is rebuilt from scratch on every recompute and never edited in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DataSet {
    points: Vec<Point>,
}

impl DataSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Largest `|y|`, or 0 for an empty set.
    pub fn max_abs_y(&self) -> f64 {
        self.points.iter().fold(0.0f64, |max, p| max.max(p.y.abs()))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

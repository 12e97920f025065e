use serde::{Deserialize, Serialize};

/// A closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min <= max, "range min {} exceeds max {}", min, max);
        Self { min, max }
    }

    /// `[-max, max]`
    pub fn symmetric(max: f64) -> Self {
        assert!(max >= 0.0, "symmetric range needs a non-negative max, got {}", max);
        Self { min: -max, max }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_symmetric(&self) -> bool {
        self.min == -self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_range() {
        let range = NumericRange::symmetric(1.5);
        assert!(range.is_symmetric());
        assert_eq!(range.length(), 3.0);
        assert_eq!(range.center(), 0.0);
        assert!(range.contains(-1.5));
        assert!(!range.contains(1.6));
    }

    #[test]
    fn test_scaled() {
        let range = NumericRange::new(-0.5, 1.0).scaled(2.0);
        assert_eq!(range, NumericRange::new(-1.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn test_inverted_range_panics() {
        NumericRange::new(1.0, 0.0);
    }
}

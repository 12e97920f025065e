// src/axis/ladder.rs

use super::AxisDescription;
use crate::error::{FourierError, FourierResult};
use crate::model::NumericRange;

/// Extra constraint a caller places on a ladder, checked at construction.
#[derive(Clone, Copy)]
pub enum LadderRule {
    /// The narrowest level's `max` must be at least this value.
    NarrowestAtLeast(f64),
    /// The widest level's `max` must be at most this value.
    WidestAtMost(f64),
    /// Arbitrary check over the whole ladder.
    Custom(fn(&[AxisDescription]) -> Result<(), String>),
}

impl std::fmt::Debug for LadderRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LadderRule::NarrowestAtLeast(min) => write!(f, "NarrowestAtLeast({})", min),
            LadderRule::WidestAtMost(max) => write!(f, "WidestAtMost({})", max),
            LadderRule::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl LadderRule {
    fn check(&self, descriptions: &[AxisDescription]) -> Result<(), String> {
        // Only called on non-empty ladders.
        let widest = descriptions[0].max;
        let narrowest = descriptions[descriptions.len() - 1].max;
        match *self {
            LadderRule::NarrowestAtLeast(min) if narrowest < min => Err(format!(
                "narrowest level max {} is below required {}",
                narrowest, min
            )),
            LadderRule::WidestAtMost(max) if widest > max => Err(format!(
                "widest level max {} exceeds allowed {}",
                widest, max
            )),
            LadderRule::Custom(check) => check(descriptions),
            _ => Ok(()),
        }
    }
}

/// Zoom levels of an axis, widest (index 0, zoomed out) to narrowest (zoomed in).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLadder {
    descriptions: Vec<AxisDescription>,
}

impl AxisLadder {
    /// Builds a ladder, panicking if it is empty, unsorted, or otherwise malformed.
    ///
    /// Use [`AxisLadder::try_new`] for ladders that come from outside the crate.
    pub fn new(descriptions: Vec<AxisDescription>, rules: &[LadderRule]) -> Self {
        match Self::try_new(descriptions, rules) {
            Ok(ladder) => ladder,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(
        descriptions: Vec<AxisDescription>,
        rules: &[LadderRule],
    ) -> FourierResult<Self> {
        if descriptions.is_empty() {
            return Err(FourierError::EmptyLadder);
        }

        for (index, description) in descriptions.iter().enumerate() {
            description
                .check()
                .map_err(|reason| FourierError::InvalidDescription { index, reason })?;
        }

        for (index, pair) in descriptions.windows(2).enumerate() {
            if pair[1].max >= pair[0].max {
                return Err(FourierError::UnsortedLadder {
                    index: index + 1,
                    max: pair[1].max,
                    previous: pair[0].max,
                });
            }
        }

        for rule in rules {
            rule.check(&descriptions).map_err(FourierError::LadderRule)?;
        }

        Ok(Self { descriptions })
    }

    /// Parses a JSON array of descriptions and validates it like [`AxisLadder::try_new`].
    pub fn from_json(json: &str, rules: &[LadderRule]) -> FourierResult<Self> {
        let descriptions: Vec<AxisDescription> = serde_json::from_str(json)?;
        Self::try_new(descriptions, rules)
    }

    pub fn descriptions(&self) -> &[AxisDescription] {
        &self.descriptions
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Always false; a ladder cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    pub fn get(&self, level: usize) -> &AxisDescription {
        self.assert_level(level);
        &self.descriptions[level]
    }

    fn assert_level(&self, level: usize) {
        assert!(
            level < self.len(),
            "zoom level {} out of range [0, {})",
            level,
            self.len()
        );
    }

    pub fn widest_level(&self) -> usize {
        0
    }

    pub fn narrowest_level(&self) -> usize {
        self.descriptions.len() - 1
    }

    /// Most zoomed-in level whose range still contains `target`.
    ///
    /// Scans from the narrowest level outwards and returns the first one with
    /// `max >= target.max`. If even the widest level is too narrow, the widest level
    /// is returned. `target` must be symmetric.
    pub fn level_for_range(&self, target: &NumericRange) -> usize {
        assert!(
            target.is_symmetric(),
            "target range [{}, {}] is not symmetric",
            target.min,
            target.max
        );
        self.level_for_max(target.max)
    }

    /// [`AxisLadder::level_for_range`] for the range `[-max, max]`.
    pub fn level_for_max(&self, max: f64) -> usize {
        assert!(max >= 0.0, "max must be non-negative, got {}", max);
        self.descriptions
            .iter()
            .rposition(|d| d.max >= max)
            .unwrap_or_else(|| self.widest_level())
    }

    /// Description for [`AxisLadder::level_for_range`].
    pub fn description_for_range(&self, target: &NumericRange) -> &AxisDescription {
        self.get(self.level_for_range(target))
    }

    pub fn can_zoom_in(&self, level: usize) -> bool {
        level < self.narrowest_level()
    }

    pub fn can_zoom_out(&self, level: usize) -> bool {
        level > self.widest_level()
    }

    /// One level narrower, clamped at the narrowest level.
    pub fn zoom_in(&self, level: usize) -> usize {
        self.assert_level(level);
        (level + 1).min(self.narrowest_level())
    }

    /// One level wider, clamped at the widest level.
    pub fn zoom_out(&self, level: usize) -> usize {
        self.assert_level(level);
        level.saturating_sub(1)
    }
}

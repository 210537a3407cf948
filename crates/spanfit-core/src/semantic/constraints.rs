//! Spacing constraints for a placement.

use log::debug;
use serde::Deserialize;

use crate::error::PlacementError;

/// Allowed edge margins and the preferred gap between elements, in
/// millimeters.
///
/// The margin is measured from a platform inner edge to the first (or last)
/// element reference point. The target gap is a preference: the solver keeps
/// it exactly unless doing so would push the margin above `margin_max`, in
/// which case the gap grows.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Constraints {
    margin_min: f64,
    margin_max: f64,
    #[serde(default)]
    target_gap: f64,
}

impl Constraints {
    /// Creates constraints from a margin range and a target gap.
    pub fn new(margin_min: f64, margin_max: f64, target_gap: f64) -> Self {
        Self {
            margin_min,
            margin_max,
            target_gap,
        }
    }

    /// Returns the smallest allowed margin.
    pub fn margin_min(&self) -> f64 {
        self.margin_min
    }

    /// Returns the largest allowed margin.
    pub fn margin_max(&self) -> f64 {
        self.margin_max
    }

    /// Returns the preferred gap between adjacent footprints.
    pub fn target_gap(&self) -> f64 {
        self.target_gap
    }

    /// Checks that the margin range is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidMarginRange`] when either bound is
    /// negative or not finite, when `margin_min > margin_max`, or when the
    /// target gap is negative or not finite.
    pub fn validate(&self) -> Result<(), PlacementError> {
        let (min, max) = (self.margin_min, self.margin_max);
        let margins_ok = min.is_finite() && max.is_finite() && min >= 0.0 && min <= max;
        let gap_ok = self.target_gap.is_finite() && self.target_gap >= 0.0;

        if margins_ok && gap_ok {
            Ok(())
        } else {
            debug!(
                margin_min = min,
                margin_max = max,
                target_gap = self.target_gap;
                "Rejecting spacing constraints"
            );
            Err(PlacementError::InvalidMarginRange { min, max })
        }
    }
}

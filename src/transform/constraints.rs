use serde::{Deserialize, Serialize};

use crate::core::Orientation;

/// Optional per-direction absolute bound values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeBounds {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl RangeBounds {
    #[must_use]
    pub fn for_orientation(self, orientation: Orientation) -> Option<f64> {
        if orientation.is_horizontal() {
            self.x
        } else {
            self.y
        }
    }
}

/// Configured clamp bounds for one gesture family (pan or zoom).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeConstraints {
    #[serde(default)]
    pub range_min: RangeBounds,
    #[serde(default)]
    pub range_max: RangeBounds,
}

/// Substitutes the configured lower bound when the candidate violates it.
///
/// An unconfigured bound passes the candidate through unchanged.
#[must_use]
pub fn clamp_min(constraints: RangeConstraints, orientation: Orientation, candidate: f64) -> f64 {
    match constraints.range_min.for_orientation(orientation) {
        Some(bound) if candidate < bound => bound,
        _ => candidate,
    }
}

/// Substitutes the configured upper bound when the candidate violates it.
#[must_use]
pub fn clamp_max(constraints: RangeConstraints, orientation: Orientation, candidate: f64) -> f64 {
    match constraints.range_max.for_orientation(orientation) {
        Some(bound) if candidate > bound => bound,
        _ => candidate,
    }
}

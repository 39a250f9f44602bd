use crate::core::{Axis, Orientation, ValueRange};
use crate::error::PanZoomResult;
use crate::transform::constraints::{RangeConstraints, clamp_max, clamp_min};

/// Scales a continuous range about a focal value.
///
/// The focal value keeps its relative position inside the range while the
/// window narrows by `width * (factor - 1)`, split across both ends in
/// proportion to the focal position: `factor > 1` narrows (zoom in),
/// `factor < 1` widens (zoom out). Both resulting bounds are clamped
/// independently against the configured constraints, then ordered so the
/// range never inverts.
#[must_use]
pub fn zoom_continuous(
    range: ValueRange,
    factor: f64,
    focal_value: f64,
    constraints: RangeConstraints,
    orientation: Orientation,
) -> ValueRange {
    let width = range.width();
    let width_delta = width * (factor - 1.0);
    let min_percent = if width == 0.0 {
        0.5
    } else {
        (focal_value - range.min()) / width
    };
    let max_percent = 1.0 - min_percent;

    let new_min = clamp_min(
        constraints,
        orientation,
        range.min() + width_delta * min_percent,
    );
    let new_max = clamp_max(
        constraints,
        orientation,
        range.max() - width_delta * max_percent,
    );

    // ValueRange::new only fails on non-finite endpoints; inputs here are
    // finite products of finite ranges and factors.
    ValueRange::new(new_min, new_max).unwrap_or(range)
}

/// Translates a continuous range by a pixel-space delta, preserving width.
///
/// The delta is converted through the axis's own pixel-value mapping, so
/// logarithmic axes pan in log space. When the shifted window would cross a
/// configured bound, the whole window is shifted back to rest against that
/// bound instead of being truncated.
pub fn pan_continuous(
    axis: &Axis,
    pixel_delta: f64,
    constraints: RangeConstraints,
) -> PanZoomResult<ValueRange> {
    let range = axis.value_range().ok_or_else(|| {
        crate::error::PanZoomError::InvalidData(
            "continuous pan requires a continuous axis".to_owned(),
        )
    })?;

    let new_min = axis.value_at_pixel(axis.pixel_at_value(range.min())? - pixel_delta)?;
    let new_max = axis.value_at_pixel(axis.pixel_at_value(range.max())? - pixel_delta)?;

    let orientation = axis.orientation();
    let bound_min = constraints
        .range_min
        .for_orientation(orientation)
        .unwrap_or(new_min);
    let bound_max = constraints
        .range_max
        .for_orientation(orientation)
        .unwrap_or(new_max);

    if new_min >= bound_min && new_max <= bound_max {
        ValueRange::new(new_min, new_max)
    } else if new_min < bound_min {
        let correction = range.min() - bound_min;
        ValueRange::new(bound_min, range.max() - correction)
    } else {
        let correction = bound_max - range.max();
        ValueRange::new(range.min() + correction, bound_max)
    }
}

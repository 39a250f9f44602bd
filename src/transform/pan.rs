use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{Axis, DirectionMode};
use crate::error::{PanZoomError, PanZoomResult};
use crate::transform::constraints::RangeConstraints;
use crate::transform::registry::TransformRegistry;
use crate::transform::session::TransformSession;

/// One translational pan step in pixel space, constructed per gesture tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRequest {
    pub delta_horizontal: f64,
    pub delta_vertical: f64,
}

impl PanRequest {
    #[must_use]
    pub fn new(delta_horizontal: f64, delta_vertical: f64) -> Self {
        Self {
            delta_horizontal,
            delta_vertical,
        }
    }
}

/// Pan-engine knobs resolved from the active configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSettings {
    pub mode: DirectionMode,
    /// Divisor in the category step threshold; larger values step sooner.
    pub speed: f64,
    pub constraints: RangeConstraints,
}

/// Applies one pan step to every enabled axis.
///
/// Same iteration and skip rules as the zoom engine, with one addition: a
/// zero delta along an orientation is a no-op for axes of that orientation,
/// so category accumulators never see spurious zero-travel ticks.
///
/// Returns `true` when at least one axis range changed.
pub fn apply_pan(
    axes: &mut IndexMap<String, Axis>,
    registry: &TransformRegistry,
    request: PanRequest,
    settings: &PanSettings,
    session: &mut TransformSession,
) -> PanZoomResult<bool> {
    if !request.delta_horizontal.is_finite() || !request.delta_vertical.is_finite() {
        return Err(PanZoomError::InvalidData(
            "pan deltas must be finite".to_owned(),
        ));
    }

    let mut changed = false;
    for axis in axes.values_mut() {
        let orientation = axis.orientation();
        if !settings.mode.allows(orientation) {
            continue;
        }
        let delta = if orientation.is_horizontal() {
            request.delta_horizontal
        } else {
            request.delta_vertical
        };
        if delta == 0.0 {
            continue;
        }
        let Some(strategy) = registry.get(axis.kind()) else {
            debug!(axis = %axis.id(), kind = ?axis.kind(), "no pan strategy registered; axis skipped");
            continue;
        };

        let before = axis.range().clone();
        if let Err(err) = strategy.pan_axis(axis, delta, settings, session) {
            warn!(axis = %axis.id(), error = %err, "axis pan skipped after transform error");
            continue;
        }
        changed |= *axis.range() != before;
    }

    Ok(changed)
}

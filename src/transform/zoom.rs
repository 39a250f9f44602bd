use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{Axis, ChartArea, DirectionMode, PixelPoint};
use crate::error::{PanZoomError, PanZoomResult};
use crate::transform::constraints::RangeConstraints;
use crate::transform::registry::TransformRegistry;
use crate::transform::session::TransformSession;

/// One global zoom step, constructed per gesture tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    pub factor_horizontal: f64,
    pub factor_vertical: f64,
    /// Pixel point that keeps its value during the zoom; defaults to the
    /// chart-area center when absent.
    pub focal: Option<PixelPoint>,
    /// Direction scoping derived from gesture geometry (pinch finger
    /// separation). Honored only when the configured mode is `xy`.
    pub axis_mask: Option<DirectionMode>,
}

impl ZoomRequest {
    #[must_use]
    pub fn new(factor_horizontal: f64, factor_vertical: f64) -> Self {
        Self {
            factor_horizontal,
            factor_vertical,
            focal: None,
            axis_mask: None,
        }
    }

    /// Same factor in both directions.
    #[must_use]
    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor)
    }

    #[must_use]
    pub fn with_focal(mut self, focal: PixelPoint) -> Self {
        self.focal = Some(focal);
        self
    }

    #[must_use]
    pub fn with_axis_mask(mut self, mask: DirectionMode) -> Self {
        self.axis_mask = Some(mask);
        self
    }
}

/// Zoom-engine knobs resolved from the active configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    pub mode: DirectionMode,
    pub sensitivity: f64,
    pub constraints: RangeConstraints,
}

/// Applies one zoom step to every enabled axis.
///
/// Axes are classified by orientation and gated by the configured mode and
/// the request's axis mask; each remaining axis is transformed by the
/// strategy registered for its kind. Kinds without a strategy, and axes
/// whose transform fails, are skipped without aborting the sweep.
///
/// Returns `true` when at least one axis range changed, which is the signal
/// that a redraw should be requested.
pub fn apply_zoom(
    axes: &mut IndexMap<String, Axis>,
    registry: &TransformRegistry,
    request: ZoomRequest,
    settings: &ZoomSettings,
    session: &mut TransformSession,
    chart_area: ChartArea,
) -> PanZoomResult<bool> {
    if !request.factor_horizontal.is_finite()
        || request.factor_horizontal <= 0.0
        || !request.factor_vertical.is_finite()
        || request.factor_vertical <= 0.0
    {
        return Err(PanZoomError::InvalidData(
            "zoom factors must be finite and > 0".to_owned(),
        ));
    }
    if matches!(request.focal, Some(focal) if !focal.is_finite()) {
        return Err(PanZoomError::InvalidData(
            "zoom focal point must be finite".to_owned(),
        ));
    }

    let focal = request.focal.unwrap_or_else(|| chart_area.center());

    // A pinch-derived mask narrows the sweep only when both directions are
    // configured; in single-direction modes the mode alone decides.
    let effective_mask = match (settings.mode, request.axis_mask) {
        (DirectionMode::Xy, Some(mask)) => mask,
        _ => DirectionMode::Xy,
    };

    let mut changed = false;
    for axis in axes.values_mut() {
        let orientation = axis.orientation();
        if !settings.mode.allows(orientation) || !effective_mask.allows(orientation) {
            continue;
        }
        let Some(strategy) = registry.get(axis.kind()) else {
            debug!(axis = %axis.id(), kind = ?axis.kind(), "no zoom strategy registered; axis skipped");
            continue;
        };

        let factor = if orientation.is_horizontal() {
            request.factor_horizontal
        } else {
            request.factor_vertical
        };

        let before = axis.range().clone();
        if let Err(err) = strategy.zoom_axis(axis, factor, focal, settings, session) {
            warn!(axis = %axis.id(), error = %err, "axis zoom skipped after transform error");
            continue;
        }
        changed |= *axis.range() != before;
    }

    Ok(changed)
}

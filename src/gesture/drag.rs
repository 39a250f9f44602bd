use serde::{Deserialize, Serialize};

use crate::core::{ChartArea, DirectionMode, Orientation, PixelPoint};

/// Focal re-projection denominators below this magnitude fall back to the
/// rectangle start corner (a drag spanning the full chart extent).
const FOCAL_DENOMINATOR_EPSILON: f64 = 1e-9;

/// Selection rectangle in canvas pixels, exposed for host-drawn feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragRectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DragRectangle {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Result of a completed drag: one zoom step to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragZoomOutcome {
    pub factor_horizontal: f64,
    pub factor_vertical: f64,
    pub focal: PixelPoint,
}

/// Drag-rectangle zoom session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragZoom {
    #[default]
    Idle,
    Dragging {
        start: PixelPoint,
        current: PixelPoint,
    },
}

impl DragZoom {
    pub fn begin(&mut self, start: PixelPoint) {
        if start.is_finite() {
            *self = Self::Dragging {
                start,
                current: start,
            };
        }
    }

    /// Tracks the pointer while dragging; returns `true` when a drag is active.
    pub fn update(&mut self, position: PixelPoint) -> bool {
        match self {
            Self::Dragging { current, .. } if position.is_finite() => {
                *current = position;
                true
            }
            Self::Dragging { .. } => true,
            Self::Idle => false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Current selection rectangle for visual feedback.
    ///
    /// Directions excluded from the zoom mode span the full chart extent, so
    /// an `x`-only drag selects a full-height band.
    #[must_use]
    pub fn selection_rectangle(
        &self,
        chart_area: ChartArea,
        mode: DirectionMode,
    ) -> Option<DragRectangle> {
        let Self::Dragging { start, current } = *self else {
            return None;
        };

        let mut rectangle = DragRectangle {
            left: chart_area.left,
            top: chart_area.top,
            right: chart_area.right,
            bottom: chart_area.bottom,
        };
        if mode.allows(Orientation::Horizontal) {
            rectangle.left = start.x.min(current.x);
            rectangle.right = start.x.max(current.x);
        }
        if mode.allows(Orientation::Vertical) {
            rectangle.top = start.y.min(current.y);
            rectangle.bottom = start.y.max(current.y);
        }
        Some(rectangle)
    }

    /// Completes the drag at the release position and derives the zoom step.
    ///
    /// The factor per direction is `1 + (span - drag) / span`; the focal
    /// point re-projects the rectangle start corner so the selected region
    /// fills the chart after the zoom. A drag with no extent in either
    /// direction is discarded.
    pub fn finish(
        &mut self,
        release: PixelPoint,
        chart_area: ChartArea,
        mode: DirectionMode,
    ) -> Option<DragZoomOutcome> {
        let Self::Dragging { start, .. } = *self else {
            return None;
        };
        *self = Self::Idle;

        if !release.is_finite() {
            return None;
        }

        let start_x = start.x.min(release.x);
        let end_x = start.x.max(release.x);
        let start_y = start.y.min(release.y);
        let end_y = start.y.max(release.y);

        let drag_x = end_x - start_x;
        let drag_y = end_y - start_y;
        if drag_x <= 0.0 && drag_y <= 0.0 {
            return None;
        }

        let span_x = chart_area.width();
        let span_y = chart_area.height();
        let x_enabled = mode.allows(Orientation::Horizontal);
        let y_enabled = mode.allows(Orientation::Vertical);

        let factor_horizontal = if x_enabled && drag_x > 0.0 {
            1.0 + (span_x - drag_x) / span_x
        } else {
            1.0
        };
        let factor_vertical = if y_enabled && drag_y > 0.0 {
            1.0 + (span_y - drag_y) / span_y
        } else {
            1.0
        };

        let focal = PixelPoint::new(
            reproject(start_x, chart_area.left, drag_x, span_x),
            reproject(start_y, chart_area.top, drag_y, span_y),
        );

        Some(DragZoomOutcome {
            factor_horizontal,
            factor_vertical,
            focal,
        })
    }
}

fn reproject(start: f64, area_start: f64, drag_span: f64, chart_span: f64) -> f64 {
    let denominator = 1.0 - drag_span / chart_span;
    if denominator.abs() < FOCAL_DENOMINATOR_EPSILON {
        start
    } else {
        (start - area_start) / denominator + area_start
    }
}

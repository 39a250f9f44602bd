use indexmap::IndexMap;

use crate::core::{Axis, AxisKind, PixelPoint};
use crate::error::PanZoomResult;
use crate::transform::category::{pan_category, zoom_category};
use crate::transform::continuous::{pan_continuous, zoom_continuous};
use crate::transform::pan::PanSettings;
use crate::transform::session::TransformSession;
use crate::transform::zoom::ZoomSettings;

/// Per-axis-kind range transformation strategy.
///
/// Implementations compute and write back the post-gesture range for a single
/// axis. The engines look strategies up by axis kind and silently skip axes
/// whose kind has no registration.
pub trait RangeTransform {
    fn zoom_axis(
        &self,
        axis: &mut Axis,
        factor: f64,
        focal: PixelPoint,
        settings: &ZoomSettings,
        session: &mut TransformSession,
    ) -> PanZoomResult<()>;

    fn pan_axis(
        &self,
        axis: &mut Axis,
        pixel_delta: f64,
        settings: &PanSettings,
        session: &mut TransformSession,
    ) -> PanZoomResult<()>;
}

/// Strategy for linear, logarithmic and time axes.
///
/// Time values are plain numeric timestamps and logarithmic mapping lives on
/// the axis itself, so all three kinds share the continuous math.
#[derive(Debug, Default)]
pub struct ContinuousTransform;

impl RangeTransform for ContinuousTransform {
    fn zoom_axis(
        &self,
        axis: &mut Axis,
        factor: f64,
        focal: PixelPoint,
        settings: &ZoomSettings,
        _session: &mut TransformSession,
    ) -> PanZoomResult<()> {
        let Some(range) = axis.value_range() else {
            return Ok(());
        };
        let focal_coord = if axis.orientation().is_horizontal() {
            focal.x
        } else {
            focal.y
        };
        let focal_value = axis.value_at_pixel(focal_coord)?;
        let next = zoom_continuous(
            range,
            factor,
            focal_value,
            settings.constraints,
            axis.orientation(),
        );
        axis.set_value_range(next.min(), next.max())
    }

    fn pan_axis(
        &self,
        axis: &mut Axis,
        pixel_delta: f64,
        settings: &PanSettings,
        _session: &mut TransformSession,
    ) -> PanZoomResult<()> {
        let next = pan_continuous(axis, pixel_delta, settings.constraints)?;
        axis.set_value_range(next.min(), next.max())
    }
}

/// Strategy for discrete label-window axes.
#[derive(Debug, Default)]
pub struct CategoryTransform;

impl RangeTransform for CategoryTransform {
    fn zoom_axis(
        &self,
        axis: &mut Axis,
        factor: f64,
        focal: PixelPoint,
        settings: &ZoomSettings,
        session: &mut TransformSession,
    ) -> PanZoomResult<()> {
        let (Some(window), Some(last)) = (axis.index_window(), axis.last_label_index()) else {
            return Ok(());
        };
        let focal_coord = if axis.orientation().is_horizontal() {
            focal.x
        } else {
            focal.y
        };
        let stepped = zoom_category(
            window,
            last,
            factor,
            focal_coord,
            axis.pixel_midpoint(),
            settings.sensitivity,
            &mut session.zoom_cumulative_delta,
        );
        match stepped {
            Some(next) => axis.set_index_window(next),
            None => Ok(()),
        }
    }

    fn pan_axis(
        &self,
        axis: &mut Axis,
        pixel_delta: f64,
        settings: &PanSettings,
        session: &mut TransformSession,
    ) -> PanZoomResult<()> {
        let (Some(window), Some(last)) = (axis.index_window(), axis.last_label_index()) else {
            return Ok(());
        };
        let stepped = pan_category(
            window,
            last,
            pixel_delta,
            axis.pixel_span(),
            settings.speed,
            &mut session.pan_cumulative_delta,
        );
        match stepped {
            Some(next) => axis.set_index_window(next),
            None => Ok(()),
        }
    }
}

/// Lookup table from axis kind to transform strategy.
///
/// Pre-registered for every built-in kind; hosts may re-register a kind to
/// override its behavior or remove one to opt an axis family out of
/// pan/zoom entirely.
pub struct TransformRegistry {
    strategies: IndexMap<AxisKind, Box<dyn RangeTransform>>,
}

impl TransformRegistry {
    #[must_use]
    pub fn with_default_strategies() -> Self {
        let mut registry = Self {
            strategies: IndexMap::new(),
        };
        registry.register(AxisKind::Linear, Box::new(ContinuousTransform));
        registry.register(AxisKind::Logarithmic, Box::new(ContinuousTransform));
        registry.register(AxisKind::Time, Box::new(ContinuousTransform));
        registry.register(AxisKind::Category, Box::new(CategoryTransform));
        registry
    }

    pub fn register(&mut self, kind: AxisKind, strategy: Box<dyn RangeTransform>) {
        self.strategies.insert(kind, strategy);
    }

    pub fn unregister(&mut self, kind: AxisKind) -> Option<Box<dyn RangeTransform>> {
        self.strategies.shift_remove(&kind)
    }

    #[must_use]
    pub fn get(&self, kind: AxisKind) -> Option<&dyn RangeTransform> {
        self.strategies.get(&kind).map(Box::as_ref)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

impl std::fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("kinds", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}

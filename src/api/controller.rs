use indexmap::IndexMap;
use tracing::warn;

use crate::core::{Axis, AxisRange, ChartArea};
use crate::error::{PanZoomError, PanZoomResult};
use crate::extensions::{GestureContext, GestureEvent, GestureObserver};
use crate::gesture::{
    ClickInput, DragRectangle, DragZoom, PanUpdate, PinchUpdate, PinchZoom, PointerButton,
    PointerInput, TouchPan, WheelInput, WheelZoom,
};
use crate::host::RedrawHost;
use crate::transform::{
    PanRequest, TransformRegistry, TransformSession, ZoomRequest, apply_pan, apply_zoom,
};

use super::{ListenerBindings, PanZoomConfig};

/// Pan/zoom interaction controller for one chart instance.
///
/// Owns the axis collection, the per-gesture session state and the
/// transform accumulators; translates raw host events into zoom/pan engine
/// calls and asks the host to redraw when a range actually changed.
///
/// All raw-event entry points are infallible: degenerate input and
/// configuration absence degrade to no-ops, and internal transform errors
/// are logged and swallowed so an event handler can never poison teardown.
pub struct PanZoomController<R: RedrawHost> {
    host: R,
    chart_area: ChartArea,
    config: PanZoomConfig,
    axes: IndexMap<String, Axis>,
    registry: TransformRegistry,
    session: TransformSession,
    wheel: WheelZoom,
    drag: DragZoom,
    pinch: PinchZoom,
    touch_pan: TouchPan,
    mouse_panning: bool,
    original_ranges: IndexMap<String, AxisRange>,
    observers: Vec<Box<dyn GestureObserver>>,
    attached: bool,
    bindings: ListenerBindings,
}

impl<R: RedrawHost> PanZoomController<R> {
    pub fn new(host: R, chart_area: ChartArea, config: PanZoomConfig) -> PanZoomResult<Self> {
        if !chart_area.is_valid() {
            return Err(PanZoomError::InvalidChartArea {
                left: chart_area.left,
                right: chart_area.right,
                top: chart_area.top,
                bottom: chart_area.bottom,
            });
        }
        let config = config.validate()?;
        Ok(Self {
            host,
            chart_area,
            config,
            axes: IndexMap::new(),
            registry: TransformRegistry::with_default_strategies(),
            session: TransformSession::default(),
            wheel: WheelZoom::default(),
            drag: DragZoom::default(),
            pinch: PinchZoom::default(),
            touch_pan: TouchPan::default(),
            mouse_panning: false,
            original_ranges: IndexMap::new(),
            observers: Vec::new(),
            attached: false,
            bindings: ListenerBindings::default(),
        })
    }

    // ---- axis management -------------------------------------------------

    /// Registers or replaces an axis under its id.
    pub fn insert_axis(&mut self, axis: Axis) {
        self.axes.insert(axis.id().to_owned(), axis);
    }

    pub fn remove_axis(&mut self, id: &str) -> Option<Axis> {
        self.original_ranges.shift_remove(id);
        self.axes.shift_remove(id)
    }

    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&Axis> {
        self.axes.get(id)
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    // ---- configuration and lifecycle ------------------------------------

    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Replaces the configuration, re-resolving listener bindings when attached.
    pub fn set_config(&mut self, config: PanZoomConfig) -> PanZoomResult<()> {
        self.config = config.validate()?;
        if self.attached {
            self.bindings = ListenerBindings::resolve(&self.config);
        }
        Ok(())
    }

    #[must_use]
    pub fn chart_area(&self) -> ChartArea {
        self.chart_area
    }

    pub fn set_chart_area(&mut self, chart_area: ChartArea) -> PanZoomResult<()> {
        if !chart_area.is_valid() {
            return Err(PanZoomError::InvalidChartArea {
                left: chart_area.left,
                right: chart_area.right,
                top: chart_area.top,
                bottom: chart_area.bottom,
            });
        }
        self.chart_area = chart_area;
        Ok(())
    }

    /// Starts routing host events; returns the listener set the host must install.
    pub fn attach(&mut self) -> ListenerBindings {
        self.attached = true;
        self.bindings = ListenerBindings::resolve(&self.config);
        self.bindings
    }

    /// Stops routing host events and resets every gesture session.
    ///
    /// Safe to call repeatedly and mid-gesture; teardown must always succeed.
    pub fn detach(&mut self) {
        self.attached = false;
        self.bindings = ListenerBindings::default();
        self.reset_gesture_sessions();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn bindings(&self) -> ListenerBindings {
        self.bindings
    }

    #[must_use]
    pub fn host(&self) -> &R {
        &self.host
    }

    pub fn register_observer(&mut self, observer: Box<dyn GestureObserver>) {
        self.observers.push(observer);
    }

    pub fn remove_observer(&mut self, id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        self.observers.len() != before
    }

    pub fn registry_mut(&mut self) -> &mut TransformRegistry {
        &mut self.registry
    }

    // ---- engine operations ----------------------------------------------

    /// Applies one zoom step across all enabled axes.
    ///
    /// Returns `true` when at least one axis changed; a redraw is requested
    /// from the host in that case.
    pub fn apply_zoom(&mut self, request: ZoomRequest) -> PanZoomResult<bool> {
        if !self.config.zoom.enabled {
            return Ok(false);
        }
        self.store_original_ranges();
        let settings = self.config.zoom_settings();
        let changed = apply_zoom(
            &mut self.axes,
            &self.registry,
            request,
            &settings,
            &mut self.session,
            self.chart_area,
        )?;
        if changed {
            self.host.request_redraw();
        }
        self.emit(GestureEvent::ZoomApplied { changed });
        Ok(changed)
    }

    /// Applies one pan step across all enabled axes.
    pub fn apply_pan(&mut self, request: PanRequest) -> PanZoomResult<bool> {
        self.store_original_ranges();
        if !self.config.pan.enabled {
            return Ok(false);
        }
        let settings = self.config.pan_settings();
        let changed = apply_pan(
            &mut self.axes,
            &self.registry,
            request,
            &settings,
            &mut self.session,
        )?;
        if changed {
            self.host.request_redraw();
        }
        self.emit(GestureEvent::PanApplied { changed });
        Ok(changed)
    }

    /// Restores one axis to the range captured before its first transform.
    pub fn reset_axis(&mut self, id: &str) -> PanZoomResult<bool> {
        let Some(snapshot) = self.original_ranges.get(id).cloned() else {
            return Ok(false);
        };
        let axis = self
            .axes
            .get_mut(id)
            .ok_or_else(|| PanZoomError::InvalidData(format!("unknown axis: {id}")))?;
        if *axis.range() == snapshot {
            return Ok(false);
        }
        axis.restore_range(snapshot)?;
        self.host.request_redraw();
        Ok(true)
    }

    /// Restores every axis to its originally captured range.
    pub fn reset_zoom(&mut self) {
        self.store_original_ranges();
        let mut changed = false;
        for (id, snapshot) in self.original_ranges.clone() {
            let Some(axis) = self.axes.get_mut(&id) else {
                continue;
            };
            if *axis.range() == snapshot {
                continue;
            }
            if let Err(err) = axis.restore_range(snapshot) {
                warn!(axis = %id, error = %err, "axis skipped during range reset");
                continue;
            }
            changed = true;
        }
        self.session = TransformSession::default();
        if changed {
            self.host.request_redraw();
        }
        self.emit(GestureEvent::RangesReset);
    }

    // ---- raw host events -------------------------------------------------

    /// Handles one wheel tick. Returns `true` when the host should call
    /// `preventDefault` (stop page scrolling).
    pub fn on_wheel(&mut self, input: WheelInput) -> bool {
        if !self.attached || !self.bindings.wheel {
            return false;
        }
        let Some(factor) = self.wheel.on_wheel(input, self.config.zoom.speed) else {
            return false;
        };
        let request = ZoomRequest::uniform(factor).with_focal(input.position);
        self.zoom_silently(request);
        input.cancelable
    }

    /// Handles mouse button press: primary starts a mouse pan, any other
    /// button arms the drag-zoom rectangle.
    pub fn on_mouse_down(&mut self, input: PointerInput) -> bool {
        if !self.attached || !self.bindings.mouse_down {
            return false;
        }
        if input.button == PointerButton::Primary {
            self.mouse_panning = true;
        } else if self.config.drag_zoom_enabled() {
            self.drag.begin(input.position);
        } else {
            return false;
        }
        true
    }

    /// Handles mouse motion for both the mouse pan and the drag rectangle.
    pub fn on_mouse_move(&mut self, input: PointerInput) -> bool {
        if !self.attached || !self.bindings.mouse_move {
            return false;
        }
        if self.mouse_panning {
            if input.movement.is_finite() {
                self.pan_silently(PanRequest::new(input.movement.x, input.movement.y));
            }
            return true;
        }
        self.drag.update(input.position)
    }

    /// Handles mouse release: ends a mouse pan or completes a drag zoom.
    pub fn on_mouse_up(&mut self, input: PointerInput) -> bool {
        if !self.attached || !self.bindings.mouse_up {
            return false;
        }
        if input.button == PointerButton::Primary {
            let was_panning = self.mouse_panning;
            self.mouse_panning = false;
            return was_panning;
        }

        let outcome = self
            .drag
            .finish(input.position, self.chart_area, self.config.zoom.mode);
        let Some(outcome) = outcome else {
            return false;
        };
        let request = ZoomRequest::new(outcome.factor_horizontal, outcome.factor_vertical)
            .with_focal(outcome.focal);
        self.zoom_silently(request);
        self.emit(GestureEvent::ZoomCompleted);
        true
    }

    /// Current drag-selection rectangle for host-drawn feedback.
    #[must_use]
    pub fn drag_selection(&self) -> Option<DragRectangle> {
        self.drag
            .selection_rectangle(self.chart_area, self.config.zoom.mode)
    }

    // ---- pinch recognizer callbacks --------------------------------------

    pub fn on_pinch_start(&mut self) {
        if !self.attached {
            return;
        }
        self.pinch.begin();
    }

    pub fn on_pinch_update(&mut self, update: &PinchUpdate) {
        if !self.attached || !self.config.zoom.enabled {
            return;
        }
        let Some(tick) = self.pinch.on_update(update) else {
            return;
        };
        let request = ZoomRequest::uniform(tick.factor)
            .with_focal(tick.center)
            .with_axis_mask(tick.axis_mask);
        self.zoom_silently(request);
    }

    /// Applies the final pinch sample, then clears the session.
    pub fn on_pinch_end(&mut self, update: &PinchUpdate) {
        if !self.attached {
            return;
        }
        self.on_pinch_update(update);
        self.pinch.end();
        self.session.reset_zoom_accumulator();
        self.emit(GestureEvent::ZoomCompleted);
    }

    /// Abnormal pinch termination: same state reset, no completion event.
    pub fn on_pinch_cancel(&mut self) {
        self.pinch.end();
        self.session.reset_zoom_accumulator();
    }

    // ---- touch-pan recognizer callbacks ----------------------------------

    pub fn on_touch_pan_start(&mut self, update: &PanUpdate) {
        if !self.attached {
            return;
        }
        self.touch_pan.begin();
        self.on_touch_pan_update(update);
    }

    pub fn on_touch_pan_update(&mut self, update: &PanUpdate) {
        if !self.attached {
            return;
        }
        let Some(delta) = self.touch_pan.on_update(update) else {
            return;
        };
        self.pan_silently(PanRequest::new(delta.x, delta.y));
    }

    pub fn on_touch_pan_end(&mut self, now_ms: f64) {
        if !self.attached {
            return;
        }
        self.touch_pan.end(now_ms);
        self.session.reset_pan_accumulator();
        self.emit(GestureEvent::PanCompleted);
    }

    /// Abnormal pan termination: full reset, no completion event.
    pub fn on_touch_pan_cancel(&mut self) {
        self.touch_pan.cancel();
        self.session.reset_pan_accumulator();
    }

    /// Returns `true` when the click is a pan artifact the host should swallow.
    pub fn on_click(&mut self, input: ClickInput) -> bool {
        if !self.attached || !self.bindings.click {
            return false;
        }
        input.cancelable && self.touch_pan.should_suppress_click(input.timestamp_ms)
    }

    /// Drives deferred work: wheel-settled detection and the post-pan click
    /// suppression grace period. Hosts call this from their timer tick.
    pub fn poll_timers(&mut self, now_ms: f64) {
        if !now_ms.is_finite() {
            return;
        }
        if self.wheel.poll_complete(now_ms) {
            self.emit(GestureEvent::ZoomCompleted);
        }
        self.touch_pan.poll_grace(now_ms);
    }

    // ---- internals -------------------------------------------------------

    fn zoom_silently(&mut self, request: ZoomRequest) {
        if let Err(err) = self.apply_zoom(request) {
            warn!(error = %err, "zoom step dropped");
        }
    }

    fn pan_silently(&mut self, request: PanRequest) {
        if let Err(err) = self.apply_pan(request) {
            warn!(error = %err, "pan step dropped");
        }
    }

    /// Captures each axis's range the first time it is seen and prunes
    /// snapshots of axes that no longer exist.
    fn store_original_ranges(&mut self) {
        for (id, axis) in &self.axes {
            if !self.original_ranges.contains_key(id) {
                self.original_ranges
                    .insert(id.clone(), axis.range().clone());
            }
        }
        let live = &self.axes;
        self.original_ranges.retain(|id, _| live.contains_key(id));
    }

    fn reset_gesture_sessions(&mut self) {
        self.wheel.reset();
        self.drag.reset();
        self.pinch.end();
        self.touch_pan.cancel();
        self.mouse_panning = false;
        self.session = TransformSession::default();
    }

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            chart_area: self.chart_area,
            axis_count: self.axes.len(),
            attached: self.attached,
        }
    }

    fn emit(&mut self, event: GestureEvent) {
        let context = self.gesture_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}

impl<R: RedrawHost + std::fmt::Debug> std::fmt::Debug for PanZoomController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanZoomController")
            .field("host", &self.host)
            .field("chart_area", &self.chart_area)
            .field("axis_count", &self.axes.len())
            .field("attached", &self.attached)
            .finish()
    }
}

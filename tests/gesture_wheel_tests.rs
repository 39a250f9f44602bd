use std::cell::RefCell;
use std::rc::Rc;

use chart_panzoom::api::{PanZoomConfig, PanZoomController};
use chart_panzoom::core::{Axis, AxisKind, ChartArea, Orientation, PixelPoint, ValueRange};
use chart_panzoom::extensions::{GestureContext, GestureEvent, GestureObserver};
use chart_panzoom::gesture::WheelInput;
use chart_panzoom::host::NullRedrawHost;

struct RecordingObserver {
    events: Rc<RefCell<Vec<GestureEvent>>>,
}

impl GestureObserver for RecordingObserver {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: GestureEvent, _context: GestureContext) {
        self.events.borrow_mut().push(event);
    }
}

fn build_controller() -> (PanZoomController<NullRedrawHost>, Rc<RefCell<Vec<GestureEvent>>>) {
    let area = ChartArea::new(0.0, 1000.0, 0.0, 500.0).expect("valid chart area");
    let mut controller =
        PanZoomController::new(NullRedrawHost::default(), area, PanZoomConfig::default())
            .expect("controller init");
    controller.insert_axis(
        Axis::continuous(
            "x",
            AxisKind::Linear,
            Orientation::Horizontal,
            0.0,
            1000.0,
            0.0,
            100.0,
        )
        .expect("valid axis"),
    );
    let events = Rc::new(RefCell::new(Vec::new()));
    controller.register_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));
    controller.attach();
    (controller, events)
}

fn wheel(delta_y: f64, x: f64, timestamp_ms: f64) -> WheelInput {
    WheelInput {
        position: PixelPoint::new(x, 100.0),
        delta_y,
        timestamp_ms,
        cancelable: true,
    }
}

fn x_range(controller: &PanZoomController<NullRedrawHost>) -> ValueRange {
    controller
        .axis("x")
        .and_then(Axis::value_range)
        .expect("continuous axis")
}

#[test]
fn scroll_away_narrows_range_around_pointer() {
    let (mut controller, _events) = build_controller();

    let consumed = controller.on_wheel(wheel(-120.0, 250.0, 0.0));

    assert!(consumed);
    // Default speed 0.1 -> factor 1.1 with the pointer value at 25.
    let range = x_range(&controller);
    assert!((range.min() - 2.5).abs() <= 1e-9);
    assert!((range.max() - 92.5).abs() <= 1e-9);
    assert_eq!(controller.host().redraw_count, 1);
}

#[test]
fn scroll_toward_widens_range_around_pointer() {
    let (mut controller, _events) = build_controller();

    controller.on_wheel(wheel(120.0, 250.0, 0.0));

    let range = x_range(&controller);
    assert!((range.min() - (-2.5)).abs() <= 1e-9);
    assert!((range.max() - 107.5).abs() <= 1e-9);
}

#[test]
fn zoom_completes_once_after_wheel_burst_settles() {
    let (mut controller, events) = build_controller();

    controller.on_wheel(wheel(-120.0, 250.0, 0.0));
    controller.on_wheel(wheel(-120.0, 250.0, 100.0));

    controller.poll_timers(300.0);
    let completed = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, GestureEvent::ZoomCompleted))
        .count();
    assert_eq!(completed, 0, "second tick re-armed the debounce");

    controller.poll_timers(360.0);
    controller.poll_timers(400.0);
    let completed = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, GestureEvent::ZoomCompleted))
        .count();
    assert_eq!(completed, 1);
}

#[test]
fn each_tick_notifies_observers() {
    let (mut controller, events) = build_controller();

    controller.on_wheel(wheel(-120.0, 250.0, 0.0));
    controller.on_wheel(wheel(-120.0, 250.0, 50.0));

    let applied = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, GestureEvent::ZoomApplied { changed: true }))
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn detached_controller_ignores_wheel() {
    let (mut controller, _events) = build_controller();
    controller.detach();

    let consumed = controller.on_wheel(wheel(-120.0, 250.0, 0.0));

    assert!(!consumed);
    assert_eq!(x_range(&controller).min(), 0.0);
    assert_eq!(x_range(&controller).max(), 100.0);
}

#[test]
fn non_cancelable_wheel_still_zooms_without_consuming() {
    let (mut controller, _events) = build_controller();

    let mut input = wheel(-120.0, 250.0, 0.0);
    input.cancelable = false;

    assert!(!controller.on_wheel(input));
    assert!((x_range(&controller).min() - 2.5).abs() <= 1e-9);
}

#[test]
fn degenerate_wheel_input_is_ignored() {
    let (mut controller, _events) = build_controller();

    controller.on_wheel(wheel(f64::NAN, 250.0, 0.0));

    assert_eq!(x_range(&controller).min(), 0.0);
    assert_eq!(x_range(&controller).max(), 100.0);
}

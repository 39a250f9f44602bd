use chart_panzoom::PanZoomError;
use chart_panzoom::core::{
    Axis, AxisKind, DirectionMode, IndexWindow, Orientation, ValueRange,
};
use chart_panzoom::transform::{
    PanRequest, PanSettings, RangeConstraints, TransformRegistry, TransformSession, apply_pan,
};
use indexmap::IndexMap;

fn settings(mode: DirectionMode) -> PanSettings {
    PanSettings {
        mode,
        speed: 20.0,
        constraints: RangeConstraints::default(),
    }
}

fn xy_axes() -> IndexMap<String, Axis> {
    let mut axes = IndexMap::new();
    axes.insert(
        "x".to_owned(),
        Axis::continuous(
            "x",
            AxisKind::Linear,
            Orientation::Horizontal,
            0.0,
            1000.0,
            0.0,
            100.0,
        )
        .expect("valid x axis"),
    );
    axes.insert(
        "y".to_owned(),
        Axis::continuous(
            "y",
            AxisKind::Linear,
            Orientation::Vertical,
            500.0,
            0.0,
            0.0,
            50.0,
        )
        .expect("valid y axis"),
    );
    axes
}

fn value_range(axes: &IndexMap<String, Axis>, id: &str) -> ValueRange {
    axes.get(id)
        .and_then(Axis::value_range)
        .expect("continuous axis")
}

#[test]
fn pan_translates_each_enabled_orientation() {
    let mut axes = xy_axes();
    let mut session = TransformSession::default();

    let changed = apply_pan(
        &mut axes,
        &TransformRegistry::with_default_strategies(),
        PanRequest::new(100.0, -50.0),
        &settings(DirectionMode::Xy),
        &mut session,
    )
    .expect("pan");

    assert!(changed);
    let x = value_range(&axes, "x");
    assert!((x.min() - (-10.0)).abs() <= 1e-9);
    assert!((x.max() - 90.0).abs() <= 1e-9);

    // Vertical pixel geometry runs bottom-to-top, so -50 px shifts down.
    let y = value_range(&axes, "y");
    assert!((y.min() - (-5.0)).abs() <= 1e-9);
    assert!((y.max() - 45.0).abs() <= 1e-9);
}

#[test]
fn mode_gates_orientations() {
    let mut axes = xy_axes();
    let mut session = TransformSession::default();

    apply_pan(
        &mut axes,
        &TransformRegistry::with_default_strategies(),
        PanRequest::new(100.0, 100.0),
        &settings(DirectionMode::Y),
        &mut session,
    )
    .expect("pan");

    assert_eq!(value_range(&axes, "x").min(), 0.0);
    assert_eq!(value_range(&axes, "x").max(), 100.0);
    assert!(value_range(&axes, "y").min() != 0.0);
}

#[test]
fn zero_delta_is_noop_and_never_touches_category_accumulator() {
    let mut axes = IndexMap::new();
    axes.insert(
        "x".to_owned(),
        Axis::category(
            "x",
            Orientation::Horizontal,
            0.0,
            400.0,
            (0..10).map(|i| format!("label-{i}")).collect(),
            IndexWindow::new(2, 5).expect("valid window"),
        )
        .expect("valid category axis"),
    );
    let mut session = TransformSession::default();
    session.pan_cumulative_delta = 4.0;

    let changed = apply_pan(
        &mut axes,
        &TransformRegistry::with_default_strategies(),
        PanRequest::new(0.0, 25.0),
        &settings(DirectionMode::Xy),
        &mut session,
    )
    .expect("pan");

    assert!(!changed);
    // The sub-threshold residue survives because no tick reached the axis.
    assert!((session.pan_cumulative_delta - 4.0).abs() <= 1e-12);
}

#[test]
fn category_axis_steps_through_engine_when_travel_accumulates() {
    let mut axes = IndexMap::new();
    axes.insert(
        "x".to_owned(),
        Axis::category(
            "x",
            Orientation::Horizontal,
            0.0,
            400.0,
            (0..10).map(|i| format!("label-{i}")).collect(),
            IndexWindow::new(2, 5).expect("valid window"),
        )
        .expect("valid category axis"),
    );
    let registry = TransformRegistry::with_default_strategies();
    let mut session = TransformSession::default();

    let first = apply_pan(
        &mut axes,
        &registry,
        PanRequest::new(3.0, 0.0),
        &settings(DirectionMode::Xy),
        &mut session,
    )
    .expect("pan");
    assert!(!first);

    let second = apply_pan(
        &mut axes,
        &registry,
        PanRequest::new(3.0, 0.0),
        &settings(DirectionMode::Xy),
        &mut session,
    )
    .expect("pan");
    assert!(second);
    assert_eq!(
        axes.get("x").and_then(Axis::index_window),
        Some(IndexWindow::new(1, 4).expect("valid window"))
    );
}

#[test]
fn rejects_non_finite_deltas() {
    let mut axes = xy_axes();
    let mut session = TransformSession::default();

    let err = apply_pan(
        &mut axes,
        &TransformRegistry::with_default_strategies(),
        PanRequest::new(f64::NAN, 0.0),
        &settings(DirectionMode::Xy),
        &mut session,
    )
    .expect_err("nan delta must fail");

    assert!(matches!(err, PanZoomError::InvalidData(_)));
}

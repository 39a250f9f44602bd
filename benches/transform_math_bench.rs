use chart_panzoom::core::{Axis, AxisKind, ChartArea, DirectionMode, Orientation, PixelPoint, ValueRange};
use chart_panzoom::transform::continuous::{pan_continuous, zoom_continuous};
use chart_panzoom::transform::{
    RangeConstraints, TransformRegistry, TransformSession, ZoomRequest, ZoomSettings, apply_zoom,
};
use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use std::hint::black_box;

fn bench_zoom_continuous(c: &mut Criterion) {
    let range = ValueRange::new(0.0, 10_000.0).expect("valid range");

    c.bench_function("zoom_continuous", |b| {
        b.iter(|| {
            zoom_continuous(
                black_box(range),
                black_box(1.1),
                black_box(4_321.0),
                black_box(RangeConstraints::default()),
                Orientation::Horizontal,
            )
        })
    });
}

fn bench_pan_continuous(c: &mut Criterion) {
    let axis = Axis::continuous(
        "x",
        AxisKind::Linear,
        Orientation::Horizontal,
        0.0,
        1_920.0,
        0.0,
        10_000.0,
    )
    .expect("valid axis");

    c.bench_function("pan_continuous", |b| {
        b.iter(|| {
            pan_continuous(
                black_box(&axis),
                black_box(12.5),
                black_box(RangeConstraints::default()),
            )
            .expect("pan should succeed")
        })
    });
}

fn bench_apply_zoom_four_axes(c: &mut Criterion) {
    let mut axes = IndexMap::new();
    for (index, orientation) in [
        Orientation::Horizontal,
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Vertical,
    ]
    .into_iter()
    .enumerate()
    {
        let id = format!("axis-{index}");
        let (pixel_start, pixel_end) = if orientation.is_horizontal() {
            (0.0, 1_920.0)
        } else {
            (1_080.0, 0.0)
        };
        axes.insert(
            id.clone(),
            Axis::continuous(
                id,
                AxisKind::Linear,
                orientation,
                pixel_start,
                pixel_end,
                0.0,
                10_000.0,
            )
            .expect("valid generated axis"),
        );
    }

    let registry = TransformRegistry::with_default_strategies();
    let settings = ZoomSettings {
        mode: DirectionMode::Xy,
        sensitivity: 3.0,
        constraints: RangeConstraints::default(),
    };
    let chart_area = ChartArea::new(0.0, 1_920.0, 0.0, 1_080.0).expect("valid chart area");
    let mut session = TransformSession::default();

    c.bench_function("apply_zoom_four_axes", |b| {
        b.iter(|| {
            apply_zoom(
                black_box(&mut axes),
                black_box(&registry),
                black_box(ZoomRequest::uniform(1.001).with_focal(PixelPoint::new(960.0, 540.0))),
                black_box(&settings),
                &mut session,
                black_box(chart_area),
            )
            .expect("zoom should succeed")
        })
    });
}

criterion_group!(
    benches,
    bench_zoom_continuous,
    bench_pan_continuous,
    bench_apply_zoom_four_axes
);
criterion_main!(benches);

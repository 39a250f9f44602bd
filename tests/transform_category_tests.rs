use chart_panzoom::core::IndexWindow;
use chart_panzoom::transform::category::{pan_category, zoom_category};

fn window(start: usize, end: usize) -> IndexWindow {
    IndexWindow::new(start, end).expect("valid window")
}

#[test]
fn zoom_steps_only_after_accumulator_exceeds_sensitivity() {
    let last = 9;
    let sensitivity = 3.0;
    let mut accumulator = 0.0;
    let current = window(2, 5);

    // Three zoom-in ticks on the outward side of the midpoint: no change.
    for tick in 1..=3 {
        let stepped = zoom_category(
            current,
            last,
            1.5,
            300.0,
            200.0,
            sensitivity,
            &mut accumulator,
        );
        assert!(stepped.is_none(), "tick {tick} must stay below threshold");
        assert!((accumulator - f64::from(tick)).abs() <= 1e-12);
    }

    // Fourth tick crosses the threshold: exactly one index step, reset.
    let stepped = zoom_category(
        current,
        last,
        1.5,
        300.0,
        200.0,
        sensitivity,
        &mut accumulator,
    )
    .expect("fourth tick steps the window");

    assert_eq!(stepped, window(3, 5));
    assert_eq!(accumulator, 0.0);
}

#[test]
fn zoom_in_on_centerward_side_shrinks_from_end() {
    let mut accumulator = 0.0;

    let stepped = zoom_category(window(2, 5), 9, 1.5, 100.0, 200.0, 0.0, &mut accumulator)
        .expect("tick above zero sensitivity steps immediately");

    assert_eq!(stepped, window(2, 4));
}

#[test]
fn zoom_out_grows_away_from_focal_side() {
    let mut accumulator = 0.0;

    let stepped = zoom_category(window(2, 5), 9, 0.5, 300.0, 200.0, 0.0, &mut accumulator)
        .expect("zoom-out tick");

    assert_eq!(stepped, window(1, 5));

    let stepped = zoom_category(window(2, 5), 9, 0.5, 100.0, 200.0, 0.0, &mut accumulator)
        .expect("zoom-out tick");

    assert_eq!(stepped, window(2, 6));
}

#[test]
fn zoom_out_pinned_at_start_grows_from_end() {
    let mut accumulator = 0.0;

    let stepped = zoom_category(window(0, 5), 9, 0.5, 300.0, 200.0, 0.0, &mut accumulator)
        .expect("zoom-out tick");

    assert_eq!(stepped, window(0, 6));
}

#[test]
fn zoom_out_pinned_at_end_grows_from_start() {
    let mut accumulator = 0.0;

    let stepped = zoom_category(window(4, 9), 9, 0.5, 100.0, 200.0, 0.0, &mut accumulator)
        .expect("zoom-out tick");

    assert_eq!(stepped, window(3, 9));
}

#[test]
fn zoom_in_never_collapses_below_one_label() {
    let mut accumulator = 0.0;

    let stepped = zoom_category(window(4, 4), 9, 1.5, 300.0, 200.0, 0.0, &mut accumulator)
        .expect("tick still resolves");

    assert_eq!(stepped, window(4, 4));
    assert_eq!(accumulator, 0.0);
}

#[test]
fn zoom_window_stays_inside_label_bounds() {
    let last = 4;
    let mut accumulator = 0.0;
    let mut current = window(0, last);

    for _ in 0..20 {
        if let Some(next) = zoom_category(current, last, 0.5, 300.0, 200.0, 0.0, &mut accumulator) {
            current = next;
        }
        assert!(current.end() <= last);
    }
}

#[test]
fn pan_accumulates_pixels_until_one_step_of_travel() {
    let last = 9;
    let mut accumulator = 0.0;
    let current = window(2, 5);

    // Four visible ticks over 400 px at speed 20 -> step threshold 5 px.
    let unstepped = pan_category(current, last, 3.0, 400.0, 20.0, &mut accumulator)
        .expect("window always resolves");
    assert_eq!(unstepped, current);
    assert!((accumulator - 3.0).abs() <= 1e-12);

    let stepped = pan_category(current, last, 3.0, 400.0, 20.0, &mut accumulator)
        .expect("window always resolves");
    assert_eq!(stepped, window(1, 4));
    assert_eq!(accumulator, 0.0);
}

#[test]
fn pan_with_negative_travel_steps_forward() {
    let last = 9;
    let mut accumulator = 0.0;

    let stepped = pan_category(window(2, 5), last, -6.0, 400.0, 20.0, &mut accumulator)
        .expect("window always resolves");

    assert_eq!(stepped, window(3, 6));
    assert_eq!(accumulator, 0.0);
}

#[test]
fn pan_at_sequence_end_keeps_accumulator_and_window() {
    let last = 9;
    let mut accumulator = 0.0;

    let stepped = pan_category(window(6, 9), last, -6.0, 400.0, 20.0, &mut accumulator)
        .expect("window always resolves");

    assert_eq!(stepped, window(6, 9));
    // No step happened, so the residue is kept for the next tick.
    assert!((accumulator - (-6.0)).abs() <= 1e-12);
}

#[test]
fn pan_window_width_follows_label_availability() {
    let last = 9;
    let mut accumulator = 0.0;

    // A window reaching the end keeps its start step but truncates the end.
    let stepped = pan_category(window(7, 9), last, 8.0, 400.0, 20.0, &mut accumulator)
        .expect("window always resolves");

    assert_eq!(stepped, window(6, 8));
}

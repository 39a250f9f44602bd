use chart_panzoom::core::Orientation;
use chart_panzoom::transform::{RangeBounds, RangeConstraints, clamp_max, clamp_min};

fn constraints(min_x: Option<f64>, max_x: Option<f64>) -> RangeConstraints {
    RangeConstraints {
        range_min: RangeBounds { x: min_x, y: None },
        range_max: RangeBounds { x: max_x, y: None },
    }
}

#[test]
fn unconfigured_bounds_pass_candidates_through() {
    let unbounded = RangeConstraints::default();

    assert_eq!(
        clamp_min(unbounded, Orientation::Horizontal, -1e9),
        -1e9
    );
    assert_eq!(clamp_max(unbounded, Orientation::Vertical, 1e9), 1e9);
}

#[test]
fn violated_bounds_substitute_the_bound_value() {
    let bounded = constraints(Some(0.0), Some(100.0));

    assert_eq!(clamp_min(bounded, Orientation::Horizontal, -5.0), 0.0);
    assert_eq!(clamp_max(bounded, Orientation::Horizontal, 120.0), 100.0);
}

#[test]
fn respected_bounds_pass_candidates_through() {
    let bounded = constraints(Some(0.0), Some(100.0));

    assert_eq!(clamp_min(bounded, Orientation::Horizontal, 12.5), 12.5);
    assert_eq!(clamp_max(bounded, Orientation::Horizontal, 99.0), 99.0);
}

#[test]
fn bounds_are_selected_by_orientation() {
    let bounded = RangeConstraints {
        range_min: RangeBounds {
            x: Some(0.0),
            y: Some(-50.0),
        },
        range_max: RangeBounds::default(),
    };

    assert_eq!(clamp_min(bounded, Orientation::Horizontal, -60.0), 0.0);
    assert_eq!(clamp_min(bounded, Orientation::Vertical, -60.0), -50.0);
}

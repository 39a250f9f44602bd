use crate::core::IndexWindow;

/// One category zoom tick.
///
/// Fractional zoom input is meaningless for discrete label windows, so ticks
/// feed a cumulative accumulator and the window steps by exactly one index
/// once the accumulated magnitude exceeds `sensitivity`. The accumulator
/// resets to zero after every step decision.
///
/// Which side of the window moves depends on the focal position relative to
/// the axis pixel midpoint, and on whether the window already touches a
/// boundary (a window pinned at the start grows from the end, and vice
/// versa). Returns `None` while the accumulator is still below threshold.
pub fn zoom_category(
    window: IndexWindow,
    last_index: usize,
    factor: f64,
    focal_coord: f64,
    midpoint_coord: f64,
    sensitivity: f64,
    accumulator: &mut f64,
) -> Option<IndexWindow> {
    *accumulator += if factor > 1.0 { 1.0 } else { -1.0 };

    if accumulator.abs() <= sensitivity {
        return None;
    }

    let mut start = window.start();
    let mut end = window.end();

    if *accumulator < 0.0 {
        // Zoom out: grow the window away from the focal side.
        if focal_coord >= midpoint_coord {
            if start == 0 {
                end = (end + 1).min(last_index);
            } else {
                start -= 1;
            }
        } else if end >= last_index {
            start = start.saturating_sub(1);
        } else {
            end += 1;
        }
    } else {
        // Zoom in: shrink the window on the focal side, never below one label.
        if focal_coord >= midpoint_coord {
            if start < end {
                start += 1;
            }
        } else if end > start {
            end -= 1;
        }
    }

    *accumulator = 0.0;
    IndexWindow::new(start, end).ok()
}

/// One category pan tick.
///
/// Pixel deltas accumulate until they exceed one index step worth of travel
/// (`axis_pixel_span / (visible_ticks * speed)`); the window then shifts by
/// one index, keeping its width wherever the label sequence allows, and the
/// accumulator resets.
pub fn pan_category(
    window: IndexWindow,
    last_index: usize,
    pixel_delta: f64,
    axis_pixel_span: f64,
    speed: f64,
    accumulator: &mut f64,
) -> Option<IndexWindow> {
    let offset = window.tick_count().max(1);
    let step = (axis_pixel_span / (offset as f64 * speed)).round();

    *accumulator += pixel_delta;

    let previous_start = window.start();
    let start = if *accumulator > step {
        previous_start.saturating_sub(1)
    } else if *accumulator < -step {
        (previous_start + 1).min((last_index + 1).saturating_sub(offset))
    } else {
        previous_start
    };

    if start != previous_start {
        *accumulator = 0.0;
    }

    let end = (start + offset - 1).min(last_index);
    IndexWindow::new(start, end).ok()
}

/// Cumulative gesture-delta accumulators scoped to one chart instance.
///
/// Category axes step their index window only once enough fractional gesture
/// input has accumulated; these trackers hold that sub-threshold residue
/// between engine calls. One session exists per controller so concurrent
/// charts never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformSession {
    pub zoom_cumulative_delta: f64,
    pub pan_cumulative_delta: f64,
}

impl TransformSession {
    pub fn reset_zoom_accumulator(&mut self) {
        self.zoom_cumulative_delta = 0.0;
    }

    pub fn reset_pan_accumulator(&mut self) {
        self.pan_cumulative_delta = 0.0;
    }
}

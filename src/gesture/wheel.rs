use crate::gesture::events::WheelInput;

/// Time without further wheel ticks after which the zoom counts as settled.
pub const WHEEL_COMPLETE_DEBOUNCE_MS: f64 = 250.0;

/// Wheel zoom session.
///
/// Each tick is handled immediately and statelessly; the only retained state
/// is the settle deadline that turns a burst of ticks into a single
/// zoom-completed notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelZoom {
    complete_deadline_ms: Option<f64>,
}

impl WheelZoom {
    /// Computes the per-tick zoom factor and re-arms the settle deadline.
    ///
    /// Scrolling toward the user (`delta_y >= 0`) widens the window,
    /// scrolling away narrows it. Returns `None` for degenerate input.
    pub fn on_wheel(&mut self, input: WheelInput, speed: f64) -> Option<f64> {
        if !input.delta_y.is_finite() || !input.position.is_finite() {
            return None;
        }
        let signed_speed = if input.delta_y >= 0.0 { -speed } else { speed };
        self.complete_deadline_ms = Some(input.timestamp_ms + WHEEL_COMPLETE_DEBOUNCE_MS);
        Some(1.0 + signed_speed)
    }

    /// Returns `true` exactly once when the settle deadline has passed.
    pub fn poll_complete(&mut self, now_ms: f64) -> bool {
        match self.complete_deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.complete_deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.complete_deadline_ms = None;
    }
}

use crate::core::PixelPoint;
use crate::gesture::events::PanUpdate;

/// Grace period after a pan during which the trailing click is suppressed.
pub const GHOST_CLICK_GRACE_MS: f64 = 500.0;

/// Touch pan session.
///
/// The recognizer reports cumulative deltas since gesture start; consecutive
/// samples are differenced into the incremental deltas the pan engine needs.
/// After the gesture ends, the pointer-up still produces a click on most
/// hosts, so a short-lived flag marks that click for suppression.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPan {
    previous_delta: Option<PixelPoint>,
    suppress_click_until_ms: Option<f64>,
    panned: bool,
}

impl TouchPan {
    pub fn begin(&mut self) {
        self.previous_delta = Some(PixelPoint::new(0.0, 0.0));
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.previous_delta.is_some()
    }

    /// Differences the cumulative delta into an incremental step.
    ///
    /// An update with no recorded start seeds the tracker and produces no
    /// step (first sample, zero delta).
    pub fn on_update(&mut self, update: &PanUpdate) -> Option<PixelPoint> {
        if !update.delta.is_finite() {
            return None;
        }
        let Some(previous) = self.previous_delta else {
            self.previous_delta = Some(update.delta);
            return None;
        };

        let incremental = PixelPoint::new(
            update.delta.x - previous.x,
            update.delta.y - previous.y,
        );
        self.previous_delta = Some(update.delta);
        self.panned = true;
        Some(incremental)
    }

    /// Normal gesture end: arms the ghost-click suppression window.
    pub fn end(&mut self, now_ms: f64) {
        self.previous_delta = None;
        if self.panned && now_ms.is_finite() {
            self.suppress_click_until_ms = Some(now_ms + GHOST_CLICK_GRACE_MS);
        }
    }

    /// Abnormal termination: full reset, no click to suppress.
    pub fn cancel(&mut self) {
        self.previous_delta = None;
        self.suppress_click_until_ms = None;
        self.panned = false;
    }

    /// Whether a click at `now_ms` should be swallowed as a pan artifact.
    #[must_use]
    pub fn should_suppress_click(&self, now_ms: f64) -> bool {
        if !self.panned {
            return false;
        }
        match self.suppress_click_until_ms {
            Some(deadline) => now_ms < deadline,
            // Gesture still in flight; any click now is an artifact.
            None => true,
        }
    }

    /// Clears the suppression flag once the grace deadline passes.
    pub fn poll_grace(&mut self, now_ms: f64) -> bool {
        match self.suppress_click_until_ms {
            Some(deadline) if now_ms >= deadline => {
                self.suppress_click_until_ms = None;
                self.panned = false;
                true
            }
            _ => false,
        }
    }
}

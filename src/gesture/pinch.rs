use crate::core::{DirectionMode, PixelPoint};
use crate::gesture::events::PinchUpdate;

/// Finger-separation ratio band treated as a diagonal pinch (affects both axes).
const DIAGONAL_RATIO_LOW: f64 = 0.3;
const DIAGONAL_RATIO_HIGH: f64 = 1.7;

/// One differenced pinch step ready for the zoom engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchTick {
    pub factor: f64,
    pub center: PixelPoint,
    pub axis_mask: DirectionMode,
}

/// Pinch zoom session.
///
/// The recognizer reports the total scale since gesture start; the engine
/// needs per-tick factors, so consecutive samples are differenced against the
/// previous reported scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinchZoom {
    previous_scale: Option<f64>,
}

impl PinchZoom {
    pub fn begin(&mut self) {
        self.previous_scale = Some(1.0);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.previous_scale.is_some()
    }

    /// Differences the cumulative scale into a per-tick factor.
    ///
    /// An update with no recorded start (missed `pinchstart`) becomes the
    /// first sample: the tracker seeds from it and no step is produced, so a
    /// dropped event can never inject a NaN factor.
    pub fn on_update(&mut self, update: &PinchUpdate) -> Option<PinchTick> {
        if !update.scale.is_finite() || update.scale <= 0.0 || !update.center.is_finite() {
            return None;
        }
        let Some(previous) = self.previous_scale else {
            self.previous_scale = Some(update.scale);
            return None;
        };

        let factor = update.scale / previous;
        self.previous_scale = Some(update.scale);

        Some(PinchTick {
            factor,
            center: update.center,
            axis_mask: classify_axis_mask(&update.pointers),
        })
    }

    /// Ends the session; also used for abnormal cancellation.
    pub fn end(&mut self) {
        self.previous_scale = None;
    }
}

/// Scopes a pinch to the axis the fingers separate along.
///
/// Near-diagonal separations zoom both directions; otherwise the larger
/// pixel separation wins.
fn classify_axis_mask(pointers: &[PixelPoint]) -> DirectionMode {
    if pointers.len() < 2 {
        return DirectionMode::Xy;
    }
    let dx = (pointers[0].x - pointers[1].x).abs();
    let dy = (pointers[0].y - pointers[1].y).abs();
    let ratio = dx / dy;
    if ratio > DIAGONAL_RATIO_LOW && ratio < DIAGONAL_RATIO_HIGH {
        DirectionMode::Xy
    } else if dx > dy {
        DirectionMode::X
    } else {
        DirectionMode::Y
    }
}

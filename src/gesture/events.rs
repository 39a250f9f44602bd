//! Raw input samples delivered by the host event system and the gesture
//! recognizer, already translated to canvas-relative pixel coordinates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PixelPoint;

/// One wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    /// Pointer position relative to the canvas origin.
    pub position: PixelPoint,
    /// Vertical scroll amount; the sign selects zoom direction.
    pub delta_y: f64,
    pub timestamp_ms: f64,
    pub cancelable: bool,
}

/// Mouse button identifier matching DOM `MouseEvent.button` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
}

/// One mouse pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub position: PixelPoint,
    /// Raw relative motion (`movementX`/`movementY`).
    pub movement: PixelPoint,
    pub button: PointerButton,
    pub timestamp_ms: f64,
}

/// One pinch recognizer callback sample.
///
/// `scale` is the recognizer's cumulative scale since gesture start, not a
/// per-tick increment; the mediator differences consecutive samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchUpdate {
    pub scale: f64,
    pub center: PixelPoint,
    pub pointers: SmallVec<[PixelPoint; 2]>,
    pub timestamp_ms: f64,
}

/// One touch-pan recognizer callback sample.
///
/// `delta` is cumulative since gesture start, mirroring the pinch contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanUpdate {
    pub delta: PixelPoint,
    pub timestamp_ms: f64,
}

/// Click event, consulted for post-pan ghost click suppression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickInput {
    pub position: PixelPoint,
    pub cancelable: bool,
    pub timestamp_ms: f64,
}

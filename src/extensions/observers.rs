use serde::{Deserialize, Serialize};

use crate::core::ChartArea;

/// Read-only snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureContext {
    pub chart_area: ChartArea,
    pub axis_count: usize,
    pub attached: bool,
}

/// Event stream exposed to gesture observers.
///
/// `*Applied` events fire once per engine tick while a gesture is in flight;
/// the matching `*Completed` event fires exactly once when the gesture
/// settles (wheel debounce elapsed, drag released, pan ended).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    ZoomApplied { changed: bool },
    ZoomCompleted,
    PanApplied { changed: bool },
    PanCompleted,
    RangesReset,
}

/// Extension hook interface for bounded custom logic.
///
/// Observers can watch gesture activity and read controller context without
/// mutating core internals directly.
pub trait GestureObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GestureEvent, context: GestureContext);
}

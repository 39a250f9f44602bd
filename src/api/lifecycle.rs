use serde::{Deserialize, Serialize};

use super::PanZoomConfig;

/// Host listener groups that must be installed for the active configuration.
///
/// Listeners are resolved from configuration rather than installed
/// unconditionally so a disabled chart never intercepts page scrolling or
/// clicks. The host re-queries after every configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListenerBindings {
    pub wheel: bool,
    pub mouse_down: bool,
    pub mouse_move: bool,
    pub mouse_up: bool,
    pub click: bool,
}

impl ListenerBindings {
    #[must_use]
    pub fn resolve(config: &PanZoomConfig) -> Self {
        let drag_enabled = config.drag_zoom_enabled();
        let mouse_needed = drag_enabled || config.pan.enabled;
        Self {
            wheel: config.zoom.enabled,
            mouse_down: mouse_needed,
            mouse_move: mouse_needed,
            mouse_up: mouse_needed,
            // Click is only consulted for post-pan ghost suppression.
            click: config.pan.enabled,
        }
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.wheel || self.mouse_down || self.mouse_move || self.mouse_up || self.click
    }
}

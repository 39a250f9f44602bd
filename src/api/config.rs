use serde::{Deserialize, Serialize};

use crate::core::DirectionMode;
use crate::error::{PanZoomError, PanZoomResult};
use crate::transform::{PanSettings, RangeBounds, RangeConstraints, ZoomSettings};

/// Pan gesture configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanBehavior {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_pan_mode")]
    pub mode: DirectionMode,
    /// Divisor in the category-axis step threshold; larger values step sooner.
    #[serde(default = "default_pan_speed")]
    pub speed: f64,
    /// Minimum recognizer travel in pixels before a touch pan starts.
    /// Pass-through knob for the host's gesture recognizer.
    #[serde(default = "default_pan_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub range_min: RangeBounds,
    #[serde(default)]
    pub range_max: RangeBounds,
}

impl Default for PanBehavior {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: default_pan_mode(),
            speed: default_pan_speed(),
            threshold: default_pan_threshold(),
            range_min: RangeBounds::default(),
            range_max: RangeBounds::default(),
        }
    }
}

/// Zoom gesture configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_zoom_mode")]
    pub mode: DirectionMode,
    /// Accumulated tick threshold before a category axis steps its window.
    #[serde(default = "default_zoom_sensitivity")]
    pub sensitivity: f64,
    /// Fractional range change per wheel tick.
    #[serde(default = "default_zoom_speed")]
    pub speed: f64,
    #[serde(default)]
    pub drag: Option<DragZoomBehavior>,
    #[serde(default)]
    pub range_min: RangeBounds,
    #[serde(default)]
    pub range_max: RangeBounds,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: default_zoom_mode(),
            sensitivity: default_zoom_sensitivity(),
            speed: default_zoom_speed(),
            drag: None,
            range_min: RangeBounds::default(),
            range_max: RangeBounds::default(),
        }
    }
}

/// Drag-rectangle zoom enablement and feedback style.
///
/// The style is consumed by the host when drawing the selection rectangle;
/// the border is drawn only when `border_width > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragZoomBehavior {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_drag_fill")]
    pub background_color: String,
    #[serde(default = "default_drag_border")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: f64,
}

impl Default for DragZoomBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            background_color: default_drag_fill(),
            border_color: default_drag_border(),
            border_width: 0.0,
        }
    }
}

/// Top-level pan/zoom configuration.
///
/// This type is serializable so host applications can persist/load
/// interaction setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanZoomConfig {
    #[serde(default)]
    pub pan: PanBehavior,
    #[serde(default)]
    pub zoom: ZoomBehavior,
}

impl PanZoomConfig {
    pub fn validate(self) -> PanZoomResult<Self> {
        if !self.pan.speed.is_finite() || self.pan.speed <= 0.0 {
            return Err(PanZoomError::InvalidConfig(
                "pan speed must be finite and > 0".to_owned(),
            ));
        }
        if !self.pan.threshold.is_finite() || self.pan.threshold < 0.0 {
            return Err(PanZoomError::InvalidConfig(
                "pan threshold must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zoom.sensitivity.is_finite() || self.zoom.sensitivity < 0.0 {
            return Err(PanZoomError::InvalidConfig(
                "zoom sensitivity must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zoom.speed.is_finite() || self.zoom.speed <= 0.0 || self.zoom.speed >= 1.0 {
            return Err(PanZoomError::InvalidConfig(
                "zoom speed must be finite and inside (0, 1)".to_owned(),
            ));
        }
        validate_bounds("pan", self.pan.range_min, self.pan.range_max)?;
        validate_bounds("zoom", self.zoom.range_min, self.zoom.range_max)?;
        if let Some(drag) = &self.zoom.drag {
            if !drag.border_width.is_finite() || drag.border_width < 0.0 {
                return Err(PanZoomError::InvalidConfig(
                    "drag border width must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn drag_zoom_enabled(&self) -> bool {
        self.zoom.enabled && self.zoom.drag.as_ref().is_some_and(|drag| drag.enabled)
    }

    #[must_use]
    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            mode: self.zoom.mode,
            sensitivity: self.zoom.sensitivity,
            constraints: RangeConstraints {
                range_min: self.zoom.range_min,
                range_max: self.zoom.range_max,
            },
        }
    }

    #[must_use]
    pub fn pan_settings(&self) -> PanSettings {
        PanSettings {
            mode: self.pan.mode,
            speed: self.pan.speed,
            constraints: RangeConstraints {
                range_min: self.pan.range_min,
                range_max: self.pan.range_max,
            },
        }
    }
}

fn validate_bounds(
    family: &str,
    range_min: RangeBounds,
    range_max: RangeBounds,
) -> PanZoomResult<()> {
    for bound in [range_min.x, range_min.y, range_max.x, range_max.y]
        .into_iter()
        .flatten()
    {
        if !bound.is_finite() {
            return Err(PanZoomError::InvalidConfig(format!(
                "{family} range bounds must be finite when set"
            )));
        }
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_pan_mode() -> DirectionMode {
    DirectionMode::Xy
}

fn default_pan_speed() -> f64 {
    20.0
}

fn default_pan_threshold() -> f64 {
    10.0
}

fn default_zoom_mode() -> DirectionMode {
    DirectionMode::X
}

fn default_zoom_sensitivity() -> f64 {
    3.0
}

fn default_zoom_speed() -> f64 {
    0.1
}

fn default_drag_fill() -> String {
    "rgba(225,225,225,0.3)".to_owned()
}

fn default_drag_border() -> String {
    "rgba(225,225,225)".to_owned()
}

use serde::{Deserialize, Serialize};

use crate::error::{PanZoomError, PanZoomResult};

/// Pixel-space point relative to the chart canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Plot rectangle in canvas pixels, exclusive of axis label gutters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ChartArea {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> PanZoomResult<Self> {
        let area = Self {
            left,
            right,
            top,
            bottom,
        };
        if !area.is_valid() {
            return Err(PanZoomError::InvalidChartArea {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(area)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
            && self.right > self.left
            && self.bottom > self.top
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Default zoom focal point when a gesture carries no pointer position.
    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Axis layout direction on the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Chart directions a gesture family is allowed to affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionMode {
    X,
    Y,
    Xy,
}

impl DirectionMode {
    #[must_use]
    pub fn allows(self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => matches!(self, Self::X | Self::Xy),
            Orientation::Vertical => matches!(self, Self::Y | Self::Xy),
        }
    }
}

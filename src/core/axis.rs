use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::types::Orientation;
use crate::error::{PanZoomError, PanZoomResult};

/// Scale family an axis belongs to; selects the range-transform strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Linear,
    Logarithmic,
    Time,
    Category,
}

impl AxisKind {
    #[must_use]
    pub fn is_continuous(self) -> bool {
        !matches!(self, Self::Category)
    }
}

/// Continuous `[min, max]` value window along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Builds a range from two finite endpoints, ordering them so `min <= max`.
    pub fn new(min: f64, max: f64) -> PanZoomResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PanZoomError::InvalidData(
                "value range endpoints must be finite".to_owned(),
            ));
        }
        Ok(Self {
            min: min.min(max),
            max: min.max(max),
        })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }
}

/// Inclusive index window into an ordered category label sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexWindow {
    start: usize,
    end: usize,
}

impl IndexWindow {
    pub fn new(start: usize, end: usize) -> PanZoomResult<Self> {
        if start > end {
            return Err(PanZoomError::InvalidData(format!(
                "index window start {start} exceeds end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(self) -> usize {
        self.end
    }

    /// Number of visible labels; never zero for a valid window.
    #[must_use]
    pub fn tick_count(self) -> usize {
        self.end - self.start + 1
    }
}

/// Current displayed window along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisRange {
    Continuous(ValueRange),
    Category(IndexWindow),
}

/// One chart axis as seen by the pan/zoom core.
///
/// The axis carries its kind, orientation, pixel geometry along that
/// orientation and the currently displayed range. Pixel geometry maps
/// `pixel_start` to the range minimum; vertical hosts typically pass
/// `pixel_start = bottom` so that values grow upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    id: String,
    kind: AxisKind,
    orientation: Orientation,
    pixel_start: f64,
    pixel_end: f64,
    range: AxisRange,
    #[serde(default)]
    labels: Vec<String>,
}

impl Axis {
    /// Creates a continuous (linear, logarithmic or time) axis.
    pub fn continuous(
        id: impl Into<String>,
        kind: AxisKind,
        orientation: Orientation,
        pixel_start: f64,
        pixel_end: f64,
        min: f64,
        max: f64,
    ) -> PanZoomResult<Self> {
        if !kind.is_continuous() {
            return Err(PanZoomError::InvalidData(
                "category axes require a label sequence".to_owned(),
            ));
        }
        validate_pixel_span(pixel_start, pixel_end)?;
        Ok(Self {
            id: id.into(),
            kind,
            orientation,
            pixel_start,
            pixel_end,
            range: AxisRange::Continuous(ValueRange::new(min, max)?),
            labels: Vec::new(),
        })
    }

    /// Creates a time axis from UTC endpoints.
    pub fn time(
        id: impl Into<String>,
        orientation: Orientation,
        pixel_start: f64,
        pixel_end: f64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> PanZoomResult<Self> {
        Self::continuous(
            id,
            AxisKind::Time,
            orientation,
            pixel_start,
            pixel_end,
            datetime_to_unix_seconds(start),
            datetime_to_unix_seconds(end),
        )
    }

    /// Creates a category axis over an ordered label sequence.
    pub fn category(
        id: impl Into<String>,
        orientation: Orientation,
        pixel_start: f64,
        pixel_end: f64,
        labels: Vec<String>,
        window: IndexWindow,
    ) -> PanZoomResult<Self> {
        validate_pixel_span(pixel_start, pixel_end)?;
        if labels.is_empty() {
            return Err(PanZoomError::InvalidData(
                "category axes need at least one label".to_owned(),
            ));
        }
        if window.end() > labels.len() - 1 {
            return Err(PanZoomError::InvalidData(format!(
                "index window end {} exceeds last label index {}",
                window.end(),
                labels.len() - 1
            )));
        }
        Ok(Self {
            id: id.into(),
            kind: AxisKind::Category,
            orientation,
            pixel_start,
            pixel_end,
            range: AxisRange::Category(window),
            labels,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn pixel_start(&self) -> f64 {
        self.pixel_start
    }

    #[must_use]
    pub fn pixel_end(&self) -> f64 {
        self.pixel_end
    }

    #[must_use]
    pub fn pixel_span(&self) -> f64 {
        (self.pixel_end - self.pixel_start).abs()
    }

    /// Pixel coordinate of the axis midpoint along its orientation.
    #[must_use]
    pub fn pixel_midpoint(&self) -> f64 {
        (self.pixel_start + self.pixel_end) / 2.0
    }

    #[must_use]
    pub fn range(&self) -> &AxisRange {
        &self.range
    }

    #[must_use]
    pub fn value_range(&self) -> Option<ValueRange> {
        match self.range {
            AxisRange::Continuous(range) => Some(range),
            AxisRange::Category(_) => None,
        }
    }

    #[must_use]
    pub fn index_window(&self) -> Option<IndexWindow> {
        match self.range {
            AxisRange::Continuous(_) => None,
            AxisRange::Category(window) => Some(window),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn last_label_index(&self) -> Option<usize> {
        if self.labels.is_empty() {
            None
        } else {
            Some(self.labels.len() - 1)
        }
    }

    /// Converts a pixel coordinate along the axis orientation into a domain value.
    pub fn value_at_pixel(&self, pixel: f64) -> PanZoomResult<f64> {
        if !pixel.is_finite() {
            return Err(PanZoomError::InvalidData("pixel must be finite".to_owned()));
        }
        let range = self.continuous_range()?;
        let span = self.pixel_end - self.pixel_start;
        let normalized = (pixel - self.pixel_start) / span;
        match self.kind {
            AxisKind::Logarithmic => {
                let (log_min, log_max) = self.log_bounds(range)?;
                Ok(10f64.powf(log_min + normalized * (log_max - log_min)))
            }
            _ => Ok(range.min() + normalized * range.width()),
        }
    }

    /// Converts a domain value into a pixel coordinate along the axis orientation.
    pub fn pixel_at_value(&self, value: f64) -> PanZoomResult<f64> {
        if !value.is_finite() {
            return Err(PanZoomError::InvalidData("value must be finite".to_owned()));
        }
        let range = self.continuous_range()?;
        let span = self.pixel_end - self.pixel_start;
        match self.kind {
            AxisKind::Logarithmic => {
                if value <= 0.0 {
                    return Err(PanZoomError::InvalidData(
                        "logarithmic axes require positive values".to_owned(),
                    ));
                }
                let (log_min, log_max) = self.log_bounds(range)?;
                let normalized = (value.log10() - log_min) / (log_max - log_min);
                Ok(self.pixel_start + normalized * span)
            }
            _ => {
                let normalized = (value - range.min()) / range.width();
                Ok(self.pixel_start + normalized * span)
            }
        }
    }

    /// Overwrites the continuous range; endpoints are ordered before storing.
    pub fn set_value_range(&mut self, min: f64, max: f64) -> PanZoomResult<()> {
        if !matches!(self.range, AxisRange::Continuous(_)) {
            return Err(PanZoomError::InvalidData(
                "category axes carry an index window, not a value range".to_owned(),
            ));
        }
        self.range = AxisRange::Continuous(ValueRange::new(min, max)?);
        Ok(())
    }

    /// Overwrites the category index window.
    pub fn set_index_window(&mut self, window: IndexWindow) -> PanZoomResult<()> {
        let last = self.last_label_index().ok_or_else(|| {
            PanZoomError::InvalidData(
                "continuous axes carry a value range, not an index window".to_owned(),
            )
        })?;
        if window.end() > last {
            return Err(PanZoomError::InvalidData(format!(
                "index window end {} exceeds last label index {last}",
                window.end()
            )));
        }
        self.range = AxisRange::Category(window);
        Ok(())
    }

    /// Restores a previously captured range snapshot.
    pub fn restore_range(&mut self, range: AxisRange) -> PanZoomResult<()> {
        match (&self.range, range) {
            (AxisRange::Continuous(_), AxisRange::Continuous(snapshot)) => {
                self.range = AxisRange::Continuous(snapshot);
                Ok(())
            }
            (AxisRange::Category(_), AxisRange::Category(snapshot)) => {
                self.set_index_window(snapshot)
            }
            _ => Err(PanZoomError::InvalidData(
                "range snapshot does not match axis kind".to_owned(),
            )),
        }
    }

    fn continuous_range(&self) -> PanZoomResult<ValueRange> {
        self.value_range().ok_or_else(|| {
            PanZoomError::InvalidData(
                "category axes have no continuous pixel-value mapping".to_owned(),
            )
        })
    }

    fn log_bounds(&self, range: ValueRange) -> PanZoomResult<(f64, f64)> {
        if range.min() <= 0.0 || range.max() <= 0.0 {
            return Err(PanZoomError::InvalidData(
                "logarithmic axes require a positive range".to_owned(),
            ));
        }
        Ok((range.min().log10(), range.max().log10()))
    }
}

fn validate_pixel_span(pixel_start: f64, pixel_end: f64) -> PanZoomResult<()> {
    if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
        return Err(PanZoomError::InvalidData(
            "axis pixel geometry must be finite and non-degenerate".to_owned(),
        ));
    }
    Ok(())
}

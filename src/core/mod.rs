pub mod axis;
pub mod primitives;
pub mod types;

pub use axis::{Axis, AxisKind, AxisRange, IndexWindow, ValueRange};
pub use types::{ChartArea, DirectionMode, Orientation, PixelPoint};

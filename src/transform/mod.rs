pub mod category;
pub mod constraints;
pub mod continuous;
pub mod pan;
pub mod registry;
pub mod session;
pub mod zoom;

pub use constraints::{RangeBounds, RangeConstraints, clamp_max, clamp_min};
pub use pan::{PanRequest, PanSettings, apply_pan};
pub use registry::{CategoryTransform, ContinuousTransform, RangeTransform, TransformRegistry};
pub use session::TransformSession;
pub use zoom::{ZoomRequest, ZoomSettings, apply_zoom};

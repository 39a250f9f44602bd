pub mod drag;
pub mod events;
pub mod pinch;
pub mod touch_pan;
pub mod wheel;

pub use drag::{DragRectangle, DragZoom, DragZoomOutcome};
pub use events::{ClickInput, PanUpdate, PinchUpdate, PointerButton, PointerInput, WheelInput};
pub use pinch::{PinchTick, PinchZoom};
pub use touch_pan::TouchPan;
pub use wheel::WheelZoom;

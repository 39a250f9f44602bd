mod config;
mod controller;
mod json_contract;
mod lifecycle;

pub use config::{DragZoomBehavior, PanBehavior, PanZoomConfig, ZoomBehavior};
pub use controller::PanZoomController;
pub use json_contract::{PANZOOM_CONFIG_JSON_SCHEMA_V1, PanZoomConfigJsonContractV1};
pub use lifecycle::ListenerBindings;

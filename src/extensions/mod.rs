mod observers;

pub use observers::{GestureContext, GestureEvent, GestureObserver};

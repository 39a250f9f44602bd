//! Contract with the embedding render/layout engine.

/// Redraw scheduling boundary.
///
/// The pan/zoom core never draws; after a transform mutated at least one axis
/// range it asks the host to schedule a repaint. The call must be cheap and
/// idempotent within one event tick.
pub trait RedrawHost {
    fn request_redraw(&mut self);
}

/// No-op host used by tests and headless usage.
#[derive(Debug, Default)]
pub struct NullRedrawHost {
    pub redraw_count: usize,
}

impl RedrawHost for NullRedrawHost {
    fn request_redraw(&mut self) {
        self.redraw_count += 1;
    }
}

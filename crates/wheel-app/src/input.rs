//! Host events the controller reacts to.
//!
//! Browsers, the CLI, and tests all speak this enum. Timestamps are
//! milliseconds on whatever monotonic clock the host uses
//! (`performance.now()` in the browser).

#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// The option text was edited.
    TextChanged(String),

    /// The spin button was pressed.
    SpinRequested { now_ms: f64 },

    /// The reset button was pressed.
    ResetRequested,

    /// The wheel's container changed width.
    Resized { container_width: f64 },

    /// The host is about to paint a frame.
    Frame { now_ms: f64 },
}

impl WheelEvent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextChanged(text.into())
    }

    /// Whether this event would change state the spin locks down.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::TextChanged(_) | Self::ResetRequested)
    }
}

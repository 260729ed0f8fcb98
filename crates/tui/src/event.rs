//! Event status shared by the input widgets.

/// Whether a widget handled a key.
///
/// Widgets return this from `handle_key_event`. On `NotConsumed` the app
/// falls back to its own bindings, such as field navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The widget acted on the key.
    Consumed,
    /// The key means nothing to the widget.
    NotConsumed,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}

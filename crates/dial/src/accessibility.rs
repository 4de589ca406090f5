use strum::Display as StrumDisplay;

/// Longest text an accessibility event may carry.
pub const MAX_TEXT_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum EventType {
    TextChanged,
    DescriptionRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityEvent {
    pub event_type: EventType,
    pub text: Vec<String>,
}

impl AccessibilityEvent {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            text: Vec::new(),
        }
    }
}

/// Receives fire-and-forget notifications from a widget.
pub trait AccessibilityNotifier {
    fn send_event(&self, event_type: EventType);
}

impl AccessibilityNotifier for () {
    fn send_event(&self, _event_type: EventType) {}
}

/// Default float text of a bearing, as announced to assistive technology.
pub fn describe_bearing(bearing: f64) -> String {
    truncate_text(format!("{:?}", bearing))
}

fn truncate_text(mut text: String) -> String {
    if let Some((end, _)) = text.char_indices().nth(MAX_TEXT_LENGTH) {
        text.truncate(end);
    }
    text
}

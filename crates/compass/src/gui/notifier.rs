use crate::events::AppEvent;
use async_channel::Sender;
use compass_dial::{AccessibilityNotifier, EventType};

/// Forwards dial notifications to the GTK thread's event loop.
pub struct ChannelNotifier {
    tx: Sender<AppEvent>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl AccessibilityNotifier for ChannelNotifier {
    fn send_event(&self, event_type: EventType) {
        if let Err(e) = self.tx.try_send(AppEvent::Accessibility(event_type)) {
            log::warn!("Dropped accessibility event {}: {}", event_type, e);
        }
    }
}

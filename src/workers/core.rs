//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::widgets::WidgetKind;
use tokio::sync::mpsc;

/// Common event sending utilities for widgets and the session
///
/// Sending never waits: a widget settling a fetch must not stall on a slow
/// UI, so events beyond the queue capacity are dropped.
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub fn send_event(&self, event: Event) {
        if let Err(e) = self.sender.try_send(event) {
            log::debug!("Dropping dashboard event: {}", e);
        }
    }

    pub fn send_widget_event(
        &self,
        kind: WidgetKind,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::widget(kind, message, event_type, log_level));
    }
}

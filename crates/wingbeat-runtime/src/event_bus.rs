//! Event bus for forwarding UI interactions to systems

use crate::event::UiEvent;

/// A simple event queue that the UI layer pushes to and the loop drains
pub struct EventBus {
    events: Vec<UiEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus, returning them
    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

use std::collections::VecDeque;

use flappy_core::Event;

/// FIFO queue of events waiting for the next tick.
///
/// Single-threaded: one engine owns one bus and flushes it once per tick.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: VecDeque<Event>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the back of the queue.
    pub fn dispatch(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Takes every queued event in dispatch order, leaving the bus empty.
    #[must_use]
    pub fn flush(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    /// Iterates queued events without removing them.
    pub fn pending(&self) -> impl Iterator<Item = &Event> {
        self.queue.iter()
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Reports whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

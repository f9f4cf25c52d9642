//! Synchronous fan-out event bus.

/// Fan-out bus for engine events.
///
/// Listeners are invoked inline on the emitting thread; keep handlers fast
/// to avoid stalling the operation that emitted the event.
pub struct EventBus<E> {
    listeners: Vec<Box<dyn Fn(&E) + Send + Sync>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&E) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &E) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

//! Synchronous, in-thread event dispatch from a component to its subscribers.
//!
//! A `Signal<C, E>` holds the handlers registered for one event type `E`.
//! Emitting calls every handler in registration order before returning.
//! Handlers receive the receiving context `C` as an explicit `&mut`, so a
//! dialog can notify the editor that owns it without shared ownership.

pub struct Signal<C, E> {
    handlers: Vec<Box<dyn FnMut(&mut C, &E)>>,
}

impl<C, E> Default for Signal<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> std::fmt::Debug for Signal<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl<C, E> Signal<C, E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers `handler`; it runs after every handler registered before it.
    pub fn connect(&mut self, handler: impl FnMut(&mut C, &E) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Invokes every handler with `event`, in registration order.
    pub fn emit(&mut self, target: &mut C, event: &E) {
        for handler in &mut self.handlers {
            handler(target, event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

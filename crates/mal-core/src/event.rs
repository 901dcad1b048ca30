//! A named, multi-subscriber notification channel.
//!
//! `Event<C, E, X>` delivers an event payload `&E` to every hooked handler, in
//! subscription order, together with mutable access to a context `C` owned by
//! whoever fires the event.  Passing the context at fire time (rather than
//! capturing it in the closures) is what lets the simulation driver hook a
//! handler that mutates the very world the event was raised from.
//!
//! Handlers return `Result<(), X>`.  A failing handler is logged and
//! collected, and the remaining handlers still run:
//!
//! ```rust
//! use mal_core::Event;
//!
//! let mut on_ping: Event<Vec<u32>, u32, String> = Event::new("on_ping");
//! on_ping.hook(|_, _| Err("first handler fails".to_string()));
//! on_ping.hook(|log, n| { log.push(*n); Ok(()) });
//!
//! let mut log = Vec::new();
//! let failures = on_ping.fire(&mut log, &7);
//! assert_eq!(log, vec![7]);
//! assert_eq!(failures.len(), 1);
//! ```

use std::fmt;

use tracing::warn;

use crate::{CoreError, CoreResult, HandlerId};

type Handler<C, E, X> = Box<dyn FnMut(&mut C, &E) -> Result<(), X>>;

/// Named event with an ordered list of handlers.
pub struct Event<C, E, X> {
    name:     &'static str,
    handlers: Vec<(HandlerId, Handler<C, E, X>)>,
    next_id:  HandlerId,
}

impl<C, E, X: fmt::Display> Event<C, E, X> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handlers: Vec::new(),
            next_id:  HandlerId(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of hooked handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Register `handler`.  It runs after every previously hooked handler.
    pub fn hook<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&mut C, &E) -> Result<(), X> + 'static,
    {
        let id = self.next_id;
        self.next_id = id.next();
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler previously returned by [`hook`](Self::hook).
    pub fn unhook(&mut self, id: HandlerId) -> CoreResult<()> {
        match self.handlers.iter().position(|(h, _)| *h == id) {
            Some(i) => {
                self.handlers.remove(i);
                Ok(())
            }
            None => Err(CoreError::UnknownHandler { event: self.name, handler: id }),
        }
    }

    /// Deliver `event` to every handler in subscription order.
    ///
    /// Returns the errors of the handlers that failed, in the order they
    /// failed.  Each failure is also logged at `warn` level.
    pub fn fire(&mut self, ctx: &mut C, event: &E) -> Vec<X> {
        let mut failures = Vec::new();
        for (id, handler) in &mut self.handlers {
            if let Err(e) = handler(ctx, event) {
                warn!(event = self.name, handler = %id, error = %e, "event handler failed");
                failures.push(e);
            }
        }
        failures
    }
}

impl<C, E, X> fmt::Debug for Event<C, E, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

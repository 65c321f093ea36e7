//! In-process event dispatcher.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::dispatcher::{Dispatcher, DispatcherError};
use crate::handler::{SharedHandler, same_handler};
use crate::Event;

type Registry = HashMap<String, Vec<SharedHandler>>;

/// Name → handlers registry.
///
/// - No IO / no async
/// - The lock guards map access only; it is released before any handler runs, so a
///   slow handler never blocks registration, and handlers may call back into the
///   dispatcher
/// - A dispatch works on a snapshot of the list taken when it started
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Registry>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers currently registered under `event_name`.
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.read().get(event_name).map_or(0, Vec::len)
    }

    /// Snapshot of the handlers for `event_name`, in dispatch order.
    pub fn handlers(&self, event_name: &str) -> Vec<SharedHandler> {
        self.read().get(event_name).cloned().unwrap_or_default()
    }

    /// Event names with at least one handler, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Only map operations run under the lock and none of them panic, so a
    // poisoned lock still holds a consistent registry.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let counts: HashMap<String, usize> = self
            .read()
            .iter()
            .map(|(name, list)| (name.clone(), list.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .finish()
    }
}

impl Dispatcher for EventDispatcher {
    fn register(&self, event_name: &str, handler: SharedHandler) -> Result<(), DispatcherError> {
        // Decide under the lock, log after releasing it.
        let registered = {
            let mut registry = self.write();
            let list = registry.entry(event_name.to_owned()).or_default();
            if list.iter().any(|h| same_handler(h, &handler)) {
                None
            } else {
                list.push(handler);
                Some(list.len())
            }
        };

        match registered {
            Some(count) => {
                debug!(event = event_name, handlers = count, "handler registered");
                Ok(())
            }
            None => {
                warn!(event = event_name, "handler already registered");
                Err(DispatcherError::HandlerAlreadyRegistered {
                    event_name: event_name.to_owned(),
                })
            }
        }
    }

    fn dispatch(&self, event: &mut dyn Event) -> Result<(), DispatcherError> {
        let handlers = match self.read().get(event.name()) {
            Some(list) if !list.is_empty() => list.clone(),
            _ => return Ok(()),
        };

        debug!(event = event.name(), handlers = handlers.len(), "dispatching event");
        for handler in &handlers {
            handler.handle(&mut *event);
        }
        Ok(())
    }

    fn remove(&self, event_name: &str, handler: &SharedHandler) -> Result<(), DispatcherError> {
        let remaining = {
            let mut registry = self.write();
            let Some(list) = registry.get_mut(event_name) else {
                return Ok(());
            };
            let pos = list.iter().position(|h| same_handler(h, handler));
            if let Some(pos) = pos {
                list.remove(pos);
            }
            let remaining = list.len();
            if remaining == 0 {
                registry.remove(event_name);
            }
            pos.map(|_| remaining)
        };

        if let Some(remaining) = remaining {
            debug!(event = event_name, handlers = remaining, "handler removed");
        }
        Ok(())
    }

    fn has(&self, event_name: &str, handler: &SharedHandler) -> bool {
        self.read()
            .get(event_name)
            .is_some_and(|list| list.iter().any(|h| same_handler(h, handler)))
    }

    fn clear(&self) {
        self.write().clear();
        debug!("all handlers cleared");
    }
}

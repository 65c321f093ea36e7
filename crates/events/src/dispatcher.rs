//! Event dispatching abstraction (mechanics only).
//!
//! This module provides the **named-event dispatcher pattern**: producers raise an
//! event by name and every handler registered under that name reacts to it.
//!
//! ## Delivery model
//!
//! - **In-process**: handlers live in the same process as the producer
//! - **Synchronous**: `dispatch()` returns once every handler has returned
//! - **Ordered**: handlers run in the order they were registered
//! - **No persistence**: nothing is queued or retried; a handler registered after a
//!   dispatch never sees that event
//!
//! Handlers are identified by reference (the `Arc` allocation), not by value.

use std::sync::Arc;

use thiserror::Error;

use crate::{Event, SharedHandler};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatcherError {
    /// The exact same handler reference is already registered under this event name.
    #[error("handler already registered for event {event_name:?}")]
    HandlerAlreadyRegistered { event_name: String },
}

/// Named-event registry with synchronous fan-out.
///
/// Use cases depend on this trait (usually as `Arc<dyn Dispatcher>`) rather than on
/// a concrete dispatcher, so they can be exercised with fakes in tests.
///
/// ## Error Semantics
///
/// `register()` is the only operation that can fail. `dispatch()` and `remove()`
/// return `Result` for symmetry; the in-process implementation never fails them.
///
/// ## Thread Safety
///
/// The trait requires `Send + Sync`: one dispatcher is typically shared by every
/// request path of a service.
pub trait Dispatcher: Send + Sync {
    /// Append `handler` to the list for `event_name`.
    ///
    /// Any string is a valid event name, including the empty string.
    fn register(&self, event_name: &str, handler: SharedHandler) -> Result<(), DispatcherError>;

    /// Invoke every handler registered under `event.name()`, in registration order.
    ///
    /// Dispatching an event nobody listens to is a no-op.
    fn dispatch(&self, event: &mut dyn Event) -> Result<(), DispatcherError>;

    /// Unregister `handler` from `event_name`. Removing something that is not
    /// registered is not an error.
    fn remove(&self, event_name: &str, handler: &SharedHandler) -> Result<(), DispatcherError>;

    fn has(&self, event_name: &str, handler: &SharedHandler) -> bool;

    /// Drop every registration for every event name.
    fn clear(&self);
}

impl<D> Dispatcher for Arc<D>
where
    D: Dispatcher + ?Sized,
{
    fn register(&self, event_name: &str, handler: SharedHandler) -> Result<(), DispatcherError> {
        (**self).register(event_name, handler)
    }

    fn dispatch(&self, event: &mut dyn Event) -> Result<(), DispatcherError> {
        (**self).dispatch(event)
    }

    fn remove(&self, event_name: &str, handler: &SharedHandler) -> Result<(), DispatcherError> {
        (**self).remove(event_name, handler)
    }

    fn has(&self, event_name: &str, handler: &SharedHandler) -> bool {
        (**self).has(event_name, handler)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

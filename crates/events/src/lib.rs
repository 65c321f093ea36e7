//! Named-event dispatching (in-process pub/sub).
//!
//! Producers raise [`Event`]s by name; every [`EventHandler`] registered under that
//! name on a [`Dispatcher`] reacts to it, synchronously and in registration order.

pub mod dispatcher;
pub mod event;
pub mod event_dispatcher;
pub mod handler;

pub use dispatcher::{Dispatcher, DispatcherError};
pub use event::{Event, NamedEvent};
pub use event_dispatcher::EventDispatcher;
pub use handler::{EventHandler, SharedHandler, same_handler};

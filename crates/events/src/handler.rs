use std::sync::Arc;

use crate::Event;

/// Reacts to a dispatched event (event handler capability).
///
/// Handlers run synchronously on the dispatching thread. They return nothing:
/// a handler that can fail (publishing, IO) is expected to deal with the
/// failure itself, typically by logging it.
///
/// The event is passed mutably, so a payload change made by one handler is
/// visible to the handlers that run after it in the same dispatch.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &mut dyn Event);
}

/// Shared handler reference as stored in a dispatcher.
pub type SharedHandler = Arc<dyn EventHandler>;

/// Identity comparison: two references are the same handler iff they point at
/// the same allocation. Handlers with equal state are still distinct.
pub fn same_handler(a: &SharedHandler, b: &SharedHandler) -> bool {
    core::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Noop {
        id: u32,
    }

    impl EventHandler for Noop {
        fn handle(&self, _event: &mut dyn Event) {}
    }

    #[test]
    fn clones_of_one_arc_are_the_same_handler() {
        let a: SharedHandler = Arc::new(Noop { id: 1 });
        let b = Arc::clone(&a);
        assert!(same_handler(&a, &b));
    }

    #[test]
    fn equal_state_is_not_identity() {
        let a: SharedHandler = Arc::new(Noop { id: 1 });
        let b: SharedHandler = Arc::new(Noop { id: 1 });
        assert!(!same_handler(&a, &b));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use relay_core::EventId;

/// A named, in-process event.
///
/// Events are routed by `name()`. The payload is opaque to the dispatcher and
/// may be replaced after construction (e.g. to attach a use case result right
/// before dispatch).
pub trait Event: Send + Sync {
    /// Routing key (e.g. "OrderCreated").
    fn name(&self) -> &str;

    /// Current payload, if one was attached.
    fn payload(&self) -> Option<&JsonValue>;

    /// Replace the payload.
    fn set_payload(&mut self, payload: JsonValue);

    /// When the event was created.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// General-purpose event: a name, an optional JSON payload and a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEvent {
    id: EventId,
    name: String,
    payload: Option<JsonValue>,
    occurred_at: DateTime<Utc>,
}

impl NamedEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            payload: None,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }
}

impl Event for NamedEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> Option<&JsonValue> {
        self.payload.as_ref()
    }

    fn set_payload(&mut self, payload: JsonValue) {
        self.payload = Some(payload);
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_event_has_no_payload() {
        let before = Utc::now();
        let event = NamedEvent::new("OrderCreated");

        assert_eq!(event.name(), "OrderCreated");
        assert!(event.payload().is_none());
        assert!(event.occurred_at() >= before);
    }

    #[test]
    fn payload_can_be_replaced_after_construction() {
        let mut event = NamedEvent::new("OrderCreated").with_payload(json!({"id": "1"}));
        event.set_payload(json!({"id": "2"}));

        assert_eq!(event.payload(), Some(&json!({"id": "2"})));
    }

    #[test]
    fn every_event_gets_its_own_id() {
        let a = NamedEvent::new("OrderCreated");
        let b = NamedEvent::new("OrderCreated");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn empty_name_is_allowed() {
        let event = NamedEvent::new("");
        assert_eq!(event.name(), "");
    }
}

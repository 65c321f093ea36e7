use std::sync::Arc;

use tracing::{debug, error, warn};

use relay_events::{Event, EventHandler};

use crate::publisher::{Message, MessagePublisher};
use crate::OrderSystemConfig;

/// Forwards `OrderCreated` payloads to the message broker as JSON.
///
/// Publishing failures are logged and swallowed: the order is already saved, and
/// the dispatcher has no channel to report handler errors.
pub struct OrderCreatedHandler {
    publisher: Arc<dyn MessagePublisher>,
    exchange: String,
    routing_key: String,
}

impl OrderCreatedHandler {
    pub fn new(publisher: Arc<dyn MessagePublisher>, config: &OrderSystemConfig) -> Self {
        Self {
            publisher,
            exchange: config.exchange.clone(),
            routing_key: config.routing_key.clone(),
        }
    }
}

impl EventHandler for OrderCreatedHandler {
    fn handle(&self, event: &mut dyn Event) {
        let Some(payload) = event.payload() else {
            warn!(event = event.name(), "event has no payload; nothing to publish");
            return;
        };

        let body = match serde_json::to_vec(payload) {
            Ok(body) => body,
            Err(err) => {
                error!(event = event.name(), error = %err, "failed to encode event payload");
                return;
            }
        };

        let message = Message::json(self.exchange.as_str(), self.routing_key.as_str(), body);
        match self.publisher.publish(message) {
            Ok(()) => debug!(
                event = event.name(),
                exchange = %self.exchange,
                "event published"
            ),
            Err(err) => error!(
                event = event.name(),
                exchange = %self.exchange,
                error = %err,
                "failed to publish event"
            ),
        }
    }
}

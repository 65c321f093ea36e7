//! Message broker abstraction used by event handlers.

use std::sync::Mutex;

use thiserror::Error;

/// A message bound for a broker exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub exchange: String,
    pub routing_key: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Message {
    pub fn json(exchange: impl Into<String>, routing_key: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            exchange: exchange.into(),
            routing_key: routing_key.into(),
            content_type: "application/json".to_string(),
            body,
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    /// The broker refused the message or could not be reached.
    #[error("broker unavailable: {0}")]
    Unavailable(String),
    /// Publish failed due to internal lock poisoning.
    #[error("publisher lock poisoned")]
    Poisoned,
}

/// Publishes messages to a broker (RabbitMQ-style exchange + routing key).
pub trait MessagePublisher: Send + Sync {
    fn publish(&self, message: Message) -> Result<(), PublishError>;
}

/// In-memory publisher for tests/dev: keeps every message it was given.
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages published so far, oldest first.
    pub fn published(&self) -> Vec<Message> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl MessagePublisher for InMemoryPublisher {
    fn publish(&self, message: Message) -> Result<(), PublishError> {
        let mut messages = self.messages.lock().map_err(|_| PublishError::Poisoned)?;
        messages.push(message);
        Ok(())
    }
}

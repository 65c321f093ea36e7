//! Order system configuration.

use crate::ORDER_CREATED;

/// Settings for wiring the order-created flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSystemConfig {
    /// Event raised after an order is saved.
    pub event_name: String,
    /// Broker exchange the created-order handler publishes to.
    pub exchange: String,
    pub routing_key: String,
}

impl Default for OrderSystemConfig {
    fn default() -> Self {
        Self {
            event_name: ORDER_CREATED.to_string(),
            exchange: "amq.direct".to_string(),
            routing_key: String::new(),
        }
    }
}

impl OrderSystemConfig {
    /// Read `ORDER_CREATED_EVENT`, `ORDER_EXCHANGE` and `ORDER_ROUTING_KEY`,
    /// keeping defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(event_name) = lookup("ORDER_CREATED_EVENT") {
            config.event_name = event_name;
        }
        if let Some(exchange) = lookup("ORDER_EXCHANGE") {
            config.exchange = exchange;
        }
        if let Some(routing_key) = lookup("ORDER_ROUTING_KEY") {
            config.routing_key = routing_key;
        }
        config
    }

    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    pub fn with_routing_key(mut self, routing_key: impl Into<String>) -> Self {
        self.routing_key = routing_key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OrderSystemConfig::from_lookup(|_| None);
        assert_eq!(config.event_name, "OrderCreated");
        assert_eq!(config.exchange, "amq.direct");
        assert_eq!(config.routing_key, "");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = OrderSystemConfig::from_lookup(|key| match key {
            "ORDER_EXCHANGE" => Some("orders".to_string()),
            "ORDER_ROUTING_KEY" => Some("created".to_string()),
            _ => None,
        });
        assert_eq!(config.event_name, "OrderCreated");
        assert_eq!(config.exchange, "orders");
        assert_eq!(config.routing_key, "created");
    }
}

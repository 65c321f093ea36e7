//! Order use cases (application-level orchestration).
//!
//! `CreateOrderUseCase` runs this pipeline:
//!
//! ```text
//! OrderInput
//!   ↓
//! 1. Build + validate the order (domain rules)
//!   ↓
//! 2. Save it (repository)
//!   ↓
//! 3. Raise the order-created event with the output as payload (dispatcher)
//! ```
//!
//! Nothing is dispatched when validation or saving fails.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use relay_core::DomainError;
use relay_events::{Dispatcher, DispatcherError, Event, NamedEvent};

use crate::order::{Order, OrderInput, OrderOutput};
use crate::repository::{OrderRepository, RepositoryError};
use crate::ORDER_CREATED;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("failed to encode order payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Dispatch(#[from] DispatcherError),
}

/// Creates an order and announces it through the dispatcher.
pub struct CreateOrderUseCase {
    repository: Arc<dyn OrderRepository>,
    dispatcher: Arc<dyn Dispatcher>,
    event_name: String,
}

impl CreateOrderUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
            event_name: ORDER_CREATED.to_string(),
        }
    }

    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    pub fn execute(&self, input: OrderInput) -> Result<OrderOutput, OrderError> {
        let order = Order::new(input.id, input.price, input.tax)?;
        self.repository.save(&order)?;

        let output = OrderOutput::from(&order);

        // A fresh event per execution: concurrent callers never share a payload.
        let mut event = NamedEvent::new(self.event_name.as_str());
        event.set_payload(serde_json::to_value(&output)?);
        self.dispatcher.dispatch(&mut event)?;

        info!(
            order_id = %output.id,
            event_id = %event.id(),
            final_price = output.final_price,
            "order created"
        );
        Ok(output)
    }
}

/// Lists every saved order.
pub struct ListOrdersUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl ListOrdersUseCase {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<Vec<OrderOutput>, OrderError> {
        let orders = self.repository.find_all()?;
        Ok(orders.iter().map(OrderOutput::from).collect())
    }
}

//! Order processing on top of the event dispatcher.
//!
//! Creating an order persists it, then raises an `OrderCreated` event whose payload
//! is the created order. Handlers registered for that event (e.g.
//! [`OrderCreatedHandler`]) forward it to a message broker.

pub mod config;
pub mod handler;
pub mod order;
pub mod publisher;
pub mod repository;
pub mod usecase;

pub use config::OrderSystemConfig;
pub use handler::OrderCreatedHandler;
pub use order::{Order, OrderInput, OrderOutput};
pub use publisher::{InMemoryPublisher, Message, MessagePublisher, PublishError};
pub use repository::{InMemoryOrderRepository, OrderRepository, RepositoryError};
pub use usecase::{CreateOrderUseCase, ListOrdersUseCase, OrderError};

/// Default name of the event raised after an order is saved.
pub const ORDER_CREATED: &str = "OrderCreated";

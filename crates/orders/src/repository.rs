//! Order persistence.

use std::sync::RwLock;

use thiserror::Error;

use relay_core::{Entity, OrderId};

use crate::Order;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An order with this id was already saved.
    #[error("order {0} already exists")]
    Duplicate(OrderId),
    /// The backing store could not be reached.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Order storage abstraction.
///
/// Implementations must be safe to share across threads: one repository serves
/// every caller of the use cases.
pub trait OrderRepository: Send + Sync {
    fn save(&self, order: &Order) -> Result<(), RepositoryError>;

    /// All orders, in the order they were saved.
    fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Number of saved orders.
    fn total(&self) -> Result<usize, RepositoryError>;
}

/// In-memory order repository.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;

        if orders.iter().any(|o| o.id() == order.id()) {
            return Err(RepositoryError::Duplicate(order.id().clone()));
        }
        orders.push(order.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(orders.clone())
    }

    fn total(&self) -> Result<usize, RepositoryError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(orders.len())
    }
}

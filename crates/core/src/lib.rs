//! `relay-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no infrastructure concerns)
//! shared by the event dispatcher and the modules that publish through it.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EventId, OrderId};

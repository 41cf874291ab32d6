//! `invoicing-core` — domain building blocks shared by the invoicing crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use value_object::ValueObject;

//! # Postboard Core
//!
//! The domain layer: entities, ports and the post service.
//! Nothing in here knows about HTTP frameworks or database drivers.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;

//! # Domain Layer
//!
//! Core business logic following Domain-Driven Design principles.
//!
//! This layer contains:
//! - **Entities**: The [`Trade`](entities::Trade) aggregate
//! - **Value Objects**: Immutable types with validation (identifiers,
//!   statuses, actions, timestamps)
//! - **Services**: The [`TradeLifecycle`](services::TradeLifecycle)
//!   action menu and transition rules
//! - **Events**: Domain events for notification fan-out and audit trail
//! - **Errors**: Domain-specific error types with numeric codes

pub mod entities;
pub mod errors;
pub mod events;
pub mod services;
pub mod value_objects;

//! # Infrastructure Layer
//!
//! Adapters implementing the domain and application ports.
//!
//! ## Persistence
//!
//! Repository implementations:
//! - In-memory repository with optimistic-concurrency version checks
//!
//! ## Events
//!
//! Trade event publishers:
//! - Tracing-backed publisher for structured log fan-out
//! - In-memory recording publisher for tests

pub mod events;
pub mod persistence;

pub use events::{InMemoryEventPublisher, TracingEventPublisher};
pub use persistence::{InMemoryTradeRepository, RepositoryError, RepositoryResult, TradeRepository};

//! # Domain Errors
//!
//! Domain-specific error types with numeric codes.

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};

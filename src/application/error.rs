//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures during use case execution, including
//! validation failures, lifecycle violations and infrastructure errors.
//! All of them are recoverable by the caller: re-fetch and retry on a
//! conflict, or re-render the corrected action menu.
//!
//! Route glue translating these to HTTP conventionally uses:
//! `ConflictRetry` and state-category domain errors → 409,
//! validation-category domain errors → 400, `TradeNotFound` → 404,
//! `NotAParticipant` → 403.

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Trade not found.
    #[error("trade not found: {0}")]
    TradeNotFound(String),

    /// The caller is not party to the trade.
    #[error("not a participant of trade {trade_id}: {user_id}")]
    NotAParticipant {
        /// The trade being acted on.
        trade_id: String,
        /// The caller's account.
        user_id: String,
    },

    /// The stored trade changed between read and write; re-fetch and retry.
    #[error("conflicting update, retry: {0}")]
    ConflictRetry(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Domain error.
    #[error("domain error: {0}")]
    DomainError(#[from] DomainError),

    /// Repository error.
    #[error("repository error: {0}")]
    RepositoryError(String),

    /// Event publishing error.
    #[error("event publishing error: {0}")]
    EventPublishError(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a trade not found error.
    #[must_use]
    pub fn trade_not_found(trade_id: impl Into<String>) -> Self {
        Self::TradeNotFound(trade_id.into())
    }

    /// Creates a not-a-participant error.
    #[must_use]
    pub fn not_a_participant(trade_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::NotAParticipant {
            trade_id: trade_id.into(),
            user_id: user_id.into(),
        }
    }

    /// Creates a conflict-retry error.
    #[must_use]
    pub fn conflict_retry(message: impl Into<String>) -> Self {
        Self::ConflictRetry(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Creates a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::RepositoryError(message.into())
    }

    /// Creates an event publish error.
    #[must_use]
    pub fn event_publish(message: impl Into<String>) -> Self {
        Self::EventPublishError(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::VersionConflict { .. } => Self::ConflictRetry(err.to_string()),
            RepositoryError::NotFound { ref id, .. } => Self::TradeNotFound(id.clone()),
            RepositoryError::Storage(message) => Self::RepositoryError(message),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_not_found_display() {
        let err = ApplicationError::trade_not_found("trade-123");
        assert!(err.to_string().contains("trade-123"));
    }

    #[test]
    fn not_a_participant_display() {
        let err = ApplicationError::not_a_participant("trade-1", "user-9");
        assert!(err.to_string().contains("trade-1"));
        assert!(err.to_string().contains("user-9"));
    }

    #[test]
    fn conflict_retry_display() {
        let err = ApplicationError::conflict_retry("version moved");
        assert!(err.to_string().contains("retry"));
    }

    #[test]
    fn from_domain_error() {
        let domain_err = DomainError::EmptyOffer;
        let app_err: ApplicationError = domain_err.into();
        assert!(app_err.to_string().contains("counter-proposal"));
    }

    #[test]
    fn version_conflict_becomes_conflict_retry() {
        let repo_err = RepositoryError::version_conflict("Trade", "abc", 2, 3);
        let app_err: ApplicationError = repo_err.into();
        assert!(matches!(app_err, ApplicationError::ConflictRetry(_)));
    }

    #[test]
    fn repo_not_found_becomes_trade_not_found() {
        let repo_err = RepositoryError::not_found("Trade", "abc");
        let app_err: ApplicationError = repo_err.into();
        assert!(matches!(app_err, ApplicationError::TradeNotFound(_)));
    }

    #[test]
    fn storage_error_becomes_repository_error() {
        let repo_err = RepositoryError::storage("connection reset");
        let app_err: ApplicationError = repo_err.into();
        assert!(matches!(app_err, ApplicationError::RepositoryError(_)));
    }
}

//! # Persistence Ports
//!
//! Repository trait and error types implemented by the storage adapters.
//!
//! Concurrent transitions on one trade are serialized here: `save`
//! rejects a write whose version is not strictly newer than the stored
//! version, and the application layer surfaces that rejection as a
//! retryable conflict.

use crate::domain::entities::Trade;
use crate::domain::value_objects::{TradeId, TradeStatus, UserId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type name.
        entity: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// The stored version changed between read and write.
    #[error("{entity} {id} version conflict: attempted {attempted}, stored {current}")]
    VersionConflict {
        /// Entity type name.
        entity: &'static str,
        /// Entity identifier.
        id: String,
        /// The version the caller tried to write.
        attempted: u64,
        /// The version currently stored.
        current: u64,
    },

    /// Backend failure (connection, serialization, ...).
    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a version-conflict error.
    #[must_use]
    pub fn version_conflict(
        entity: &'static str,
        id: impl Into<String>,
        attempted: u64,
        current: u64,
    ) -> Self {
        Self::VersionConflict {
            entity,
            id: id.into(),
            attempted,
            current,
        }
    }

    /// Creates a backend error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Returns true for a version conflict.
    #[inline]
    #[must_use]
    pub const fn is_version_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for persisting trades.
///
/// Implementations must make `save` atomic per trade and reject stale
/// writes with [`RepositoryError::VersionConflict`].
#[async_trait]
pub trait TradeRepository: Send + Sync + fmt::Debug {
    /// Saves a trade, rejecting writes with a stale version.
    async fn save(&self, trade: &Trade) -> RepositoryResult<()>;

    /// Finds a trade by ID.
    async fn get(&self, id: &TradeId) -> RepositoryResult<Option<Trade>>;

    /// Finds all trades a user participates in, on either side.
    async fn find_by_participant(&self, user_id: &UserId) -> RepositoryResult<Vec<Trade>>;

    /// Finds all trades with the given status.
    async fn find_by_status(&self, status: TradeStatus) -> RepositoryResult<Vec<Trade>>;

    /// Finds all trades still under negotiation.
    async fn find_active(&self) -> RepositoryResult<Vec<Trade>>;

    /// Deletes a trade, returning whether it existed.
    async fn delete(&self, id: &TradeId) -> RepositoryResult<bool>;

    /// Returns the number of stored trades.
    async fn count(&self) -> RepositoryResult<u64>;
}

//! # In-Memory Trade Repository
//!
//! In-memory implementation of [`TradeRepository`] for testing and
//! single-process deployments.
//!
//! This implementation uses a thread-safe `HashMap` for storage,
//! making it suitable for unit tests without database dependencies.

use crate::domain::entities::Trade;
use crate::domain::value_objects::{TradeId, TradeStatus, UserId};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TradeRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`TradeRepository`].
///
/// Uses a thread-safe `HashMap` for storage. The write lock makes each
/// `save` atomic, and the version check inside it rejects stale writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTradeRepository {
    storage: Arc<RwLock<HashMap<TradeId, Trade>>>,
}

impl InMemoryTradeRepository {
    /// Creates a new empty in-memory trade repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of trades in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all trades from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn save(&self, trade: &Trade) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;

        // Check for version conflict if updating
        if let Some(existing) = storage.get(&trade.id())
            && existing.version() >= trade.version()
        {
            return Err(RepositoryError::version_conflict(
                "Trade",
                trade.id().to_string(),
                trade.version(),
                existing.version(),
            ));
        }

        storage.insert(trade.id(), trade.clone());
        Ok(())
    }

    async fn get(&self, id: &TradeId) -> RepositoryResult<Option<Trade>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn find_by_participant(&self, user_id: &UserId) -> RepositoryResult<Vec<Trade>> {
        let storage = self.storage.read().await;
        let trades: Vec<Trade> = storage
            .values()
            .filter(|t| t.is_participant(user_id))
            .cloned()
            .collect();
        Ok(trades)
    }

    async fn find_by_status(&self, status: TradeStatus) -> RepositoryResult<Vec<Trade>> {
        let storage = self.storage.read().await;
        let trades: Vec<Trade> = storage
            .values()
            .filter(|t| t.status() == status)
            .cloned()
            .collect();
        Ok(trades)
    }

    async fn find_active(&self) -> RepositoryResult<Vec<Trade>> {
        let storage = self.storage.read().await;
        let active: Vec<Trade> = storage
            .values()
            .filter(|t| t.status().is_active())
            .cloned()
            .collect();
        Ok(active)
    }

    async fn delete(&self, id: &TradeId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

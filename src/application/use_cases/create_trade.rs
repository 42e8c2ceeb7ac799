//! # Create Trade Use Case
//!
//! Opens a new trade negotiation.
//!
//! This use case orchestrates the creation of a new trade, including:
//! - Request validation
//! - Object-count limits
//! - Trade persistence
//! - Domain event publishing

use crate::application::dto::{CreateTradeRequest, CreateTradeResponse};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::TradeConfig;
use crate::domain::entities::Trade;
use crate::domain::errors::DomainError;
use crate::domain::events::TradeEvent;
use crate::infrastructure::persistence::TradeRepository;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Publisher for trade domain events.
///
/// The notification and audit glue sits behind this port.
#[async_trait]
pub trait TradeEventPublisher: Send + Sync + fmt::Debug {
    /// Publishes a trade event.
    ///
    /// # Errors
    ///
    /// Returns an error message if publishing fails.
    async fn publish(&self, event: TradeEvent) -> Result<(), String>;
}

/// Use case for opening a new trade negotiation.
#[derive(Debug)]
pub struct CreateTradeUseCase {
    trade_repository: Arc<dyn TradeRepository>,
    event_publisher: Arc<dyn TradeEventPublisher>,
    config: TradeConfig,
}

impl CreateTradeUseCase {
    /// Creates a new CreateTradeUseCase with all dependencies.
    #[must_use]
    pub fn new(
        trade_repository: Arc<dyn TradeRepository>,
        event_publisher: Arc<dyn TradeEventPublisher>,
        config: TradeConfig,
    ) -> Self {
        Self {
            trade_repository,
            event_publisher,
            config,
        }
    }

    /// Executes the create trade use case.
    ///
    /// # Arguments
    ///
    /// * `request` - The create trade request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Request validation fails
    /// - The requested object list exceeds the configured limit
    /// - Requester and owner are the same account
    /// - Persistence fails
    /// - Event publishing fails
    pub async fn execute(
        &self,
        request: CreateTradeRequest,
    ) -> ApplicationResult<CreateTradeResponse> {
        // 1. Validate request
        request.validate().map_err(ApplicationError::validation)?;

        if request.requested_object_ids.len() > self.config.max_objects_per_side {
            return Err(DomainError::TooManyObjects {
                limit: self.config.max_objects_per_side,
                actual: request.requested_object_ids.len(),
            }
            .into());
        }

        // 2. Build the aggregate
        let (requester_id, owner_id, requested_object_ids) = request.to_domain_types();
        let trade = Trade::new(requester_id, owner_id, requested_object_ids)?;

        // 3. Persist
        self.trade_repository.save(&trade).await?;

        // 4. Publish domain event
        self.event_publisher
            .publish(TradeEvent::requested(&trade))
            .await
            .map_err(ApplicationError::event_publish)?;

        info!(
            trade_id = %trade.id(),
            requester = %trade.requester_id(),
            owner = %trade.owner_id(),
            "trade requested"
        );

        Ok(CreateTradeResponse::from_trade(&trade))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TradeStatus;
    use crate::infrastructure::events::InMemoryEventPublisher;
    use crate::infrastructure::persistence::InMemoryTradeRepository;

    fn create_use_case() -> (
        CreateTradeUseCase,
        Arc<InMemoryTradeRepository>,
        Arc<InMemoryEventPublisher>,
    ) {
        let repository = Arc::new(InMemoryTradeRepository::new());
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let use_case = CreateTradeUseCase::new(
            repository.clone(),
            publisher.clone(),
            TradeConfig::default(),
        );
        (use_case, repository, publisher)
    }

    fn valid_request() -> CreateTradeRequest {
        CreateTradeRequest::new("user-1", "user-2", vec!["obj-1".to_string()])
    }

    #[tokio::test]
    async fn create_trade_success() {
        let (use_case, repository, publisher) = create_use_case();

        let response = use_case.execute(valid_request()).await.unwrap();

        assert_eq!(response.status, TradeStatus::Pending);
        let stored = repository.get(&response.trade_id).await.unwrap().unwrap();
        assert!(stored.is_pending());
        assert_eq!(publisher.len(), 1);
        assert_eq!(publisher.events()[0].kind().name(), "trade_requested");
    }

    #[tokio::test]
    async fn create_trade_invalid_request() {
        let (use_case, repository, _publisher) = create_use_case();

        let request = CreateTradeRequest::new("", "user-2", vec!["obj-1".to_string()]);
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_trade_same_participant() {
        let (use_case, _repository, _publisher) = create_use_case();

        let request = CreateTradeRequest::new("user-1", "user-1", vec!["obj-1".to_string()]);
        let result = use_case.execute(request).await;

        assert!(matches!(
            result,
            Err(ApplicationError::DomainError(DomainError::SameParticipant(_)))
        ));
    }

    #[tokio::test]
    async fn create_trade_too_many_objects() {
        let repository = Arc::new(InMemoryTradeRepository::new());
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let use_case = CreateTradeUseCase::new(
            repository,
            publisher,
            TradeConfig {
                max_objects_per_side: 2,
            },
        );

        let request = CreateTradeRequest::new(
            "user-1",
            "user-2",
            vec!["obj-1".into(), "obj-2".into(), "obj-3".into()],
        );
        let result = use_case.execute(request).await;

        assert!(matches!(
            result,
            Err(ApplicationError::DomainError(DomainError::TooManyObjects {
                limit: 2,
                actual: 3
            }))
        ));
    }

    #[tokio::test]
    async fn create_trade_publish_failure_is_surfaced() {
        #[derive(Debug)]
        struct FailingPublisher;

        #[async_trait]
        impl TradeEventPublisher for FailingPublisher {
            async fn publish(&self, _event: TradeEvent) -> Result<(), String> {
                Err("broker unavailable".to_string())
            }
        }

        let use_case = CreateTradeUseCase::new(
            Arc::new(InMemoryTradeRepository::new()),
            Arc::new(FailingPublisher),
            TradeConfig::default(),
        );

        let result = use_case.execute(valid_request()).await;
        assert!(matches!(result, Err(ApplicationError::EventPublishError(_))));
    }
}

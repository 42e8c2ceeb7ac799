//! # List Actions Use Case
//!
//! Computes the action menu one viewer sees for a trade.

use crate::application::dto::AvailableActionsResponse;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::services::TradeLifecycle;
use crate::domain::value_objects::{TradeId, UserId};
use crate::infrastructure::persistence::TradeRepository;
use std::fmt;
use std::sync::Arc;

/// Request for a viewer's action menu.
#[derive(Debug, Clone)]
pub struct AvailableActionsRequest {
    /// The trade being viewed.
    pub trade_id: TradeId,
    /// The viewer's account.
    pub caller_id: String,
}

impl AvailableActionsRequest {
    /// Creates a new AvailableActionsRequest.
    #[must_use]
    pub fn new(trade_id: TradeId, caller_id: impl Into<String>) -> Self {
        Self {
            trade_id,
            caller_id: caller_id.into(),
        }
    }
}

impl fmt::Display for AvailableActionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AvailableActionsRequest {{ trade: {}, caller: {} }}",
            self.trade_id, self.caller_id
        )
    }
}

/// Use case for computing a viewer's action menu.
#[derive(Debug)]
pub struct ListActionsUseCase {
    trade_repository: Arc<dyn TradeRepository>,
}

impl ListActionsUseCase {
    /// Creates a new ListActionsUseCase.
    #[must_use]
    pub fn new(trade_repository: Arc<dyn TradeRepository>) -> Self {
        Self { trade_repository }
    }

    /// Executes the list actions use case.
    ///
    /// # Arguments
    ///
    /// * `request` - The available actions request
    ///
    /// # Errors
    ///
    /// Returns an error if the trade does not exist or the caller is not
    /// party to it.
    pub async fn execute(
        &self,
        request: AvailableActionsRequest,
    ) -> ApplicationResult<AvailableActionsResponse> {
        let trade = self
            .trade_repository
            .get(&request.trade_id)
            .await?
            .ok_or_else(|| ApplicationError::trade_not_found(request.trade_id.to_string()))?;

        let caller = UserId::new(&request.caller_id);
        let role = trade.role_of(&caller).ok_or_else(|| {
            ApplicationError::not_a_participant(request.trade_id.to_string(), &request.caller_id)
        })?;

        let actions = TradeLifecycle::available_actions(
            role,
            trade.status(),
            trade.offered_object_ids().len(),
        );

        Ok(AvailableActionsResponse {
            trade_id: trade.id(),
            role,
            actions,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Trade;
    use crate::domain::value_objects::{ObjectId, TradeAction, TradeCommand, TradeRole};
    use crate::infrastructure::persistence::InMemoryTradeRepository;

    async fn setup() -> (ListActionsUseCase, Arc<InMemoryTradeRepository>, Trade) {
        let repository = Arc::new(InMemoryTradeRepository::new());
        let use_case = ListActionsUseCase::new(repository.clone());

        let trade = Trade::new(
            UserId::new("user-1"),
            UserId::new("user-2"),
            vec![ObjectId::new("obj-1")],
        )
        .unwrap();
        repository.save(&trade).await.unwrap();

        (use_case, repository, trade)
    }

    #[tokio::test]
    async fn requester_sees_cancel_on_pending_trade() {
        let (use_case, _repository, trade) = setup().await;

        let response = use_case
            .execute(AvailableActionsRequest::new(trade.id(), "user-1"))
            .await
            .unwrap();

        assert_eq!(response.role, TradeRole::Requester);
        assert_eq!(response.actions, vec![TradeAction::CancelRequest]);
    }

    #[tokio::test]
    async fn owner_sees_counter_and_refuse_on_pending_trade() {
        let (use_case, _repository, trade) = setup().await;

        let response = use_case
            .execute(AvailableActionsRequest::new(trade.id(), "user-2"))
            .await
            .unwrap();

        assert_eq!(response.role, TradeRole::Owner);
        assert_eq!(
            response.actions,
            vec![TradeAction::ProposeCounterObject, TradeAction::RefuseRequest]
        );
    }

    #[tokio::test]
    async fn owner_sees_no_action_after_proposing() {
        let (use_case, repository, trade) = setup().await;

        let proposed = crate::domain::services::TradeLifecycle::transition(
            trade,
            TradeRole::Owner,
            &TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-9")]),
        )
        .unwrap();
        repository.save(&proposed).await.unwrap();

        let response = use_case
            .execute(AvailableActionsRequest::new(proposed.id(), "user-2"))
            .await
            .unwrap();

        assert_eq!(response.actions, vec![TradeAction::NoAction]);
    }

    #[tokio::test]
    async fn unknown_trade_fails_with_not_found() {
        let (use_case, _repository, _trade) = setup().await;

        let result = use_case
            .execute(AvailableActionsRequest::new(TradeId::new_v4(), "user-1"))
            .await;

        assert!(matches!(result, Err(ApplicationError::TradeNotFound(_))));
    }

    #[tokio::test]
    async fn stranger_fails_with_not_a_participant() {
        let (use_case, _repository, trade) = setup().await;

        let result = use_case
            .execute(AvailableActionsRequest::new(trade.id(), "user-99"))
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotAParticipant { .. })
        ));
    }
}

//! # Apply Trade Action Use Case
//!
//! Applies a party's action to an existing trade.
//!
//! Orchestrates the transition workflow:
//! 1. Load the trade snapshot
//! 2. Resolve the caller's role against the participants
//! 3. Run the lifecycle transition
//! 4. Persist the new snapshot (stale writes become retryable conflicts)
//! 5. Publish the matching domain event

use crate::application::dto::{TradeActionRequest, TradeActionResponse};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::use_cases::create_trade::TradeEventPublisher;
use crate::config::TradeConfig;
use crate::domain::entities::Trade;
use crate::domain::errors::DomainError;
use crate::domain::events::TradeEvent;
use crate::domain::services::TradeLifecycle;
use crate::domain::value_objects::{TradeCommand, UserId};
use crate::infrastructure::persistence::TradeRepository;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for acting on an existing trade.
#[derive(Debug)]
pub struct ApplyTradeActionUseCase {
    trade_repository: Arc<dyn TradeRepository>,
    event_publisher: Arc<dyn TradeEventPublisher>,
    config: TradeConfig,
}

impl ApplyTradeActionUseCase {
    /// Creates a new ApplyTradeActionUseCase with all dependencies.
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

    /// Executes the apply trade action use case.
    ///
    /// # Arguments
    ///
    /// * `request` - The trade action request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Request validation fails
    /// - The trade does not exist
    /// - The caller is not party to the trade
    /// - The action is not in the caller's menu, the trade already
    ///   concluded, or the counter-offer is empty
    /// - The stored trade changed between read and write (`ConflictRetry`)
    /// - Event publishing fails
    pub async fn execute(
        &self,
        request: TradeActionRequest,
    ) -> ApplicationResult<TradeActionResponse> {
        // 1. Validate request and build the command
        request.validate().map_err(ApplicationError::validation)?;
        let command = request.to_command().map_err(ApplicationError::validation)?;

        if let TradeCommand::ProposeCounterObject(object_ids) = &command
            && object_ids.len() > self.config.max_objects_per_side
        {
            return Err(DomainError::TooManyObjects {
                limit: self.config.max_objects_per_side,
                actual: object_ids.len(),
            }
            .into());
        }

        // 2. Load the trade snapshot
        let trade = self
            .trade_repository
            .get(&request.trade_id)
            .await?
            .ok_or_else(|| ApplicationError::trade_not_found(request.trade_id.to_string()))?;

        // 3. Resolve the caller's role
        let caller = UserId::new(&request.caller_id);
        let role = trade.role_of(&caller).ok_or_else(|| {
            ApplicationError::not_a_participant(request.trade_id.to_string(), &request.caller_id)
        })?;

        // 4. Run the lifecycle transition
        let status_before = trade.status();
        let updated = TradeLifecycle::transition(trade, role, &command)?;

        if !status_before.can_transition_to(updated.status()) {
            // The offer-presence menu can permit jumps the nominal status
            // graph does not list, e.g. accepting straight from pending
            // when offered objects linger.
            warn!(
                trade_id = %updated.id(),
                from = %status_before,
                to = %updated.status(),
                action = %command,
                "transition outside the nominal status graph"
            );
        }

        // 5. Persist; stale writes surface as ConflictRetry
        self.trade_repository.save(&updated).await?;

        // 6. Publish the matching domain event
        let event = Self::event_for(&command, &updated);
        self.event_publisher
            .publish(event)
            .await
            .map_err(ApplicationError::event_publish)?;

        info!(
            trade_id = %updated.id(),
            caller = %caller,
            role = %role,
            action = %command,
            status = %updated.status(),
            "trade action applied"
        );

        Ok(TradeActionResponse::from_trade(&updated))
    }

    /// Picks the domain event describing an applied command.
    fn event_for(command: &TradeCommand, trade: &Trade) -> TradeEvent {
        match command {
            TradeCommand::CancelRequest => TradeEvent::cancelled(trade),
            TradeCommand::ProposeCounterObject(_) => TradeEvent::counter_proposed(trade),
            TradeCommand::RefuseRequest | TradeCommand::RefuseProposal => {
                TradeEvent::refused(trade)
            }
            TradeCommand::AcceptProposal => TradeEvent::accepted(trade),
            TradeCommand::RequestDifferentObject => TradeEvent::different_object_requested(trade),
        }
    }
}

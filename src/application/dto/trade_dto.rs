//! # Trade DTOs
//!
//! Data transfer objects for trade operations.
//!
//! These DTOs decouple the API layer from the domain layer, providing
//! validation and serialization for trade-related requests and responses.

use crate::domain::entities::Trade;
use crate::domain::value_objects::{
    ObjectId, Timestamp, TradeAction, TradeCommand, TradeId, TradeRole, TradeStatus, UserId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to open a new trade negotiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTradeRequest {
    /// The account initiating the request.
    pub requester_id: String,
    /// The account holding the requested objects.
    pub owner_id: String,
    /// The objects the requester wants.
    pub requested_object_ids: Vec<String>,
}

impl CreateTradeRequest {
    /// Creates a new CreateTradeRequest.
    #[must_use]
    pub fn new(
        requester_id: impl Into<String>,
        owner_id: impl Into<String>,
        requested_object_ids: Vec<String>,
    ) -> Self {
        Self {
            requester_id: requester_id.into(),
            owner_id: owner_id.into(),
            requested_object_ids,
        }
    }

    /// Validates the request fields.
    ///
    /// # Errors
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.requester_id.is_empty() {
            return Err("requester_id cannot be empty".to_string());
        }

        if self.owner_id.is_empty() {
            return Err("owner_id cannot be empty".to_string());
        }

        if self.requested_object_ids.is_empty() {
            return Err("requested_object_ids cannot be empty".to_string());
        }

        if self.requested_object_ids.iter().any(String::is_empty) {
            return Err("requested_object_ids cannot contain empty ids".to_string());
        }

        Ok(())
    }

    /// Converts the request to domain types.
    #[must_use]
    pub fn to_domain_types(&self) -> (UserId, UserId, Vec<ObjectId>) {
        (
            UserId::new(&self.requester_id),
            UserId::new(&self.owner_id),
            self.requested_object_ids
                .iter()
                .map(ObjectId::new)
                .collect(),
        )
    }
}

impl fmt::Display for CreateTradeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CreateTradeRequest {{ {} -> {}, {} object(s) }}",
            self.requester_id,
            self.owner_id,
            self.requested_object_ids.len()
        )
    }
}

/// Response after opening a trade negotiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTradeResponse {
    /// The created trade ID.
    pub trade_id: TradeId,
    /// Status of the new trade.
    pub status: TradeStatus,
    /// When the trade was created.
    pub created_at: Timestamp,
}

impl CreateTradeResponse {
    /// Builds the response from a persisted trade.
    #[must_use]
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            trade_id: trade.id(),
            status: trade.status(),
            created_at: trade.created_at(),
        }
    }
}

impl fmt::Display for CreateTradeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CreateTradeResponse {{ trade_id: {}, status: {} }}",
            self.trade_id, self.status
        )
    }
}

/// Request to act on an existing trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeActionRequest {
    /// The trade being acted on.
    pub trade_id: TradeId,
    /// The caller's account.
    pub caller_id: String,
    /// The menu action being exercised.
    pub action: TradeAction,
    /// Objects for a counter-proposal; ignored for other actions.
    #[serde(default)]
    pub offered_object_ids: Vec<String>,
}

impl TradeActionRequest {
    /// Creates a new TradeActionRequest.
    #[must_use]
    pub fn new(trade_id: TradeId, caller_id: impl Into<String>, action: TradeAction) -> Self {
        Self {
            trade_id,
            caller_id: caller_id.into(),
            action,
            offered_object_ids: Vec::new(),
        }
    }

    /// Attaches counter-proposal objects to the request.
    #[must_use]
    pub fn with_offer(mut self, offered_object_ids: Vec<String>) -> Self {
        self.offered_object_ids = offered_object_ids;
        self
    }

    /// Validates the request fields.
    ///
    /// # Errors
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.caller_id.is_empty() {
            return Err("caller_id cannot be empty".to_string());
        }

        if self.offered_object_ids.iter().any(String::is_empty) {
            return Err("offered_object_ids cannot contain empty ids".to_string());
        }

        Ok(())
    }

    /// Converts the request into a lifecycle command.
    ///
    /// Offer emptiness is judged by the lifecycle, not here, so the typed
    /// failure reaches the caller.
    ///
    /// # Errors
    ///
    /// Returns an error message for the [`TradeAction::NoAction`] sentinel,
    /// which is display-only and cannot be submitted.
    pub fn to_command(&self) -> Result<TradeCommand, String> {
        let command = match self.action {
            TradeAction::CancelRequest => TradeCommand::CancelRequest,
            TradeAction::ProposeCounterObject => TradeCommand::ProposeCounterObject(
                self.offered_object_ids.iter().map(ObjectId::new).collect(),
            ),
            TradeAction::RefuseRequest => TradeCommand::RefuseRequest,
            TradeAction::AcceptProposal => TradeCommand::AcceptProposal,
            TradeAction::RefuseProposal => TradeCommand::RefuseProposal,
            TradeAction::RequestDifferentObject => TradeCommand::RequestDifferentObject,
            TradeAction::NoAction => return Err("NO_ACTION cannot be submitted".to_string()),
        };
        Ok(command)
    }
}

impl fmt::Display for TradeActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeActionRequest {{ trade: {}, caller: {}, action: {} }}",
            self.trade_id, self.caller_id, self.action
        )
    }
}

/// Response after acting on a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeActionResponse {
    /// The trade that was acted on.
    pub trade_id: TradeId,
    /// Status after the transition.
    pub status: TradeStatus,
    /// Offered objects after the transition.
    pub offered_object_ids: Vec<ObjectId>,
    /// Version after the transition.
    pub version: u64,
    /// When the trade was last updated.
    pub updated_at: Timestamp,
}

impl TradeActionResponse {
    /// Builds the response from the updated trade.
    #[must_use]
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            trade_id: trade.id(),
            status: trade.status(),
            offered_object_ids: trade.offered_object_ids().to_vec(),
            version: trade.version(),
            updated_at: trade.updated_at(),
        }
    }
}

impl fmt::Display for TradeActionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeActionResponse {{ trade_id: {}, status: {} }}",
            self.trade_id, self.status
        )
    }
}

/// The action menu computed for one viewer of a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableActionsResponse {
    /// The trade the menu was computed for.
    pub trade_id: TradeId,
    /// The viewer's role in the trade.
    pub role: TradeRole,
    /// The ordered menu; never empty.
    pub actions: Vec<TradeAction>,
}

impl fmt::Display for AvailableActionsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AvailableActionsResponse {{ trade_id: {}, role: {}, {} action(s) }}",
            self.trade_id,
            self.role,
            self.actions.len()
        )
    }
}

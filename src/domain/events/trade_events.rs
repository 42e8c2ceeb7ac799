//! # Trade Events
//!
//! Events emitted for every trade mutation, consumed by the notification
//! and audit glue.

use crate::domain::entities::Trade;
use crate::domain::value_objects::{EventId, ObjectId, Timestamp, TradeId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeEventKind {
    /// A requester opened a new negotiation.
    Requested {
        /// The initiating party.
        requester_id: UserId,
        /// The party holding the requested objects.
        owner_id: UserId,
        /// The objects the requester asked for.
        requested_object_ids: Vec<ObjectId>,
    },
    /// The owner offered alternate objects.
    CounterProposed {
        /// The objects the owner offered.
        offered_object_ids: Vec<ObjectId>,
    },
    /// The requester agreed to the counter-offer.
    Accepted,
    /// One party declined.
    Refused,
    /// The requester withdrew.
    Cancelled,
    /// The requester asked for another counter-offer.
    DifferentObjectRequested,
}

impl TradeEventKind {
    /// Returns the event name used in logs and subscriptions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Requested { .. } => "trade_requested",
            Self::CounterProposed { .. } => "counter_proposed",
            Self::Accepted => "trade_accepted",
            Self::Refused => "trade_refused",
            Self::Cancelled => "trade_cancelled",
            Self::DifferentObjectRequested => "different_object_requested",
        }
    }
}

/// A domain event attached to one trade.
///
/// Carries the identity and time metadata every subscriber needs; the
/// payload lives in [`TradeEventKind`].
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::entities::Trade;
/// use cadok_trades::domain::events::TradeEvent;
/// use cadok_trades::domain::value_objects::{ObjectId, UserId};
///
/// let trade = Trade::new(
///     UserId::new("user-1"),
///     UserId::new("user-2"),
///     vec![ObjectId::new("obj-9")],
/// )
/// .unwrap();
///
/// let event = TradeEvent::requested(&trade);
/// assert_eq!(event.trade_id(), trade.id());
/// assert_eq!(event.kind().name(), "trade_requested");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeEvent {
    event_id: EventId,
    trade_id: TradeId,
    occurred_at: Timestamp,
    kind: TradeEventKind,
}

impl TradeEvent {
    /// Creates an event with a fresh identity for the given trade.
    #[must_use]
    pub fn new(trade_id: TradeId, kind: TradeEventKind) -> Self {
        Self {
            event_id: EventId::new_v4(),
            trade_id,
            occurred_at: Timestamp::now(),
            kind,
        }
    }

    /// Event for a newly opened negotiation.
    #[must_use]
    pub fn requested(trade: &Trade) -> Self {
        Self::new(
            trade.id(),
            TradeEventKind::Requested {
                requester_id: trade.requester_id().clone(),
                owner_id: trade.owner_id().clone(),
                requested_object_ids: trade.requested_object_ids().to_vec(),
            },
        )
    }

    /// Event for an owner's counter-proposal.
    #[must_use]
    pub fn counter_proposed(trade: &Trade) -> Self {
        Self::new(
            trade.id(),
            TradeEventKind::CounterProposed {
                offered_object_ids: trade.offered_object_ids().to_vec(),
            },
        )
    }

    /// Event for an accepted proposal.
    #[must_use]
    pub fn accepted(trade: &Trade) -> Self {
        Self::new(trade.id(), TradeEventKind::Accepted)
    }

    /// Event for a refusal from either side.
    #[must_use]
    pub fn refused(trade: &Trade) -> Self {
        Self::new(trade.id(), TradeEventKind::Refused)
    }

    /// Event for a withdrawn request.
    #[must_use]
    pub fn cancelled(trade: &Trade) -> Self {
        Self::new(trade.id(), TradeEventKind::Cancelled)
    }

    /// Event for a looped-back negotiation.
    #[must_use]
    pub fn different_object_requested(trade: &Trade) -> Self {
        Self::new(trade.id(), TradeEventKind::DifferentObjectRequested)
    }

    /// Returns the event identifier.
    #[inline]
    #[must_use]
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the trade this event belongs to.
    #[inline]
    #[must_use]
    pub fn trade_id(&self) -> TradeId {
        self.trade_id
    }

    /// Returns when the event occurred.
    #[inline]
    #[must_use]
    pub fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    /// Returns the event payload.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &TradeEventKind {
        &self.kind
    }
}

impl fmt::Display for TradeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.trade_id)
    }
}

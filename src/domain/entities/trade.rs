//! # Trade Aggregate
//!
//! Represents one negotiation between two parties over one or more objects.
//!
//! This module provides the [`Trade`] aggregate: participants, the
//! requested and offered object sets, the lifecycle status and the
//! optimistic-locking version.
//!
//! All status mutation goes through
//! [`TradeLifecycle`](crate::domain::services::TradeLifecycle), which
//! validates the caller's role and the requested action before applying
//! the effect; the mutators on this type are crate-internal.
//!
//! # Examples
//!
//! ```
//! use cadok_trades::domain::entities::trade::Trade;
//! use cadok_trades::domain::value_objects::{ObjectId, UserId};
//!
//! let trade = Trade::new(
//!     UserId::new("user-1"),
//!     UserId::new("user-2"),
//!     vec![ObjectId::new("obj-9")],
//! )
//! .unwrap();
//!
//! assert!(trade.is_pending());
//! assert!(trade.offered_object_ids().is_empty());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ObjectId, Timestamp, TradeId, TradeRole, TradeStatus, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One negotiation between a requester and an owner.
///
/// # Invariants
///
/// - Participants are distinct and never change.
/// - `status` is mutated only through lifecycle transitions; every
///   mutation refreshes `updated_at` and bumps `version`.
/// - Offered objects are introduced only by a counter-proposal and
///   cleared when the requester loops the trade back to pending.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::entities::trade::Trade;
/// use cadok_trades::domain::value_objects::{ObjectId, UserId};
///
/// let trade = Trade::new(
///     UserId::new("user-1"),
///     UserId::new("user-2"),
///     vec![ObjectId::new("obj-9"), ObjectId::new("obj-10")],
/// )
/// .unwrap();
///
/// assert_eq!(trade.version(), 1);
/// assert_eq!(trade.requested_object_ids().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier for this trade.
    id: TradeId,
    /// The party who initiated the request.
    requester_id: UserId,
    /// The party who holds the requested objects.
    owner_id: UserId,
    /// Current lifecycle status.
    status: TradeStatus,
    /// Objects the requester asked for.
    requested_object_ids: Vec<ObjectId>,
    /// Objects the owner offered in a counter-proposal.
    offered_object_ids: Vec<ObjectId>,
    /// Version for optimistic locking.
    version: u64,
    /// When this trade was created.
    created_at: Timestamp,
    /// When this trade was last updated.
    updated_at: Timestamp,
}

impl Trade {
    /// Creates a new trade in `Pending`, initiated by the requester.
    ///
    /// # Arguments
    ///
    /// * `requester_id` - The party initiating the request
    /// * `owner_id` - The party holding the requested objects
    /// * `requested_object_ids` - The objects the requester wants
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SameParticipant`] if both sides resolve to
    /// the same account, or [`DomainError::EmptyRequest`] if no objects
    /// are named.
    pub fn new(
        requester_id: UserId,
        owner_id: UserId,
        requested_object_ids: Vec<ObjectId>,
    ) -> DomainResult<Self> {
        if requester_id == owner_id {
            return Err(DomainError::SameParticipant(requester_id.into_inner()));
        }
        if requested_object_ids.is_empty() {
            return Err(DomainError::EmptyRequest);
        }

        let now = Timestamp::now();
        Ok(Self {
            id: TradeId::new_v4(),
            requester_id,
            owner_id,
            status: TradeStatus::Pending,
            requested_object_ids,
            offered_object_ids: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a trade with explicit fields (for reconstruction from storage).
    ///
    /// Bypasses creation validation; use only when rebuilding from a
    /// trusted store.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: TradeId,
        requester_id: UserId,
        owner_id: UserId,
        status: TradeStatus,
        requested_object_ids: Vec<ObjectId>,
        offered_object_ids: Vec<ObjectId>,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            requester_id,
            owner_id,
            status,
            requested_object_ids,
            offered_object_ids,
            version,
            created_at,
            updated_at,
        }
    }

    // ========== Accessors ==========

    /// Returns the trade ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TradeId {
        self.id
    }

    /// Returns the requester's account ID.
    #[inline]
    #[must_use]
    pub fn requester_id(&self) -> &UserId {
        &self.requester_id
    }

    /// Returns the owner's account ID.
    #[inline]
    #[must_use]
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the current lifecycle status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> TradeStatus {
        self.status
    }

    /// Returns the objects the requester asked for.
    #[inline]
    #[must_use]
    pub fn requested_object_ids(&self) -> &[ObjectId] {
        &self.requested_object_ids
    }

    /// Returns the objects offered in the current counter-proposal.
    #[inline]
    #[must_use]
    pub fn offered_object_ids(&self) -> &[ObjectId] {
        &self.offered_object_ids
    }

    /// Returns the version for optimistic locking.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns when this trade was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this trade was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========== Participants ==========

    /// Resolves a caller's role relative to this trade.
    ///
    /// Returns `None` for accounts that are not party to the negotiation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::entities::trade::Trade;
    /// use cadok_trades::domain::value_objects::{ObjectId, TradeRole, UserId};
    ///
    /// let trade = Trade::new(
    ///     UserId::new("user-1"),
    ///     UserId::new("user-2"),
    ///     vec![ObjectId::new("obj-9")],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(trade.role_of(&UserId::new("user-1")), Some(TradeRole::Requester));
    /// assert_eq!(trade.role_of(&UserId::new("user-2")), Some(TradeRole::Owner));
    /// assert_eq!(trade.role_of(&UserId::new("user-3")), None);
    /// ```
    #[must_use]
    pub fn role_of(&self, user_id: &UserId) -> Option<TradeRole> {
        if *user_id == self.requester_id {
            Some(TradeRole::Requester)
        } else if *user_id == self.owner_id {
            Some(TradeRole::Owner)
        } else {
            None
        }
    }

    /// Returns true if the account is party to this trade.
    #[inline]
    #[must_use]
    pub fn is_participant(&self, user_id: &UserId) -> bool {
        self.role_of(user_id).is_some()
    }

    // ========== State Helpers ==========

    /// Returns true if the trade awaits the owner's response.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TradeStatus::Pending
    }

    /// Returns true if a counter-proposal awaits the requester's response.
    #[inline]
    #[must_use]
    pub fn is_proposed(&self) -> bool {
        self.status == TradeStatus::Proposed
    }

    /// Returns true if both parties agreed on the exchange.
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == TradeStatus::Accepted
    }

    /// Returns true if one party declined.
    #[inline]
    #[must_use]
    pub fn is_refused(&self) -> bool {
        self.status == TradeStatus::Refused
    }

    /// Returns true if the requester withdrew.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == TradeStatus::Cancelled
    }

    /// Returns true if this trade is in a terminal status.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ========== Mutation (crate-internal; gated by the lifecycle) ==========

    /// Applies a status, refreshing `updated_at` and bumping the version.
    fn apply_status(&mut self, target: TradeStatus) {
        self.status = target;
        self.updated_at = Timestamp::now();
        self.version = self.version.saturating_add(1);
    }

    /// The requester withdraws the request.
    pub(crate) fn cancel(&mut self) {
        self.apply_status(TradeStatus::Cancelled);
    }

    /// Either side declines.
    pub(crate) fn refuse(&mut self) {
        self.apply_status(TradeStatus::Refused);
    }

    /// The requester agrees to the counter-offer.
    pub(crate) fn accept(&mut self) {
        self.apply_status(TradeStatus::Accepted);
    }

    /// The owner offers alternate objects, moving the trade to `Proposed`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyOffer`] if no objects are offered.
    pub(crate) fn propose_counter(&mut self, object_ids: Vec<ObjectId>) -> DomainResult<()> {
        if object_ids.is_empty() {
            return Err(DomainError::EmptyOffer);
        }
        self.offered_object_ids = object_ids;
        self.apply_status(TradeStatus::Proposed);
        Ok(())
    }

    /// The requester rejects the offered objects and loops the trade back
    /// to `Pending` for a new counter-offer. Clears the offered set.
    pub(crate) fn request_different_object(&mut self) {
        self.offered_object_ids.clear();
        self.apply_status(TradeStatus::Pending);
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade({} {} -> {} [{}])",
            self.id, self.requester_id, self.owner_id, self.status
        )
    }
}

//! # Trade Status
//!
//! Trade negotiation lifecycle state machine.
//!
//! This module provides the [`TradeStatus`] enum representing the lifecycle
//! of a trade negotiation between a requester and an owner.
//!
//! # State Machine
//!
//! ```text
//! pending ⇄ proposed
//!    ↓         ↓
//! cancelled  accepted
//!    refused ←─┘ (refusable from both sides)
//! ```
//!
//! The `proposed → pending` edge is the "request something else" loop: the
//! requester rejects the counter-offer and asks the owner to propose again.
//!
//! # Examples
//!
//! ```
//! use cadok_trades::domain::value_objects::trade_status::TradeStatus;
//!
//! let status = TradeStatus::Pending;
//! assert!(status.can_transition_to(TradeStatus::Proposed));
//! assert!(!status.can_transition_to(TradeStatus::Accepted));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade negotiation lifecycle status.
///
/// Represents the current status of a trade between two participants.
/// The nominal transition graph is described by
/// [`can_transition_to`](TradeStatus::can_transition_to).
///
/// # Terminal States
///
/// The following statuses are terminal (no further transitions allowed):
/// - [`Accepted`](TradeStatus::Accepted) - Both parties agreed on the exchange
/// - [`Refused`](TradeStatus::Refused) - One party declined
/// - [`Cancelled`](TradeStatus::Cancelled) - The requester withdrew
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::trade_status::TradeStatus;
///
/// let status = TradeStatus::Proposed;
/// assert!(!status.is_terminal());
///
/// let terminal = TradeStatus::Accepted;
/// assert!(terminal.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TradeStatus {
    /// Trade requested, awaiting the owner's response.
    #[default]
    Pending = 0,

    /// The owner proposed counter objects, awaiting the requester's response.
    Proposed = 1,

    /// Both parties agreed on the exchange (terminal).
    Accepted = 2,

    /// One party declined the request or the proposal (terminal).
    Refused = 3,

    /// The requester withdrew the request (terminal).
    Cancelled = 4,
}

impl TradeStatus {
    /// Returns true if this is a terminal status.
    ///
    /// Terminal statuses cannot transition to any other status.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::value_objects::trade_status::TradeStatus;
    ///
    /// assert!(!TradeStatus::Pending.is_terminal());
    /// assert!(!TradeStatus::Proposed.is_terminal());
    /// assert!(TradeStatus::Accepted.is_terminal());
    /// assert!(TradeStatus::Refused.is_terminal());
    /// assert!(TradeStatus::Cancelled.is_terminal());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Refused | Self::Cancelled)
    }

    /// Returns true if this status can transition to the target status
    /// along the nominal negotiation graph:
    ///
    /// - Pending → Proposed, Cancelled, Refused
    /// - Proposed → Accepted, Refused, Pending
    /// - Terminal statuses → (none)
    ///
    /// The role-conditioned action menu is the authoritative gate for
    /// mutations ([`TradeLifecycle`](crate::domain::services::TradeLifecycle));
    /// this predicate describes the expected graph and is used to flag
    /// transitions that leave it.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::value_objects::trade_status::TradeStatus;
    ///
    /// // The counter-offer loop
    /// assert!(TradeStatus::Proposed.can_transition_to(TradeStatus::Pending));
    ///
    /// // Terminal statuses cannot transition
    /// assert!(!TradeStatus::Accepted.can_transition_to(TradeStatus::Pending));
    /// ```
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            // From Pending
            (Self::Pending, Self::Proposed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Pending, Self::Refused)
                // From Proposed
                | (Self::Proposed, Self::Accepted)
                | (Self::Proposed, Self::Refused)
                | (Self::Proposed, Self::Pending)
        )
    }

    /// Returns the valid next statuses from this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::value_objects::trade_status::TradeStatus;
    ///
    /// let transitions = TradeStatus::Pending.valid_transitions();
    /// assert!(transitions.contains(&TradeStatus::Proposed));
    /// assert!(transitions.contains(&TradeStatus::Cancelled));
    /// ```
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Pending => vec![Self::Proposed, Self::Cancelled, Self::Refused],
            Self::Proposed => vec![Self::Accepted, Self::Refused, Self::Pending],
            // Terminal statuses have no valid transitions
            Self::Accepted | Self::Refused | Self::Cancelled => vec![],
        }
    }

    /// Returns true if this is an active (non-terminal) status.
    ///
    /// Convenience method, equivalent to `!is_terminal()`.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if the trade is waiting on the owner.
    #[inline]
    #[must_use]
    pub const fn is_awaiting_owner(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the trade is waiting on the requester.
    #[inline]
    #[must_use]
    pub const fn is_awaiting_requester(&self) -> bool {
        matches!(self, Self::Proposed)
    }

    /// Returns true if the negotiation concluded with an agreement.
    #[inline]
    #[must_use]
    pub const fn is_agreed(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the numeric value of this status.
    #[inline]
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Proposed => "PROPOSED",
            Self::Accepted => "ACCEPTED",
            Self::Refused => "REFUSED",
            Self::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<u8> for TradeStatus {
    type Error = InvalidTradeStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Proposed),
            2 => Ok(Self::Accepted),
            3 => Ok(Self::Refused),
            4 => Ok(Self::Cancelled),
            _ => Err(InvalidTradeStatusError(value)),
        }
    }
}

/// Error returned when converting an invalid u8 to TradeStatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTradeStatusError(pub u8);

impl fmt::Display for InvalidTradeStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid trade status value: {}", self.0)
    }
}

impl std::error::Error for InvalidTradeStatusError {}

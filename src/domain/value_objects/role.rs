//! # Trade Role
//!
//! The position a participant holds in a trade negotiation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a participant relative to a trade.
///
/// Resolved by comparing the caller's account identifier against the
/// trade's participants; the action menu and transition rules are
/// conditioned on it.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::role::TradeRole;
///
/// let role = TradeRole::Requester;
/// assert!(role.is_requester());
/// assert_eq!(role.counterpart(), TradeRole::Owner);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeRole {
    /// The party who initiated the trade request.
    Requester,
    /// The party who holds the originally requested objects.
    Owner,
}

impl TradeRole {
    /// Returns true for the requester side.
    #[inline]
    #[must_use]
    pub const fn is_requester(&self) -> bool {
        matches!(self, Self::Requester)
    }

    /// Returns true for the owner side.
    #[inline]
    #[must_use]
    pub const fn is_owner(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Returns the opposite role.
    #[inline]
    #[must_use]
    pub const fn counterpart(&self) -> Self {
        match self {
            Self::Requester => Self::Owner,
            Self::Owner => Self::Requester,
        }
    }
}

impl fmt::Display for TradeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Requester => "REQUESTER",
            Self::Owner => "OWNER",
        };
        write!(f, "{}", s)
    }
}

//! # Trade Actions
//!
//! Menu entries and transition commands for the trade negotiation.
//!
//! [`TradeAction`] is what a client renders: the flat, role-conditioned
//! menu computed by
//! [`TradeLifecycle::available_actions`](crate::domain::services::TradeLifecycle::available_actions).
//! [`TradeCommand`] is what a client submits back: the same vocabulary,
//! carrying the payload a transition needs (the counter-offer's object
//! ids). Every command maps onto exactly one menu action via
//! [`TradeCommand::action`].

use crate::domain::value_objects::ids::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An entry in the role-conditioned action menu.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::action::TradeAction;
///
/// assert_eq!(TradeAction::AcceptProposal.to_string(), "ACCEPT_PROPOSAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    /// Requester withdraws the trade request.
    CancelRequest,
    /// Owner offers alternate objects in exchange.
    ProposeCounterObject,
    /// Owner declines the initial request.
    RefuseRequest,
    /// Requester agrees to the counter-offer.
    AcceptProposal,
    /// Requester declines the counter-offer.
    RefuseProposal,
    /// Requester rejects the offered objects and asks for another proposal.
    RequestDifferentObject,
    /// Sentinel for a party with nothing to do; the menu is never empty.
    NoAction,
}

impl TradeAction {
    /// Returns true for the [`NoAction`](TradeAction::NoAction) sentinel.
    #[inline]
    #[must_use]
    pub const fn is_no_action(&self) -> bool {
        matches!(self, Self::NoAction)
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CancelRequest => "CANCEL_REQUEST",
            Self::ProposeCounterObject => "PROPOSE_COUNTER_OBJECT",
            Self::RefuseRequest => "REFUSE_REQUEST",
            Self::AcceptProposal => "ACCEPT_PROPOSAL",
            Self::RefuseProposal => "REFUSE_PROPOSAL",
            Self::RequestDifferentObject => "REQUEST_DIFFERENT_OBJECT",
            Self::NoAction => "NO_ACTION",
        };
        write!(f, "{}", s)
    }
}

/// A transition request submitted by one of the parties.
///
/// Carries the payload the transition needs; everything else about the
/// transition (role and status checks, side effects) lives in
/// [`TradeLifecycle`](crate::domain::services::TradeLifecycle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeCommand {
    /// Withdraw the trade request.
    CancelRequest,
    /// Offer the given objects in exchange.
    ProposeCounterObject(Vec<ObjectId>),
    /// Decline the initial request.
    RefuseRequest,
    /// Agree to the counter-offer.
    AcceptProposal,
    /// Decline the counter-offer.
    RefuseProposal,
    /// Reject the offered objects and ask for another proposal.
    RequestDifferentObject,
}

impl TradeCommand {
    /// Returns the menu action this command corresponds to.
    #[must_use]
    pub const fn action(&self) -> TradeAction {
        match self {
            Self::CancelRequest => TradeAction::CancelRequest,
            Self::ProposeCounterObject(_) => TradeAction::ProposeCounterObject,
            Self::RefuseRequest => TradeAction::RefuseRequest,
            Self::AcceptProposal => TradeAction::AcceptProposal,
            Self::RefuseProposal => TradeAction::RefuseProposal,
            Self::RequestDifferentObject => TradeAction::RequestDifferentObject,
        }
    }
}

impl fmt::Display for TradeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action())
    }
}

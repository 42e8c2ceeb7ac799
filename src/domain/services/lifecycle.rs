//! # Trade Lifecycle
//!
//! The trade negotiation's action menu and transition rules.
//!
//! [`TradeLifecycle`] owns two operations:
//!
//! - [`available_actions`](TradeLifecycle::available_actions): given a
//!   viewer's role, the trade's status and the size of the offered set,
//!   compute the ordered menu of actions that viewer may take. Pure and
//!   total: the menu is never empty, falling back to
//!   [`TradeAction::NoAction`].
//! - [`transition`](TradeLifecycle::transition): validate a submitted
//!   command against that menu and apply its effect to a trade snapshot,
//!   returning the updated snapshot.
//!
//! The menu is computed from an ordered list of independent conditions
//! rather than a status dispatch table; a later matching condition
//! replaces the menu assigned by an earlier one. In particular the
//! requester's proposal menu fires on a non-empty offered set regardless
//! of status, so a trade still marked pending that carries offered
//! objects exposes the proposal actions. Callers that want to detect a
//! resulting off-graph transition can compare statuses with
//! [`TradeStatus::can_transition_to`].
//!
//! Persistence and concurrency are the caller's concern: this service
//! consumes a consistent snapshot and produces a new one; the storage
//! layer is expected to reject stale writes via the trade's version.
//!
//! # Examples
//!
//! ```
//! use cadok_trades::domain::services::TradeLifecycle;
//! use cadok_trades::domain::value_objects::{TradeAction, TradeRole, TradeStatus};
//!
//! let menu = TradeLifecycle::available_actions(TradeRole::Requester, TradeStatus::Pending, 0);
//! assert_eq!(menu, vec![TradeAction::CancelRequest]);
//! ```

use crate::domain::entities::Trade;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{TradeAction, TradeCommand, TradeRole, TradeStatus};

/// Action menu computation and transition validation for trades.
///
/// Stateless; both operations are associated functions.
#[derive(Debug, Clone, Copy)]
pub struct TradeLifecycle;

impl TradeLifecycle {
    /// Computes the ordered action menu for one viewer.
    ///
    /// # Arguments
    ///
    /// * `role` - The viewer's role relative to the trade
    /// * `status` - The trade's current status
    /// * `offered_object_count` - Size of the trade's offered set
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::services::TradeLifecycle;
    /// use cadok_trades::domain::value_objects::{TradeAction, TradeRole, TradeStatus};
    ///
    /// // The owner of a pending request can counter or refuse
    /// let menu = TradeLifecycle::available_actions(TradeRole::Owner, TradeStatus::Pending, 0);
    /// assert_eq!(
    ///     menu,
    ///     vec![TradeAction::ProposeCounterObject, TradeAction::RefuseRequest]
    /// );
    ///
    /// // An owner awaiting the requester's answer has nothing to do
    /// let menu = TradeLifecycle::available_actions(TradeRole::Owner, TradeStatus::Proposed, 1);
    /// assert_eq!(menu, vec![TradeAction::NoAction]);
    /// ```
    #[must_use]
    pub fn available_actions(
        role: TradeRole,
        status: TradeStatus,
        offered_object_count: usize,
    ) -> Vec<TradeAction> {
        let mut actions: Vec<TradeAction> = Vec::new();

        if role.is_requester() && status == TradeStatus::Pending {
            actions = vec![TradeAction::CancelRequest];
        }
        if role.is_owner() && status == TradeStatus::Pending {
            actions = vec![TradeAction::ProposeCounterObject, TradeAction::RefuseRequest];
        }
        // Offer presence wins over status: offered objects expose the
        // proposal menu to the requester even while the status lags at
        // pending.
        if role.is_requester() && (status == TradeStatus::Proposed || offered_object_count > 0) {
            actions = vec![
                TradeAction::AcceptProposal,
                TradeAction::RefuseProposal,
                TradeAction::RequestDifferentObject,
            ];
        }

        if actions.is_empty() {
            actions.push(TradeAction::NoAction);
        }
        actions
    }

    /// Validates and applies a transition command to a trade snapshot.
    ///
    /// Checks, in order: the trade is not concluded, and the command's
    /// action appears in the caller's menu for the trade's current status
    /// and offered set. On success the effect is applied, `updated_at`
    /// is refreshed and the version is bumped.
    ///
    /// # Arguments
    ///
    /// * `trade` - The trade snapshot read from storage
    /// * `role` - The caller's role relative to the trade
    /// * `command` - The requested transition
    ///
    /// # Errors
    ///
    /// - [`DomainError::TerminalState`] if the trade already concluded
    /// - [`DomainError::InvalidTransition`] if the action is not in the
    ///   caller's menu
    /// - [`DomainError::EmptyOffer`] for a counter-proposal naming no
    ///   objects
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::entities::Trade;
    /// use cadok_trades::domain::services::TradeLifecycle;
    /// use cadok_trades::domain::value_objects::{ObjectId, TradeCommand, TradeRole, TradeStatus, UserId};
    ///
    /// let trade = Trade::new(
    ///     UserId::new("user-1"),
    ///     UserId::new("user-2"),
    ///     vec![ObjectId::new("obj-1")],
    /// )
    /// .unwrap();
    ///
    /// let command = TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-9")]);
    /// let trade = TradeLifecycle::transition(trade, TradeRole::Owner, &command).unwrap();
    /// assert_eq!(trade.status(), TradeStatus::Proposed);
    /// ```
    pub fn transition(
        mut trade: Trade,
        role: TradeRole,
        command: &TradeCommand,
    ) -> DomainResult<Trade> {
        if trade.status().is_terminal() {
            return Err(DomainError::TerminalState(trade.status()));
        }

        let menu =
            Self::available_actions(role, trade.status(), trade.offered_object_ids().len());
        if !menu.contains(&command.action()) {
            return Err(DomainError::InvalidTransition {
                role,
                status: trade.status(),
                action: command.action(),
            });
        }

        match command {
            TradeCommand::CancelRequest => trade.cancel(),
            TradeCommand::ProposeCounterObject(object_ids) => {
                trade.propose_counter(object_ids.clone())?;
            }
            TradeCommand::RefuseRequest | TradeCommand::RefuseProposal => trade.refuse(),
            TradeCommand::AcceptProposal => trade.accept(),
            TradeCommand::RequestDifferentObject => trade.request_different_object(),
        }

        Ok(trade)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ObjectId, UserId};

    fn create_test_trade() -> Trade {
        Trade::new(
            UserId::new("user-1"),
            UserId::new("user-2"),
            vec![ObjectId::new("obj-1")],
        )
        .unwrap()
    }

    fn proposed_trade() -> Trade {
        let trade = create_test_trade();
        TradeLifecycle::transition(
            trade,
            TradeRole::Owner,
            &TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-9")]),
        )
        .unwrap()
    }

    const ALL_STATUSES: [TradeStatus; 5] = [
        TradeStatus::Pending,
        TradeStatus::Proposed,
        TradeStatus::Accepted,
        TradeStatus::Refused,
        TradeStatus::Cancelled,
    ];

    mod available_actions {
        use super::*;

        #[test]
        fn requester_pending_can_cancel() {
            let menu =
                TradeLifecycle::available_actions(TradeRole::Requester, TradeStatus::Pending, 0);
            assert_eq!(menu, vec![TradeAction::CancelRequest]);
        }

        #[test]
        fn owner_pending_can_counter_or_refuse() {
            let menu = TradeLifecycle::available_actions(TradeRole::Owner, TradeStatus::Pending, 0);
            assert_eq!(
                menu,
                vec![TradeAction::ProposeCounterObject, TradeAction::RefuseRequest]
            );
        }

        #[test]
        fn requester_proposed_gets_proposal_menu() {
            let menu =
                TradeLifecycle::available_actions(TradeRole::Requester, TradeStatus::Proposed, 0);
            assert_eq!(
                menu,
                vec![
                    TradeAction::AcceptProposal,
                    TradeAction::RefuseProposal,
                    TradeAction::RequestDifferentObject,
                ]
            );
        }

        #[test]
        fn requester_pending_with_offer_gets_proposal_menu() {
            // Offer presence overrides the pending menu
            let menu =
                TradeLifecycle::available_actions(TradeRole::Requester, TradeStatus::Pending, 2);
            assert_eq!(
                menu,
                vec![
                    TradeAction::AcceptProposal,
                    TradeAction::RefuseProposal,
                    TradeAction::RequestDifferentObject,
                ]
            );
        }

        #[test]
        fn owner_proposed_has_no_action() {
            for count in [0, 1] {
                let menu =
                    TradeLifecycle::available_actions(TradeRole::Owner, TradeStatus::Proposed, count);
                assert_eq!(menu, vec![TradeAction::NoAction]);
            }
        }

        #[test]
        fn terminal_statuses_default_to_no_action_for_owner() {
            for status in [
                TradeStatus::Accepted,
                TradeStatus::Refused,
                TradeStatus::Cancelled,
            ] {
                let menu = TradeLifecycle::available_actions(TradeRole::Owner, status, 0);
                assert_eq!(menu, vec![TradeAction::NoAction]);
            }
        }

        #[test]
        fn menu_is_never_empty() {
            for status in ALL_STATUSES {
                for role in [TradeRole::Requester, TradeRole::Owner] {
                    for count in [0, 1, 3] {
                        let menu = TradeLifecycle::available_actions(role, status, count);
                        assert!(!menu.is_empty(), "{role} {status} {count}");
                    }
                }
            }
        }

        #[test]
        fn menu_is_deterministic() {
            for status in ALL_STATUSES {
                for role in [TradeRole::Requester, TradeRole::Owner] {
                    let first = TradeLifecycle::available_actions(role, status, 1);
                    let second = TradeLifecycle::available_actions(role, status, 1);
                    assert_eq!(first, second);
                }
            }
        }
    }

    mod transition {
        use super::*;

        #[test]
        fn requester_cancels_pending_trade() {
            let trade = create_test_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::CancelRequest,
            )
            .unwrap();

            assert_eq!(trade.status(), TradeStatus::Cancelled);
            assert_eq!(trade.version(), 2);
        }

        #[test]
        fn owner_refuses_pending_trade() {
            let trade = create_test_trade();
            let trade =
                TradeLifecycle::transition(trade, TradeRole::Owner, &TradeCommand::RefuseRequest)
                    .unwrap();

            assert_eq!(trade.status(), TradeStatus::Refused);
        }

        #[test]
        fn owner_proposes_counter_objects() {
            let trade = create_test_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Owner,
                &TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-9")]),
            )
            .unwrap();

            assert_eq!(trade.status(), TradeStatus::Proposed);
            assert_eq!(trade.offered_object_ids(), &[ObjectId::new("obj-9")]);
        }

        #[test]
        fn empty_counter_offer_is_rejected() {
            let trade = create_test_trade();
            let result = TradeLifecycle::transition(
                trade,
                TradeRole::Owner,
                &TradeCommand::ProposeCounterObject(vec![]),
            );

            assert!(matches!(result, Err(DomainError::EmptyOffer)));
        }

        #[test]
        fn requester_accepts_proposal() {
            let trade = proposed_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::AcceptProposal,
            )
            .unwrap();

            assert_eq!(trade.status(), TradeStatus::Accepted);
        }

        #[test]
        fn requester_refuses_proposal() {
            let trade = proposed_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::RefuseProposal,
            )
            .unwrap();

            assert_eq!(trade.status(), TradeStatus::Refused);
        }

        #[test]
        fn request_different_object_loops_back_to_pending() {
            let trade = proposed_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::RequestDifferentObject,
            )
            .unwrap();

            assert_eq!(trade.status(), TradeStatus::Pending);
            assert!(trade.offered_object_ids().is_empty());
        }

        #[test]
        fn requester_cannot_refuse_own_pending_request() {
            let trade = create_test_trade();
            let result = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::RefuseRequest,
            );

            assert!(matches!(
                result,
                Err(DomainError::InvalidTransition {
                    role: TradeRole::Requester,
                    status: TradeStatus::Pending,
                    action: TradeAction::RefuseRequest,
                })
            ));
        }

        #[test]
        fn owner_cannot_accept_own_proposal() {
            let trade = proposed_trade();
            let result =
                TradeLifecycle::transition(trade, TradeRole::Owner, &TradeCommand::AcceptProposal);

            assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));
        }

        #[test]
        fn owner_cannot_cancel() {
            let trade = create_test_trade();
            let result =
                TradeLifecycle::transition(trade, TradeRole::Owner, &TradeCommand::CancelRequest);

            assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));
        }

        #[test]
        fn terminal_trade_rejects_every_command() {
            let accepted = TradeLifecycle::transition(
                proposed_trade(),
                TradeRole::Requester,
                &TradeCommand::AcceptProposal,
            )
            .unwrap();

            let commands = [
                TradeCommand::CancelRequest,
                TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-9")]),
                TradeCommand::RefuseRequest,
                TradeCommand::AcceptProposal,
                TradeCommand::RefuseProposal,
                TradeCommand::RequestDifferentObject,
            ];

            for command in &commands {
                for role in [TradeRole::Requester, TradeRole::Owner] {
                    let result = TradeLifecycle::transition(accepted.clone(), role, command);
                    assert!(
                        matches!(result, Err(DomainError::TerminalState(TradeStatus::Accepted))),
                        "{role} {command} should hit the terminal guard"
                    );
                }
            }
        }

        #[test]
        fn accepting_twice_fails_with_terminal_state() {
            let trade = proposed_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::AcceptProposal,
            )
            .unwrap();

            let result = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::AcceptProposal,
            );
            assert!(matches!(
                result,
                Err(DomainError::TerminalState(TradeStatus::Accepted))
            ));
        }

        #[test]
        fn full_counter_offer_loop() {
            // pending -> proposed -> pending -> proposed -> accepted
            let trade = create_test_trade();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Owner,
                &TradeCommand::ProposeCounterObject(vec![
                    ObjectId::new("obj-9"),
                    ObjectId::new("obj-10"),
                ]),
            )
            .unwrap();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::RequestDifferentObject,
            )
            .unwrap();
            assert_eq!(trade.status(), TradeStatus::Pending);
            assert!(trade.offered_object_ids().is_empty());

            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Owner,
                &TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-11")]),
            )
            .unwrap();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::AcceptProposal,
            )
            .unwrap();

            assert_eq!(trade.status(), TradeStatus::Accepted);
            assert_eq!(trade.offered_object_ids(), &[ObjectId::new("obj-11")]);
            assert_eq!(trade.version(), 5);
        }

        #[test]
        fn lingering_offer_exposes_proposal_actions_on_pending_trade() {
            // A pending snapshot carrying offered objects (legacy data) lets
            // the requester act on the offer directly.
            let trade = proposed_trade();
            let stale = Trade::from_parts(
                trade.id(),
                trade.requester_id().clone(),
                trade.owner_id().clone(),
                TradeStatus::Pending,
                trade.requested_object_ids().to_vec(),
                trade.offered_object_ids().to_vec(),
                trade.version(),
                trade.created_at(),
                trade.updated_at(),
            );

            let updated = TradeLifecycle::transition(
                stale,
                TradeRole::Requester,
                &TradeCommand::AcceptProposal,
            )
            .unwrap();
            assert_eq!(updated.status(), TradeStatus::Accepted);
            // The jump skipped the proposed step; the nominal graph flags it
            assert!(!TradeStatus::Pending.can_transition_to(TradeStatus::Accepted));
        }

        #[test]
        fn updated_at_refreshes_on_transition() {
            let trade = create_test_trade();
            let created = trade.created_at();
            let trade = TradeLifecycle::transition(
                trade,
                TradeRole::Requester,
                &TradeCommand::CancelRequest,
            )
            .unwrap();
            assert!(trade.updated_at() >= created);
        }
    }

    mod properties {
        use super::*;
        use crate::domain::value_objects::Timestamp;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = TradeRole> {
            prop_oneof![Just(TradeRole::Requester), Just(TradeRole::Owner)]
        }

        fn any_status() -> impl Strategy<Value = TradeStatus> {
            prop_oneof![
                Just(TradeStatus::Pending),
                Just(TradeStatus::Proposed),
                Just(TradeStatus::Accepted),
                Just(TradeStatus::Refused),
                Just(TradeStatus::Cancelled),
            ]
        }

        fn any_command() -> impl Strategy<Value = TradeCommand> {
            prop_oneof![
                Just(TradeCommand::CancelRequest),
                Just(TradeCommand::RefuseRequest),
                Just(TradeCommand::AcceptProposal),
                Just(TradeCommand::RefuseProposal),
                Just(TradeCommand::RequestDifferentObject),
                proptest::collection::vec("obj-[a-z0-9]{1,8}", 0..4)
                    .prop_map(|ids| TradeCommand::ProposeCounterObject(
                        ids.into_iter().map(ObjectId::new).collect()
                    )),
            ]
        }

        proptest! {
            #[test]
            fn menu_is_total_and_non_empty(
                role in any_role(),
                status in any_status(),
                count in 0usize..16,
            ) {
                let menu = TradeLifecycle::available_actions(role, status, count);
                prop_assert!(!menu.is_empty());
            }

            #[test]
            fn menu_is_idempotent(
                role in any_role(),
                status in any_status(),
                count in 0usize..16,
            ) {
                let first = TradeLifecycle::available_actions(role, status, count);
                let second = TradeLifecycle::available_actions(role, status, count);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn terminal_trades_never_transition(
                role in any_role(),
                command in any_command(),
                terminal in prop_oneof![
                    Just(TradeStatus::Accepted),
                    Just(TradeStatus::Refused),
                    Just(TradeStatus::Cancelled),
                ],
            ) {
                let trade = Trade::from_parts(
                    crate::domain::value_objects::TradeId::new_v4(),
                    UserId::new("user-1"),
                    UserId::new("user-2"),
                    terminal,
                    vec![ObjectId::new("obj-1")],
                    vec![],
                    1,
                    Timestamp::from_millis(0).unwrap(),
                    Timestamp::from_millis(0).unwrap(),
                );
                let result = TradeLifecycle::transition(trade, role, &command);
                prop_assert!(matches!(result, Err(DomainError::TerminalState(_))));
            }

            #[test]
            fn successful_transitions_bump_version_and_touch(
                command in any_command(),
                role in any_role(),
            ) {
                let trade = create_test_trade();
                let before = trade.version();
                if let Ok(updated) = TradeLifecycle::transition(trade, role, &command) {
                    prop_assert_eq!(updated.version(), before + 1);
                    prop_assert!(updated.updated_at() >= updated.created_at());
                }
            }
        }
    }
}

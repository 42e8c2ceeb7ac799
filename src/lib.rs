//! # CADOK Trade Engine
//!
//! Trade negotiation engine for the CADOK marketplace: two users, a
//! requested object set, an optional counter-offer, and a role-conditioned
//! action menu driving the lifecycle from `pending` to `accepted`,
//! `refused` or `cancelled`.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): The [`Trade`](domain::entities::Trade)
//!   aggregate, the [`TradeLifecycle`](domain::services::TradeLifecycle)
//!   action menu and transition rules, value objects, events and errors
//! - **Application Layer** (`application`): Use cases, DTOs and the
//!   application error taxonomy (including the retryable write conflict)
//! - **Infrastructure Layer** (`infrastructure`): Repository and event
//!   publisher adapters
//!
//! ## Example
//!
//! ```
//! use cadok_trades::domain::entities::Trade;
//! use cadok_trades::domain::services::TradeLifecycle;
//! use cadok_trades::domain::value_objects::{ObjectId, TradeCommand, TradeRole, TradeStatus, UserId};
//!
//! let trade = Trade::new(
//!     UserId::new("user-1"),
//!     UserId::new("user-2"),
//!     vec![ObjectId::new("obj-1")],
//! )?;
//!
//! // The owner counters with a different object
//! let trade = TradeLifecycle::transition(
//!     trade,
//!     TradeRole::Owner,
//!     &TradeCommand::ProposeCounterObject(vec![ObjectId::new("obj-9")]),
//! )?;
//!
//! // The requester takes the deal
//! let trade = TradeLifecycle::transition(trade, TradeRole::Requester, &TradeCommand::AcceptProposal)?;
//! assert_eq!(trade.status(), TradeStatus::Accepted);
//! # Ok::<(), cadok_trades::domain::errors::DomainError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

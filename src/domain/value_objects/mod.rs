//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`TradeId`], [`EventId`]: UUID-based identifiers
//! - [`UserId`], [`ObjectId`]: String-based identifiers
//!
//! ## State Types
//!
//! - [`TradeStatus`]: trade negotiation lifecycle status
//! - [`TradeRole`]: a participant's position in the negotiation
//! - [`TradeAction`] / [`TradeCommand`]: action menu entries and the
//!   transition commands submitted by the parties
//!
//! ## Time
//!
//! - [`Timestamp`]: millisecond-precision UTC timestamp

pub mod action;
pub mod ids;
pub mod role;
pub mod timestamp;
pub mod trade_status;

pub use action::{TradeAction, TradeCommand};
pub use ids::{EventId, ObjectId, TradeId, UserId};
pub use role::TradeRole;
pub use timestamp::Timestamp;
pub use trade_status::{InvalidTradeStatusError, TradeStatus};

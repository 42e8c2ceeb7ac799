//! # Domain Events
//!
//! Events emitted during domain operations for notification fan-out and
//! the audit trail.
//!
//! ## Trade Events
//!
//! - `Requested`: new negotiation opened
//! - `CounterProposed`: owner offered alternate objects
//! - `Accepted` / `Refused` / `Cancelled`: negotiation concluded
//! - `DifferentObjectRequested`: requester asked for another proposal

pub mod trade_events;

pub use trade_events::{TradeEvent, TradeEventKind};

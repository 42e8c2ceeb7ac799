//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! This module provides newtype wrappers for all domain identifiers,
//! ensuring type safety and preventing accidental mixing of different ID types.
//!
//! ## UUID-based Identifiers
//!
//! - [`TradeId`] - Trade negotiation identifier
//! - [`EventId`] - Domain event identifier
//!
//! ## String-based Identifiers
//!
//! - [`UserId`] - Account identifier of a participant
//! - [`ObjectId`] - Identifier of a listed object

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Trade negotiation identifier.
///
/// A UUID-based identifier uniquely identifying a trade within the system.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::ids::TradeId;
///
/// // Generate a new random trade ID
/// let trade_id = TradeId::new_v4();
///
/// // Display as hyphenated UUID
/// println!("Trade: {}", trade_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(Uuid);

impl TradeId {
    /// Creates a new Trade ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random Trade ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for TradeId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Domain event identifier.
///
/// A UUID-based identifier uniquely identifying a domain event for the
/// audit trail.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::ids::EventId;
///
/// let event_id = EventId::new_v4();
/// println!("Event: {}", event_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new Event ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random Event ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for EventId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Account identifier of a trade participant.
///
/// A string-based identifier matching the account store's primary key.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::ids::UserId;
///
/// let user_id = UserId::new("user-42");
/// assert_eq!(user_id.as_str(), "user-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new User ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the user ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the UserId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for UserId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a listed object.
///
/// A string-based identifier matching the object catalogue's primary key.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::ids::ObjectId;
///
/// let object_id = ObjectId::new("obj-9");
/// assert_eq!(object_id.as_str(), "obj-9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Creates a new Object ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the object ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ObjectId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ObjectId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ObjectId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for ObjectId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level errors with numeric error codes.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: State errors
//!
//! # Examples
//!
//! ```
//! use cadok_trades::domain::errors::DomainError;
//!
//! let error = DomainError::EmptyOffer;
//! assert_eq!(error.code(), 1002);
//! ```

use crate::domain::value_objects::{TradeAction, TradeRole, TradeStatus};
use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// Provides typed errors for domain operations with consistent
/// error codes for logging and API responses.
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 2000-2999 | State errors |
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::errors::DomainError;
///
/// let error = DomainError::EmptyRequest;
/// assert!(error.code() >= 1000 && error.code() < 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// A trade request named no objects.
    #[error("a trade request must name at least one object")]
    EmptyRequest,

    /// A counter-proposal named no objects.
    #[error("a counter-proposal must offer at least one object")]
    EmptyOffer,

    /// Requester and owner resolved to the same account.
    #[error("requester and owner must be distinct accounts: {0}")]
    SameParticipant(String),

    /// An object list exceeded the configured limit.
    #[error("too many objects on one side of the trade: {actual} (limit {limit})")]
    TooManyObjects {
        /// The configured maximum.
        limit: usize,
        /// The number of objects submitted.
        actual: usize,
    },

    /// Generic validation error.
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // State Errors (2000-2999)
    // ========================================================================
    /// The requested action is not in the caller's menu for the current status.
    #[error("action {action} is not available to {role} while {status}")]
    InvalidTransition {
        /// The caller's role.
        role: TradeRole,
        /// The trade's status at the time of the request.
        status: TradeStatus,
        /// The action that was requested.
        action: TradeAction,
    },

    /// Mutation attempted on a finished trade.
    #[error("trade already concluded as {0}")]
    TerminalState(TradeStatus),
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Error Code Ranges
    ///
    /// - 1000-1999: Validation errors
    /// - 2000-2999: State errors
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::errors::DomainError;
    /// use cadok_trades::domain::value_objects::TradeStatus;
    ///
    /// assert_eq!(DomainError::EmptyRequest.code(), 1001);
    /// assert_eq!(DomainError::TerminalState(TradeStatus::Accepted).code(), 2002);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::EmptyRequest => 1001,
            Self::EmptyOffer => 1002,
            Self::SameParticipant(_) => 1003,
            Self::TooManyObjects { .. } => 1004,
            Self::ValidationError(_) => 1099,

            // State errors (2000-2999)
            Self::InvalidTransition { .. } => 2001,
            Self::TerminalState(_) => 2002,
        }
    }

    /// Returns the error category name.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadok_trades::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::EmptyOffer.category(), "validation");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "state",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a state error.
    #[inline]
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod error_codes {
        use super::*;

        #[test]
        fn validation_errors_in_range() {
            let errors = [
                DomainError::EmptyRequest,
                DomainError::EmptyOffer,
                DomainError::SameParticipant("user-1".to_string()),
                DomainError::TooManyObjects {
                    limit: 10,
                    actual: 12,
                },
                DomainError::ValidationError("test".to_string()),
            ];

            for error in errors {
                let code = error.code();
                assert!(
                    (1000..2000).contains(&code),
                    "Expected validation error code 1000-1999, got {}",
                    code
                );
                assert!(error.is_validation_error());
                assert_eq!(error.category(), "validation");
            }
        }

        #[test]
        fn state_errors_in_range() {
            let errors = [
                DomainError::InvalidTransition {
                    role: TradeRole::Owner,
                    status: TradeStatus::Proposed,
                    action: TradeAction::AcceptProposal,
                },
                DomainError::TerminalState(TradeStatus::Refused),
            ];

            for error in errors {
                let code = error.code();
                assert!(
                    (2000..3000).contains(&code),
                    "Expected state error code 2000-2999, got {}",
                    code
                );
                assert!(error.is_state_error());
                assert_eq!(error.category(), "state");
            }
        }

        #[test]
        fn specific_error_codes() {
            assert_eq!(DomainError::EmptyRequest.code(), 1001);
            assert_eq!(DomainError::EmptyOffer.code(), 1002);
            assert_eq!(DomainError::SameParticipant("u".to_string()).code(), 1003);
            assert_eq!(
                DomainError::TooManyObjects {
                    limit: 10,
                    actual: 11
                }
                .code(),
                1004
            );
            assert_eq!(
                DomainError::InvalidTransition {
                    role: TradeRole::Requester,
                    status: TradeStatus::Pending,
                    action: TradeAction::RefuseRequest,
                }
                .code(),
                2001
            );
            assert_eq!(DomainError::TerminalState(TradeStatus::Accepted).code(), 2002);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn empty_offer_display() {
            assert_eq!(
                DomainError::EmptyOffer.to_string(),
                "a counter-proposal must offer at least one object"
            );
        }

        #[test]
        fn invalid_transition_display() {
            let error = DomainError::InvalidTransition {
                role: TradeRole::Owner,
                status: TradeStatus::Proposed,
                action: TradeAction::AcceptProposal,
            };
            assert_eq!(
                error.to_string(),
                "action ACCEPT_PROPOSAL is not available to OWNER while PROPOSED"
            );
        }

        #[test]
        fn terminal_state_display() {
            let error = DomainError::TerminalState(TradeStatus::Cancelled);
            assert_eq!(error.to_string(), "trade already concluded as CANCELLED");
        }

        #[test]
        fn too_many_objects_display() {
            let error = DomainError::TooManyObjects {
                limit: 10,
                actual: 12,
            };
            assert_eq!(
                error.to_string(),
                "too many objects on one side of the trade: 12 (limit 10)"
            );
        }
    }
}

//! Booking domain errors.
//!
//! A closed set of conditions the caller can act on: bad input, a missing
//! referent, an ownership violation, or an unclassified store failure.
//! Nothing here is a fatal internal fault.

use thiserror::Error;

use crate::domain::shared::{OrderId, UserId};

/// Errors surfaced by booking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Malformed or missing input.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Field with the invalid value.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// No venue with the given name exists.
    #[error("venue not found: {name}")]
    VenueNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// No order with the given id exists.
    #[error("order not found: {id}")]
    OrderNotFound {
        /// The id that failed to resolve.
        id: OrderId,
    },

    /// The acting user does not own the order being modified.
    #[error("user {user_id} does not own order {order_id}")]
    NotOwner {
        /// Order being modified.
        order_id: OrderId,
        /// User attempting the modification.
        user_id: UserId,
    },

    /// Unclassified collaborator failure (store unavailable, etc.).
    #[error("storage failure: {message}")]
    Storage {
        /// Adapter-provided description.
        message: String,
    },
}

impl BookingError {
    /// Shorthand for a validation failure on a named field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True if this is a client-input failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True if a referenced venue or order was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::VenueNotFound { .. } | Self::OrderNotFound { .. })
    }
}

//! Order aggregate root.
//!
//! A reservation order ties a user to a venue for a number of hours. The
//! aggregate owns the cost computation and the re-submission semantics;
//! review-state changes are plain administrative updates.

use serde::{Deserialize, Serialize};

use crate::domain::booking::errors::BookingError;
use crate::domain::booking::value_objects::OrderState;
use crate::domain::booking::venue::Venue;
use crate::domain::shared::{Money, OrderId, Timestamp, UserId, VenueId};

/// Caller-supplied parameters for placing or editing an order.
///
/// The venue is referenced by name; resolution to a [`Venue`] happens in
/// the application layer before the aggregate is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Name of the venue to reserve.
    pub venue_name: String,
    /// When the reservation begins. Must lie in the future.
    pub start_time: Option<Timestamp>,
    /// Duration in whole hours.
    pub hours: i64,
    /// The requesting user.
    pub user_id: UserId,
}

impl BookingRequest {
    /// Validate the request parameters against the given clock reading.
    ///
    /// Checks are fail-fast; the first violation wins. `now` is sampled
    /// once per operation so validation and the recorded order time agree.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Validation` naming the offending field.
    pub fn validate(&self, now: Timestamp) -> Result<(), BookingError> {
        if self.venue_name.trim().is_empty() {
            return Err(BookingError::validation("venue_name", "required"));
        }
        if self.hours <= 0 {
            return Err(BookingError::validation("hours", "must be positive"));
        }
        match self.start_time {
            None => return Err(BookingError::validation("start_time", "required")),
            Some(start) if !start.is_after(now) => {
                return Err(BookingError::validation(
                    "start_time",
                    "must be in the future",
                ));
            }
            Some(_) => {}
        }
        if self.user_id.is_blank() {
            return Err(BookingError::validation("user_id", "required"));
        }
        Ok(())
    }
}

/// A venue reservation order with cost, timing and review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    venue_id: VenueId,
    start_time: Timestamp,
    hours: i64,
    total: Money,
    placed_at: Timestamp,
    state: OrderState,
}

impl Order {
    /// Place a new order from a validated request and a resolved venue.
    ///
    /// The order starts in `NO_AUDIT` with `total = hours * hourly price`.
    /// Its id stays unassigned until the store persists it.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Validation` if the request is invalid.
    pub fn place(
        request: &BookingRequest,
        venue: &Venue,
        now: Timestamp,
    ) -> Result<Self, BookingError> {
        request.validate(now)?;
        let start_time = request
            .start_time
            .ok_or_else(|| BookingError::validation("start_time", "required"))?;

        Ok(Self {
            id: OrderId::default(),
            user_id: request.user_id.clone(),
            venue_id: venue.id(),
            start_time,
            hours: request.hours,
            total: venue.hourly_price() * request.hours,
            placed_at: now,
            state: OrderState::NoAudit,
        })
    }

    /// Re-submit this order with edited parameters.
    ///
    /// Every field is replaced from the request and the resolved venue,
    /// the total is recomputed, the order time is refreshed, and the state
    /// drops back to `NO_AUDIT`: any edit requires re-approval.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Validation` if the request is invalid.
    pub fn resubmit(
        &mut self,
        request: &BookingRequest,
        venue: &Venue,
        now: Timestamp,
    ) -> Result<(), BookingError> {
        request.validate(now)?;
        let start_time = request
            .start_time
            .ok_or_else(|| BookingError::validation("start_time", "required"))?;

        self.user_id = request.user_id.clone();
        self.venue_id = venue.id();
        self.start_time = start_time;
        self.hours = request.hours;
        self.total = venue.hourly_price() * request.hours;
        self.placed_at = now;
        self.state = OrderState::NoAudit;
        Ok(())
    }

    /// Apply an administrative review decision.
    ///
    /// No precondition on the current state: confirm, finish and reject
    /// are independent caller-selected transitions.
    pub fn set_state(&mut self, state: OrderState) {
        self.state = state;
    }

    /// Store-assigned identity, set on insert.
    pub(crate) fn assign_id(&mut self, id: OrderId) {
        self.id = id;
    }

    /// Order identifier (unassigned until persisted).
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Reserved venue.
    #[must_use]
    pub const fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    /// When the reservation begins.
    #[must_use]
    pub const fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Reservation duration in hours.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Cost at the time of (re-)submission.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// When the order was created or last re-submitted.
    #[must_use]
    pub const fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// Current review state.
    #[must_use]
    pub const fn state(&self) -> OrderState {
        self.state
    }

    /// True if `user` owns this order.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.user_id == user
    }
}

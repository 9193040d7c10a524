//! Order manager service.
//!
//! Orchestrates the reservation-order lifecycle over the two ports:
//! the venue directory (name -> price/identity) and the order store.
//! The service itself is stateless; collaborators are passed in
//! explicitly at construction.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::booking::aggregate::{BookingRequest, Order};
use crate::domain::booking::errors::BookingError;
use crate::domain::booking::repository::OrderStore;
use crate::domain::booking::value_objects::OrderState;
use crate::domain::booking::venue::{Venue, VenueDirectory};
use crate::domain::shared::{OrderId, Page, PageRequest, Timestamp, UserId, VenueId};

/// Application service for creating, editing, reviewing and querying
/// reservation orders.
pub struct OrderManager<V, S>
where
    V: VenueDirectory,
    S: OrderStore,
{
    venues: Arc<V>,
    orders: Arc<S>,
}

impl<V, S> OrderManager<V, S>
where
    V: VenueDirectory,
    S: OrderStore,
{
    /// Create a manager over the given collaborators.
    pub fn new(venues: Arc<V>, orders: Arc<S>) -> Self {
        Self { venues, orders }
    }

    /// Place a new order for `request.venue_name`.
    ///
    /// The order is persisted in `NO_AUDIT` with its total computed from
    /// the venue's current hourly price; the store assigns the id.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed input, `VenueNotFound` if the name does
    /// not resolve.
    pub async fn submit(&self, request: BookingRequest) -> Result<Order, BookingError> {
        let now = Timestamp::now();
        request.validate(now)?;
        let venue = self.resolve_venue(&request.venue_name).await?;

        let order = Order::place(&request, &venue, now)?;
        let order = self.orders.save(order).await?;
        info!(
            order_id = %order.id(),
            venue = %venue.name(),
            user = %order.user_id(),
            total = %order.total(),
            "order submitted"
        );
        Ok(order)
    }

    /// Edit an existing order on behalf of its owner.
    ///
    /// Input checks run first (id, then the request fields, fail-fast),
    /// followed by the business checks: venue exists, order exists, and
    /// the stored owner matches `request.user_id`. On success every field
    /// is replaced, the total recomputed, and the state reset to
    /// `NO_AUDIT` so the edit goes through review again.
    ///
    /// # Errors
    ///
    /// `Validation`, `VenueNotFound`, `OrderNotFound` or `NotOwner`, in
    /// that precedence.
    pub async fn update_order(
        &self,
        order_id: OrderId,
        request: BookingRequest,
    ) -> Result<Order, BookingError> {
        if !order_id.is_assigned() {
            return Err(BookingError::validation("order_id", "must be positive"));
        }
        let now = Timestamp::now();
        request.validate(now)?;

        let venue = self.resolve_venue(&request.venue_name).await?;
        let mut order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(BookingError::OrderNotFound { id: order_id })?;
        if !order.is_owned_by(&request.user_id) {
            return Err(BookingError::NotOwner {
                order_id,
                user_id: request.user_id.clone(),
            });
        }

        order.resubmit(&request, &venue, now)?;
        let order = self.orders.save(order).await?;
        info!(
            order_id = %order.id(),
            venue = %venue.name(),
            total = %order.total(),
            "order edited, back to review"
        );
        Ok(order)
    }

    /// Look up an order by id.
    ///
    /// # Errors
    ///
    /// `OrderNotFound` if absent.
    pub async fn find_by_id(&self, id: OrderId) -> Result<Order, BookingError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(BookingError::OrderNotFound { id })
    }

    /// Orders for a venue starting within `[from, to]`, bounds inclusive.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn orders_for_venue_between(
        &self,
        venue_id: VenueId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Order>, BookingError> {
        self.orders.find_by_venue_between(venue_id, from, to).await
    }

    /// One page of a user's orders.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn orders_for_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Page<Order>, BookingError> {
        self.orders.find_by_user(user_id, page).await
    }

    /// Delete an order by id. Deleting an absent order is a no-op; no
    /// ownership or state check happens at this layer.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), BookingError> {
        debug!(order_id = %id, "deleting order");
        self.orders.delete_by_id(id).await
    }

    /// Approve an order: state-only transition to `WAIT`.
    ///
    /// # Errors
    ///
    /// `OrderNotFound` if absent.
    pub async fn confirm_order(&self, id: OrderId) -> Result<(), BookingError> {
        self.transition(id, OrderState::Wait).await
    }

    /// Complete an order: state-only transition to `FINISH`.
    ///
    /// # Errors
    ///
    /// `OrderNotFound` if absent.
    pub async fn finish_order(&self, id: OrderId) -> Result<(), BookingError> {
        self.transition(id, OrderState::Finish).await
    }

    /// Deny an order: state-only transition to `REJECT`.
    ///
    /// # Errors
    ///
    /// `OrderNotFound` if absent.
    pub async fn reject_order(&self, id: OrderId) -> Result<(), BookingError> {
        self.transition(id, OrderState::Reject).await
    }

    /// One page of the orders still awaiting review.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn pending_review(&self, page: PageRequest) -> Result<Page<Order>, BookingError> {
        self.orders.find_by_state(OrderState::NoAudit, page).await
    }

    /// All orders that passed review (`WAIT` or `FINISH`), unpaged.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn reviewed(&self) -> Result<Vec<Order>, BookingError> {
        self.orders
            .find_by_states(&[OrderState::Wait, OrderState::Finish])
            .await
    }

    // Review transitions share one shape: the order must exist, then the
    // state column is rewritten. No precondition on the current state.
    async fn transition(&self, id: OrderId, state: OrderState) -> Result<(), BookingError> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or(BookingError::OrderNotFound { id })?;
        self.orders.update_state(order.id(), state).await?;
        info!(order_id = %id, state = %state, "order review state changed");
        Ok(())
    }

    async fn resolve_venue(&self, name: &str) -> Result<Venue, BookingError> {
        self.venues
            .find_by_name(name)
            .await?
            .ok_or_else(|| BookingError::VenueNotFound {
                name: name.to_string(),
            })
    }
}

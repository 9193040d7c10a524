//! Order store port.
//!
//! Defines the persistence abstraction for orders. Implemented by
//! adapters in the infrastructure layer.
//!
//! Mutating operations here are individually atomic but the component
//! runs read-then-write sequences over them without a version token, so
//! two concurrent edits of the same order can race. Accepted risk; see
//! DESIGN.md.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::BookingError;
use super::value_objects::OrderState;
use crate::domain::shared::{OrderId, Page, PageRequest, Timestamp, UserId, VenueId};

/// Persistence port for reservation orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist an order: insert when its id is unassigned, update
    /// otherwise. Returns the stored order, with the id filled in on
    /// insert.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails, or `OrderNotFound` when
    /// updating an id that no longer exists.
    async fn save(&self, order: Order) -> Result<Order, BookingError>;

    /// Find an order by its identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails; a missing order is `Ok(None)`.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, BookingError>;

    /// Orders for a venue whose start time lies within `[from, to]`,
    /// bounds inclusive, in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_venue_between(
        &self,
        venue_id: VenueId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Order>, BookingError>;

    /// One page of a user's orders.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Page<Order>, BookingError>;

    /// One page of the orders in a given state.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_state(
        &self,
        state: OrderState,
        page: PageRequest,
    ) -> Result<Page<Order>, BookingError>;

    /// All orders whose state is in `states`, unpaged.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_states(&self, states: &[OrderState]) -> Result<Vec<Order>, BookingError>;

    /// State-only update of an existing order.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if no order has this id.
    async fn update_state(&self, id: OrderId, state: OrderState) -> Result<(), BookingError>;

    /// Delete an order by id. Deleting an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns error if the deletion itself fails.
    async fn delete_by_id(&self, id: OrderId) -> Result<(), BookingError>;
}

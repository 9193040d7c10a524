//! In-memory adapters for the booking ports.
//!
//! Suitable for testing and development. Not for production use.
//! Listings come back in ascending id order so results are
//! deterministic.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::booking::aggregate::Order;
use crate::domain::booking::errors::BookingError;
use crate::domain::booking::repository::OrderStore;
use crate::domain::booking::value_objects::OrderState;
use crate::domain::booking::venue::{Venue, VenueDirectory};
use crate::domain::shared::{Money, OrderId, Page, PageRequest, Timestamp, UserId, VenueId};

// A poisoned lock means a writer panicked mid-update; surface it as a
// storage failure instead of unwinding through the port.
fn poisoned() -> BookingError {
    BookingError::Storage {
        message: "order store lock poisoned".to_string(),
    }
}

/// In-memory implementation of [`OrderStore`].
#[derive(Debug)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<i64, Order>>,
    next_id: AtomicI64,
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    /// True if no orders are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted<F>(&self, keep: F) -> Result<Vec<Order>, BookingError>
    where
        F: Fn(&Order) -> bool,
    {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        let mut matched: Vec<Order> = orders.values().filter(|o| keep(o)).cloned().collect();
        matched.sort_by_key(Order::id);
        Ok(matched)
    }

    fn page_of<F>(&self, keep: F, page: PageRequest) -> Result<Page<Order>, BookingError>
    where
        F: Fn(&Order) -> bool,
    {
        let matched = self.sorted(keep)?;
        let total = matched.len() as u64;
        let items: Vec<Order> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.size() as usize)
            .collect();
        Ok(Page::new(items, page, total))
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, mut order: Order) -> Result<Order, BookingError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        if order.id().is_assigned() {
            if !orders.contains_key(&order.id().value()) {
                return Err(BookingError::OrderNotFound { id: order.id() });
            }
        } else {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            order.assign_id(OrderId::new(id));
        }
        orders.insert(order.id().value(), order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, BookingError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.get(&id.value()).cloned())
    }

    async fn find_by_venue_between(
        &self,
        venue_id: VenueId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Order>, BookingError> {
        self.sorted(|o| {
            o.venue_id() == venue_id && o.start_time() >= from && o.start_time() <= to
        })
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Page<Order>, BookingError> {
        self.page_of(|o| o.user_id() == user_id, page)
    }

    async fn find_by_state(
        &self,
        state: OrderState,
        page: PageRequest,
    ) -> Result<Page<Order>, BookingError> {
        self.page_of(|o| o.state() == state, page)
    }

    async fn find_by_states(&self, states: &[OrderState]) -> Result<Vec<Order>, BookingError> {
        self.sorted(|o| states.contains(&o.state()))
    }

    async fn update_state(&self, id: OrderId, state: OrderState) -> Result<(), BookingError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        let order = orders
            .get_mut(&id.value())
            .ok_or(BookingError::OrderNotFound { id })?;
        order.set_state(state);
        Ok(())
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), BookingError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        orders.remove(&id.value());
        Ok(())
    }
}

/// In-memory implementation of [`VenueDirectory`].
///
/// Venues are seeded through [`add`](Self::add); ids are assigned in
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryVenueDirectory {
    venues: RwLock<Vec<Venue>>,
}

impl InMemoryVenueDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            venues: RwLock::new(Vec::new()),
        }
    }

    /// Register a venue, assigning the next id. Returns the new venue.
    pub fn add(&self, name: impl Into<String>, hourly_price: Money) -> Venue {
        let mut venues = match self.venues.write() {
            Ok(guard) => guard,
            Err(poisoned_guard) => poisoned_guard.into_inner(),
        };
        let id = VenueId::new(venues.len() as i64 + 1);
        let venue = Venue::new(id, name, hourly_price);
        venues.push(venue.clone());
        venue
    }

    /// Number of registered venues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.read().map(|v| v.len()).unwrap_or(0)
    }

    /// True if no venues are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VenueDirectory for InMemoryVenueDirectory {
    async fn find_by_name(&self, name: &str) -> Result<Option<Venue>, BookingError> {
        let venues = self.venues.read().map_err(|_| poisoned())?;
        Ok(venues.iter().find(|v| v.name() == name).cloned())
    }
}

//! Data transfer objects for the API boundary.

use serde::{Deserialize, Serialize};

use crate::domain::booking::aggregate::Order;
use crate::domain::booking::value_objects::OrderState;
use crate::domain::shared::{Money, Page, Timestamp};

/// Serializable view of a reservation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// Store-assigned order id.
    pub id: i64,
    /// Owning user.
    pub user_id: String,
    /// Reserved venue id.
    pub venue_id: i64,
    /// Reservation start.
    pub start_time: Timestamp,
    /// Duration in hours.
    pub hours: i64,
    /// Cost at submission time.
    pub total: Money,
    /// Creation / last re-submission time.
    pub placed_at: Timestamp,
    /// Review state.
    pub state: OrderState,
}

impl OrderDto {
    /// Build a DTO from a domain order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().value(),
            user_id: order.user_id().as_str().to_string(),
            venue_id: order.venue_id().value(),
            start_time: order.start_time(),
            hours: order.hours(),
            total: order.total(),
            placed_at: order.placed_at(),
            state: order.state(),
        }
    }
}

/// A page of orders with its pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPageDto {
    /// Orders on this page.
    pub items: Vec<OrderDto>,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Total matching orders.
    pub total_items: u64,
    /// Total pages implied by size and count.
    pub total_pages: u64,
}

impl OrderPageDto {
    /// Build a page DTO from a domain page.
    #[must_use]
    pub fn from_page(page: Page<Order>) -> Self {
        let total_pages = page.total_pages();
        let mapped = page.map(|o| OrderDto::from_order(&o));
        Self {
            items: mapped.items,
            page: mapped.page,
            size: mapped.size,
            total_items: mapped.total_items,
            total_pages,
        }
    }
}

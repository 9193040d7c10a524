//! HTTP request types.

use serde::{Deserialize, Serialize};

use crate::domain::booking::aggregate::BookingRequest;
use crate::domain::shared::{PageRequest, Timestamp, UserId};

/// Body for placing or editing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookOrderRequest {
    /// Venue to reserve, by name.
    pub venue_name: String,
    /// Reservation start (RFC 3339).
    pub start_time: Option<Timestamp>,
    /// Duration in whole hours.
    pub hours: i64,
    /// The requesting user.
    pub user_id: String,
}

impl BookOrderRequest {
    /// Convert into the domain command.
    #[must_use]
    pub fn into_domain(self) -> BookingRequest {
        BookingRequest {
            venue_name: self.venue_name,
            start_time: self.start_time,
            hours: self.hours,
            user_id: UserId::new(self.user_id),
        }
    }
}

/// Paging query parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_page_size")]
    pub size: u32,
}

impl PageQuery {
    /// Convert into the domain page request.
    #[must_use]
    pub fn into_domain(self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

const fn default_page_size() -> u32 {
    PageRequest::DEFAULT_SIZE
}

/// Query parameters for listing a user's orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOrdersQuery {
    /// The user whose orders to list.
    pub user_id: String,
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_page_size")]
    pub size: u32,
}

/// Query parameters for a venue's reservation window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VenueOrdersQuery {
    /// Window start (inclusive, RFC 3339).
    pub from: Timestamp,
    /// Window end (inclusive, RFC 3339).
    pub to: Timestamp,
}

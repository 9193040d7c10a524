//! Booking aggregates.

mod order;

pub use order::{BookingRequest, Order};

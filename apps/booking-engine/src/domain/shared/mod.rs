//! Shared domain building blocks.

pub mod value_objects;

pub use value_objects::{Money, OrderId, Page, PageRequest, Timestamp, UserId, VenueId};

//! Data transfer objects for API boundaries.

mod order_dto;

pub use order_dto::{OrderDto, OrderPageDto};

//! Value objects of the booking context.

mod order_state;

pub use order_state::OrderState;

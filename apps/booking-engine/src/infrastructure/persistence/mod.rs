//! Persistence adapters for the booking ports.

mod in_memory;

pub use in_memory::{InMemoryOrderStore, InMemoryVenueDirectory};

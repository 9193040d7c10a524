// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Booking Engine - Library
//!
//! Order management for venue reservations.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `booking`: Order aggregate, review lifecycle, venue lookup and
//!     order store ports
//!   - `shared`: identifiers, money, timestamps, paging
//!
//! - **Application**: Orchestration
//!   - `services`: `OrderManager` driving the ports
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: in-memory order store and venue directory
//!   - `http`: axum REST controller
//!
//! The engine is stateless: all state lives behind the store port, and
//! collaborators are injected explicitly at construction time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Services and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod observability;

// Domain re-exports
pub use domain::booking::{
    BookingError, BookingRequest, Order, OrderState, OrderStore, Venue, VenueDirectory,
};
pub use domain::shared::{Money, OrderId, Page, PageRequest, Timestamp, UserId, VenueId};

// Application re-exports
pub use application::dto::{OrderDto, OrderPageDto};
pub use application::services::OrderManager;

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{InMemoryOrderStore, InMemoryVenueDirectory};

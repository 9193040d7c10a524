//! Booking Engine Binary
//!
//! Starts the venue-booking order engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin booking-engine
//! ```
//!
//! # Configuration
//!
//! Read from `booking.toml` (optional) and `BOOKING_*` environment
//! variables:
//!
//! - `BOOKING_SERVER__HTTP_PORT`: HTTP server port (default: 8080)
//! - `BOOKING_SERVER__BIND_ADDRESS`: bind address (default: 0.0.0.0)
//! - `RUST_LOG`: log level (default: info)
//!
//! Venues are seeded from the `[[venues]]` entries in `booking.toml`.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use booking_engine::application::services::OrderManager;
use booking_engine::config::AppConfig;
use booking_engine::domain::shared::Money;
use booking_engine::infrastructure::http::{AppState, create_router};
use booking_engine::infrastructure::persistence::{InMemoryOrderStore, InMemoryVenueDirectory};
use booking_engine::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = AppConfig::load().context("loading configuration")?;

    let venues = InMemoryVenueDirectory::new();
    for seed in &config.venues {
        let venue = venues.add(seed.name.as_str(), Money::new(seed.hourly_price));
        info!(venue = %venue.name(), price = %venue.hourly_price(), "venue registered");
    }
    if venues.is_empty() {
        warn!("no venues configured; every submission will fail venue lookup");
    }

    let manager = OrderManager::new(Arc::new(venues), Arc::new(InMemoryOrderStore::new()));
    let router = create_router(AppState::new(Arc::new(manager)));

    let addr = format!("{}:{}", config.server.bind_address, config.server.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "booking engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("booking engine stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}

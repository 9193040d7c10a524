//! HTTP controller (driver adapter).
//!
//! Axum-based REST API that delegates to the order manager. This layer
//! only maps wire types to domain calls; every rule lives below it.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::dto::{OrderDto, OrderPageDto};
use crate::application::services::OrderManager;
use crate::domain::booking::errors::BookingError;
use crate::domain::booking::repository::OrderStore;
use crate::domain::booking::venue::VenueDirectory;
use crate::domain::shared::{OrderId, PageRequest, UserId, VenueId};

use super::request::{BookOrderRequest, PageQuery, UserOrdersQuery, VenueOrdersQuery};
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<V, S>
where
    V: VenueDirectory,
    S: OrderStore,
{
    /// The order manager all handlers delegate to.
    pub manager: Arc<OrderManager<V, S>>,
    /// Application version reported by /health.
    pub version: String,
}

impl<V, S> AppState<V, S>
where
    V: VenueDirectory,
    S: OrderStore,
{
    /// Create state around a manager, reporting the crate version.
    #[must_use]
    pub fn new(manager: Arc<OrderManager<V, S>>) -> Self {
        Self {
            manager,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl<V, S> Clone for AppState<V, S>
where
    V: VenueDirectory,
    S: OrderStore,
{
    fn clone(&self) -> Self {
        Self {
            manager: Arc::clone(&self.manager),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<V, S>(state: AppState<V, S>) -> Router
where
    V: VenueDirectory + 'static,
    S: OrderStore + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/orders", post(submit_order).get(user_orders))
        .route("/api/v1/orders/pending", get(pending_orders))
        .route("/api/v1/orders/reviewed", get(reviewed_orders))
        .route(
            "/api/v1/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/api/v1/orders/{id}/confirm", post(confirm_order))
        .route("/api/v1/orders/{id}/finish", post(finish_order))
        .route("/api/v1/orders/{id}/reject", post(reject_order))
        .route("/api/v1/venues/{venue_id}/orders", get(venue_orders))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<V, S>(State(state): State<AppState<V, S>>) -> impl IntoResponse
where
    V: VenueDirectory,
    S: OrderStore,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Place a new order.
async fn submit_order<V, S>(
    State(state): State<AppState<V, S>>,
    Json(request): Json<BookOrderRequest>,
) -> Result<impl IntoResponse, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let order = state.manager.submit(request.into_domain()).await?;
    Ok((StatusCode::CREATED, Json(OrderDto::from_order(&order))))
}

/// Look up one order.
async fn get_order<V, S>(
    State(state): State<AppState<V, S>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderDto>, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let order = state.manager.find_by_id(OrderId::new(id)).await?;
    Ok(Json(OrderDto::from_order(&order)))
}

/// Edit an order on behalf of its owner.
async fn update_order<V, S>(
    State(state): State<AppState<V, S>>,
    Path(id): Path<i64>,
    Json(request): Json<BookOrderRequest>,
) -> Result<Json<OrderDto>, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let order = state
        .manager
        .update_order(OrderId::new(id), request.into_domain())
        .await?;
    Ok(Json(OrderDto::from_order(&order)))
}

/// Delete an order.
async fn delete_order<V, S>(
    State(state): State<AppState<V, S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    state.manager.delete_order(OrderId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Approve an order.
async fn confirm_order<V, S>(
    State(state): State<AppState<V, S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    state.manager.confirm_order(OrderId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Complete an order.
async fn finish_order<V, S>(
    State(state): State<AppState<V, S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    state.manager.finish_order(OrderId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deny an order.
async fn reject_order<V, S>(
    State(state): State<AppState<V, S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    state.manager.reject_order(OrderId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a user's orders, paged.
async fn user_orders<V, S>(
    State(state): State<AppState<V, S>>,
    Query(query): Query<UserOrdersQuery>,
) -> Result<Json<OrderPageDto>, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let page = state
        .manager
        .orders_for_user(
            &UserId::new(query.user_id),
            PageRequest::new(query.page, query.size),
        )
        .await?;
    Ok(Json(OrderPageDto::from_page(page)))
}

/// List orders awaiting review, paged.
async fn pending_orders<V, S>(
    State(state): State<AppState<V, S>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<OrderPageDto>, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let page = state.manager.pending_review(query.into_domain()).await?;
    Ok(Json(OrderPageDto::from_page(page)))
}

/// List orders that passed review.
async fn reviewed_orders<V, S>(
    State(state): State<AppState<V, S>>,
) -> Result<Json<Vec<OrderDto>>, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let orders = state.manager.reviewed().await?;
    Ok(Json(orders.iter().map(OrderDto::from_order).collect()))
}

/// List a venue's orders starting inside an inclusive window.
async fn venue_orders<V, S>(
    State(state): State<AppState<V, S>>,
    Path(venue_id): Path<i64>,
    Query(query): Query<VenueOrdersQuery>,
) -> Result<Json<Vec<OrderDto>>, BookingError>
where
    V: VenueDirectory,
    S: OrderStore,
{
    let orders = state
        .manager
        .orders_for_venue_between(VenueId::new(venue_id), query.from, query.to)
        .await?;
    Ok(Json(orders.iter().map(OrderDto::from_order).collect()))
}

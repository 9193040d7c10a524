//! REST API coverage: routing, status mapping and JSON shapes.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use booking_engine::{
    AppState, InMemoryOrderStore, InMemoryVenueDirectory, Money, OrderManager, create_router,
};

fn app() -> Router {
    let venues = InMemoryVenueDirectory::new();
    venues.add("Court A", Money::from_units(50));
    venues.add("Hall B", Money::from_units(30));
    let manager = OrderManager::new(Arc::new(venues), Arc::new(InMemoryOrderStore::new()));
    create_router(AppState::new(Arc::new(manager)))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn empty_post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_body(venue: &str, user: &str, hours: i64, start: &str) -> Value {
    json!({
        "venue_name": venue,
        "start_time": start,
        "hours": hours,
        "user_id": user,
    })
}

// Fixed far-future reservation times keep the assertions deterministic.
const START: &str = "2030-06-01T10:00:00Z";

async fn submit(app: &Router, venue: &str, user: &str, hours: i64, start: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/orders",
            &booking_body(venue, user, hours, start),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn health_reports_version() {
    let response = app().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn submit_creates_pending_order_with_computed_total() {
    let app = app();
    let order = submit(&app, "Court A", "user1", 2, START).await;

    assert_eq!(order["state"], "NO_AUDIT");
    assert_eq!(order["total"], "100");
    assert_eq!(order["hours"], 2);
    assert!(order["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn submit_unknown_venue_is_404() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/api/v1/orders",
            &booking_body("Court Z", "user1", 2, START),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VENUE_NOT_FOUND");
}

#[tokio::test]
async fn submit_invalid_hours_is_400() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/api/v1/orders",
            &booking_body("Court A", "user1", 0, START),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION");
    assert!(body["message"].as_str().unwrap().contains("hours"));
}

#[tokio::test]
async fn submit_without_start_time_is_400() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/api/v1/orders",
            &json!({ "venue_name": "Court A", "hours": 2, "user_id": "user1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_by_non_owner_is_403() {
    let app = app();
    let order = submit(&app, "Court A", "user2", 2, START).await;
    let id = order["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/orders/{id}"),
            &booking_body("Court A", "user1", 3, START),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_OWNER");
}

#[tokio::test]
async fn update_switches_venue_and_resets_state() {
    let app = app();
    let order = submit(&app, "Court A", "user1", 2, START).await;
    let id = order["id"].as_i64().unwrap();

    // Approve first so the reset is observable.
    let response = app
        .clone()
        .oneshot(empty_post(&format!("/api/v1/orders/{id}/confirm")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/orders/{id}"),
            &booking_body("Hall B", "user1", 3, START),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["state"], "NO_AUDIT");
    assert_eq!(body["total"], "90");
}

#[tokio::test]
async fn review_endpoints_drive_the_lifecycle() {
    let app = app();
    let confirmed = submit(&app, "Court A", "user1", 1, START).await;
    let finished = submit(&app, "Court A", "user1", 1, START).await;
    let rejected = submit(&app, "Court A", "user1", 1, START).await;

    for (order, action) in [
        (&confirmed, "confirm"),
        (&finished, "finish"),
        (&rejected, "reject"),
    ] {
        let id = order["id"].as_i64().unwrap();
        let response = app
            .clone()
            .oneshot(empty_post(&format!("/api/v1/orders/{id}/{action}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/orders/reviewed"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let states: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["state"].as_str().unwrap())
        .collect();
    assert_eq!(states, vec!["WAIT", "FINISH"]);

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/orders/pending"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_items"], 0);
}

#[tokio::test]
async fn review_of_missing_order_is_404() {
    let response = app()
        .oneshot(empty_post("/api/v1/orders/999/confirm"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn get_and_delete_round_trip() {
    let app = app();
    let order = submit(&app, "Court A", "user1", 2, START).await;
    let id = order["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/orders/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/orders/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_listing_pages_and_filters() {
    let app = app();
    for _ in 0..3 {
        submit(&app, "Court A", "user1", 1, START).await;
    }
    submit(&app, "Court A", "user2", 1, START).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/orders?user_id=user1&page=0&size=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_items"], 3);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn venue_window_listing_is_inclusive() {
    let app = app();
    submit(&app, "Court A", "user1", 1, "2030-06-01T10:00:00Z").await;
    submit(&app, "Court A", "user1", 1, "2030-06-01T14:00:00Z").await;
    let order = submit(&app, "Court A", "user1", 1, "2030-06-01T12:00:00Z").await;
    let venue_id = order["venue_id"].as_i64().unwrap();

    let uri = format!(
        "/api/v1/venues/{venue_id}/orders?from=2030-06-01T10:00:00Z&to=2030-06-01T12:00:00Z"
    );
    let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let starts: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["start_time"].as_str().unwrap())
        .collect();
    assert_eq!(starts, vec!["2030-06-01T10:00:00Z", "2030-06-01T12:00:00Z"]);
}

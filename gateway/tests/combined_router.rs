//! Drives the combined router end-to-end for whole-lifecycle scenarios,
//! exercising the real axum router instead of the domain types directly.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use dispatcher::ReservationDispatcher;
use gateway::build_combined_router;
use http_body_util::BodyExt;
use inventory_engine::InventoryService;
use tower::ServiceExt;
use vacancy::{LocalVacancyClient, VacancyClient};

fn combined_app(initial_stock: u64) -> Router {
    let service = InventoryService::shared(initial_stock, Duration::from_secs(1));
    let client: Arc<dyn VacancyClient> = Arc::new(LocalVacancyClient::new(service.clone()));
    let dispatcher = Arc::new(ReservationDispatcher::new(client));
    build_combined_router(service, dispatcher)
}

async fn post_purchase(app: &Router, qty: i64) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/purchase")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "qty": qty }).to_string()))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn get_available(app: &Router) -> serde_json::Value {
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/available")
        .body(Body::empty())
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn cold_start_reports_initial_stock() {
    let app = combined_app(100);
    let body = get_available(&app).await;
    assert_eq!(body["qty"], 100);
}

#[tokio::test]
async fn single_purchase_decrements_by_one() {
    let app = combined_app(100);
    let (status, body) = post_purchase(&app, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["remaining"], 99);
}

#[tokio::test]
async fn serial_drain_of_exactly_initial_stock_then_rejects() {
    let app = combined_app(100);

    for _ in 0..100 {
        let (status, body) = post_purchase(&app, 1).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    let (status, body) = post_purchase(&app, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["remaining"], 0);
}

#[tokio::test]
async fn invalid_quantity_returns_400_and_leaves_stock_untouched() {
    let app = combined_app(10);

    let (status, _) = post_purchase(&app, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_purchase(&app, -3).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = get_available(&app).await;
    assert_eq!(body["qty"], 10);
}

#[tokio::test]
async fn health_and_ready_endpoints_respond() {
    let app = combined_app(1);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

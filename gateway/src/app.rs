use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use common::logger::{TraceId, root_span};
use dispatcher::ReservationDispatcher;
use inventory_engine::InventoryService;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::health::{health_router, ready_router};
use crate::{inventory_routes, purchase_routes};

/// Builds the per-request root span: a fresh `TraceId` plus the request
/// path, created before any handler runs so every log line a request
/// produces — including ones down in `inventory`/`dispatcher`/`vacancy` —
/// is correlated under the same span.
fn request_root_span(request: &Request<Body>) -> Span {
    let trace_id = TraceId::default();
    let span = root_span("http_request", &trace_id);
    span.in_scope(|| {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "request received"
        )
    });
    span
}

/// Engine-side surface: inventory endpoints + health. No Dispatcher, no
/// `/ready` — readiness is a purchase-side concept here.
pub fn build_inventory_router(service: Arc<InventoryService>) -> Router {
    inventory_routes::router(service)
        .merge(health_router("inventory-engine"))
        .layer(TraceLayer::new_for_http().make_span_with(request_root_span))
}

/// Purchase-side surface (split mode): purchase endpoint + health + ready.
/// The Dispatcher's Vacancy Client is Remote here; the HTTP Surface has no
/// way to tell, which is the point.
pub fn build_purchase_router(dispatcher: Arc<ReservationDispatcher>) -> Router {
    purchase_routes::router(dispatcher)
        .merge(health_router("ticket-purchase"))
        .merge(ready_router())
        .layer(TraceLayer::new_for_http().make_span_with(request_root_span))
}

/// Combined surface (co-located mode): one process assembles both shapes
/// against the same in-process Inventory Service. The Remote Vacancy
/// Client is never instantiated and no client-side HTTP transport exists
/// in this process.
pub fn build_combined_router(
    service: Arc<InventoryService>,
    dispatcher: Arc<ReservationDispatcher>,
) -> Router {
    inventory_routes::router(service)
        .merge(purchase_routes::router(dispatcher))
        .merge(health_router("ticket-combined"))
        .merge(ready_router())
        .layer(TraceLayer::new_for_http().make_span_with(request_root_span))
}

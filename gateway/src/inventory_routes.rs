use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use corelib::models::{AvailabilitySnapshot, ReservationOutcome, ReservationRequest};
use inventory_engine::InventoryService;
use tracing::instrument;

use crate::error_response::ApiError;

/// `/api/v1/available` and `/api/v1/reserve`, published by whichever
/// process owns the Stock Cell (the Engine in split mode, or the combined
/// process in co-located mode).
pub fn router(service: Arc<InventoryService>) -> Router {
    Router::new()
        .route("/api/v1/available", get(available))
        .route("/api/v1/reserve", post(reserve))
        .with_state(service)
}

#[instrument(skip(service))]
async fn available(State(service): State<Arc<InventoryService>>) -> Json<AvailabilitySnapshot> {
    Json(service.available())
}

#[instrument(skip(service), fields(qty = request.qty))]
async fn reserve(
    State(service): State<Arc<InventoryService>>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationOutcome>, ApiError> {
    Ok(Json(service.reserve(request)?))
}

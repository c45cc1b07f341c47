use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use corelib::models::{ReservationOutcome, ReservationRequest};
use dispatcher::ReservationDispatcher;
use tracing::instrument;

use crate::error_response::ApiError;

/// `/api/v1/purchase`, published by whichever process owns the
/// Dispatcher.
pub fn router(dispatcher: Arc<ReservationDispatcher>) -> Router {
    Router::new()
        .route("/api/v1/purchase", post(purchase))
        .with_state(dispatcher)
}

#[instrument(skip(dispatcher), fields(qty = request.qty))]
async fn purchase(
    State(dispatcher): State<Arc<ReservationDispatcher>>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationOutcome>, ApiError> {
    Ok(Json(dispatcher.purchase(request).await?))
}

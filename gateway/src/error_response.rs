use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use corelib::error::{ErrorBody, ErrorKind};
use dispatcher::DispatchError;
use inventory_engine::InventoryError;

/// Wraps any boundary error in the `{ "error": <kind>, "detail": <string> }`
/// envelope, mapped one kind to exactly one HTTP status.
pub struct ApiError(pub ErrorKind, pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::new(self.0, self.1))).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        let kind = err.kind();
        ApiError(kind, err.to_string())
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InvalidQuantity(detail) => {
                ApiError(ErrorKind::InvalidQuantity, detail)
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// The shared vocabulary of boundary failure kinds.
///
/// `InsufficientInventory` is deliberately absent: it is not an error, it is
/// a normal `ReservationOutcome` with `accepted: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidQuantity,
    UpstreamUnavailable,
    DeadlineExceeded,
    InternalError,
}

impl ErrorKind {
    /// HTTP status each kind maps to, one kind to exactly one status.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::InvalidQuantity => 400,
            ErrorKind::UpstreamUnavailable | ErrorKind::DeadlineExceeded => 503,
            ErrorKind::InternalError => 500,
        }
    }
}

/// Body of `{ "error": <kind>, "detail": <string> }` error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorKind,
    pub detail: String,
}

impl ErrorBody {
    pub fn new(error: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            error,
            detail: detail.into(),
        }
    }
}

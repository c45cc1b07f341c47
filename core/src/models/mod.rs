use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/reserve`, `POST /api/v1/purchase`.
///
/// `qty` is signed on purpose: a non-positive value is a valid JSON payload
/// that must be rejected as `InvalidQuantity` by the domain layer, not by
/// the deserializer.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ReservationRequest {
    pub qty: i64,
}

impl ReservationRequest {
    pub fn new(qty: i64) -> Self {
        Self { qty }
    }
}

/// Result of a single `try_decrement` decision, shaped for the wire.
///
/// `accepted` is serialized as `success` to match the `/reserve` and
/// `/purchase` response envelopes in the external interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationOutcome {
    #[serde(rename = "success")]
    pub accepted: bool,
    pub remaining: u64,
    pub message: String,
}

impl ReservationOutcome {
    pub fn accepted(remaining: u64, message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            remaining,
            message: message.into(),
        }
    }

    pub fn rejected(remaining: u64, message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            remaining,
            message: message.into(),
        }
    }
}

/// Body of `GET /api/v1/available`: a possibly-stale reading of the Stock
/// Cell's `total`, bounded by `cache_ttl`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    pub qty: u64,
}

impl AvailabilitySnapshot {
    pub fn new(qty: u64) -> Self {
        Self { qty }
    }
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub service: String,
}

impl HealthBody {
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: "healthy",
            service: service.into(),
        }
    }
}

/// Body of `GET /ready`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyBody {
    pub status: &'static str,
}

impl ReadyBody {
    pub fn ready() -> Self {
        Self { status: "ready" }
    }

    pub fn not_ready() -> Self {
        Self { status: "not_ready" }
    }
}

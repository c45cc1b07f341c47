use axum::Json;
use axum::routing::get;
use axum::Router;
use corelib::models::{HealthBody, ReadyBody};

/// `GET /api/v1/health`, mounted on every surface. Ambient observability,
/// carried regardless of which functionality a given surface exposes.
pub fn health_router(service_name: &'static str) -> Router {
    Router::new().route(
        "/api/v1/health",
        get(move || async move { Json(HealthBody::healthy(service_name)) }),
    )
}

/// `GET /ready`, mounted on the purchase/combined surfaces only. By the
/// time this route is reachable the Vacancy Client has already been built
/// during process wiring (construction happens before `serve` is called),
/// so readiness here is unconditional — it reports "this process finished
/// startup", not "the upstream peer is reachable" (no deep health check,
/// consistent with the no-retry / no-probing posture elsewhere).
pub fn ready_router() -> Router {
    Router::new().route("/ready", get(|| async { Json(ReadyBody::ready()) }))
}

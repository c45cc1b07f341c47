use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use corelib::models::{AvailabilitySnapshot, ReservationOutcome, ReservationRequest};
use reqwest::Client;
use tokio::sync::Semaphore;
use tracing::{debug, instrument};

use crate::client::VacancyClient;
use crate::error::VacancyError;

/// Bounds applied to the shared transport: `max_connections`,
/// `keepalive_connections`, `request_timeout`.
#[derive(Debug, Clone)]
pub struct RemoteVacancyConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub max_connections: usize,
    pub keepalive_connections: usize,
}

impl RemoteVacancyConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(2),
            max_connections: 100,
            keepalive_connections: 20,
        }
    }
}

/// Holds a shared, long-lived HTTP transport built once at process startup
/// and passed down by constructor injection. Never allocates a new
/// transport per call.
///
/// `reqwest` has no single knob for a hard total-connection ceiling — only
/// `pool_max_idle_per_host`, which bounds idle keep-alive connections, not
/// concurrently in-flight ones. `max_connections` is enforced separately, as
/// a semaphore around the request path: at most `max_connections` requests
/// are ever in flight against this transport at once, the rest wait for a
/// permit before the socket is touched.
pub struct RemoteVacancyClient {
    http: Client,
    base_url: String,
    request_timeout: Duration,
    connection_limiter: Arc<Semaphore>,
}

impl RemoteVacancyClient {
    pub fn new(cfg: RemoteVacancyConfig) -> Result<Self, VacancyError> {
        let http = Client::builder()
            .timeout(cfg.request_timeout)
            .pool_max_idle_per_host(cfg.keepalive_connections)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url,
            request_timeout: cfg.request_timeout,
            connection_limiter: Arc::new(Semaphore::new(cfg.max_connections.max(1))),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl VacancyClient for RemoteVacancyClient {
    #[instrument(skip(self), fields(qty = request.qty))]
    async fn reserve(
        &self,
        request: ReservationRequest,
    ) -> Result<ReservationOutcome, VacancyError> {
        let _permit = self
            .connection_limiter
            .acquire()
            .await
            .expect("connection_limiter semaphore is never closed");

        let send = self
            .http
            .post(self.url("/api/v1/reserve"))
            .json(&request)
            .send();

        let resp = tokio::time::timeout(self.request_timeout, send)
            .await
            .map_err(|_| VacancyError::DeadlineExceeded)?
            .map_err(classify_transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".into());
            return Err(VacancyError::PeerStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let outcome: ReservationOutcome = resp
            .json()
            .await
            .map_err(|e| VacancyError::MalformedResponse(e.to_string()))?;

        debug!(remaining = outcome.remaining, accepted = outcome.accepted, "remote reservation decoded");
        Ok(outcome)
    }

    async fn available(&self) -> Result<AvailabilitySnapshot, VacancyError> {
        let _permit = self
            .connection_limiter
            .acquire()
            .await
            .expect("connection_limiter semaphore is never closed");

        let send = self.http.get(self.url("/api/v1/available")).send();

        let resp = tokio::time::timeout(self.request_timeout, send)
            .await
            .map_err(|_| VacancyError::DeadlineExceeded)?
            .map_err(classify_transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".into());
            return Err(VacancyError::PeerStatus {
                status: status.as_u16(),
                detail,
            });
        }

        resp.json()
            .await
            .map_err(|e| VacancyError::MalformedResponse(e.to_string()))
    }
}

fn classify_transport_error(err: reqwest::Error) -> VacancyError {
    if err.is_timeout() {
        VacancyError::DeadlineExceeded
    } else {
        VacancyError::Transport(err)
    }
}

use thiserror::Error;

/// Failure kinds a Vacancy Client can surface. `Local` only ever produces
/// `Invalid`; the rest are specific to `Remote`.
#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("invalid quantity: {0}")]
    Invalid(String),

    #[error("transport error reaching inventory peer: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("inventory peer did not respond within the configured deadline")]
    DeadlineExceeded,

    #[error("inventory peer returned status {status}: {detail}")]
    PeerStatus { status: u16, detail: String },

    #[error("malformed response body from inventory peer: {0}")]
    MalformedResponse(String),
}

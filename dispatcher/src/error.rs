use corelib::error::ErrorKind;
use thiserror::Error;
use vacancy::VacancyError;

/// Errors the Dispatcher classifies and reports. It never recovers from
/// any of these; classification is its whole job.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Remote Vacancy Client only: transport failure, peer error status,
    /// or malformed body. Never retried, never mutates local state.
    #[error("upstream inventory service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Remote Vacancy Client's per-request deadline elapsed. Treated as a
    /// variant of upstream unavailability for propagation purposes.
    #[error("upstream inventory service did not respond within the deadline")]
    DeadlineExceeded,

    #[error("internal error: {0}")]
    Internal(String),
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            DispatchError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            DispatchError::DeadlineExceeded => ErrorKind::DeadlineExceeded,
            DispatchError::Internal(_) => ErrorKind::InternalError,
        }
    }
}

impl From<VacancyError> for DispatchError {
    fn from(err: VacancyError) -> Self {
        match err {
            VacancyError::Invalid(detail) => DispatchError::InvalidQuantity(detail),
            VacancyError::DeadlineExceeded => DispatchError::DeadlineExceeded,
            VacancyError::Transport(e) => DispatchError::UpstreamUnavailable(e.to_string()),
            VacancyError::PeerStatus { status, detail } => {
                DispatchError::UpstreamUnavailable(format!("peer returned {status}: {detail}"))
            }
            VacancyError::MalformedResponse(detail) => {
                DispatchError::UpstreamUnavailable(format!("malformed peer response: {detail}"))
            }
        }
    }
}

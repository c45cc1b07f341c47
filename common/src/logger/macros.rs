use super::TraceId;
use tracing::{Span, field};

/// Create a root span for a request / batch / job.
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "root",
        name = %name,
        trace_id = %trace_id.as_str(),
        qty = field::Empty,
    )
}

/// Create a child span (inherits the enclosing span's fields).
pub fn child_span(name: &'static str) -> Span {
    tracing::info_span!("child", name = %name)
}

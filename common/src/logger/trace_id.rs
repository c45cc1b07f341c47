use uuid::Uuid;

/// Correlation ID that follows a request / batch / transaction
#[derive(Clone, Debug)]
pub struct TraceId(String);

impl TraceId {
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self(Uuid::new_v4().as_hyphenated().to_string())
    }
}

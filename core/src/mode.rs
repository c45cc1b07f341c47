use std::fmt;

/// Tagged value read once at process startup; immutable thereafter.
/// Determines which Vacancy Client variant the factory returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Dispatcher and Engine share one process; Vacancy Client calls the
    /// Inventory Service directly.
    CoLocated,
    /// Dispatcher and Engine run in separate processes; Vacancy Client
    /// talks HTTP over a pooled transport.
    Split,
}

impl DeploymentMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "co-located" | "colocated" | "co_located" => Some(Self::CoLocated),
            "split" => Some(Self::Split),
            _ => None,
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoLocated => write!(f, "co-located"),
            Self::Split => write!(f, "split"),
        }
    }
}

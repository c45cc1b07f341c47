use std::time::Duration;

use corelib::mode::DeploymentMode;

/// Process-wiring configuration: everything read once at startup to decide
/// which Vacancy Client variant to build and which ports to listen on.
///
/// Reading environment variables is explicitly out of scope for the core
/// domain crates; this lives in `server` because *something* has to parse
/// them.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// `co-located` runs one process with a Local Vacancy Client;
    /// `split` expects a separate Engine process reachable at
    /// `vacancy_url`.
    pub deployment_mode: DeploymentMode,

    /// Value of the Stock Cell at process start.
    pub initial_stock: u64,

    /// Validity window of the Stock Cell's cached read.
    pub cache_ttl: Duration,

    /// Base URL used by the Remote Vacancy Client. Ignored in co-located
    /// mode.
    pub vacancy_url: String,

    /// Per-request deadline for the Remote Vacancy Client.
    pub vacancy_timeout: Duration,

    /// Total-connection cap of the Remote Vacancy Client's HTTP transport.
    pub http_max_connections: usize,

    /// Idle-connection (keep-alive) cap of the same transport.
    pub http_keepalive_connections: usize,

    /// Listen port for the purchase-only surface (split mode).
    pub purchase_port: u16,

    /// Listen port for the inventory-only surface (split mode, and the
    /// Engine process in general).
    pub inventory_port: u16,

    /// Listen port for the combined surface (co-located mode).
    pub combined_port: u16,

    /// Read only by the engine binary to loudly warn about horizontal
    /// scaling of the Engine process, which is a misconfiguration absent
    /// an external stock coordinator. Ambient process wiring, not core
    /// logic.
    pub engine_replica_count: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let deployment_mode = std::env::var("DEPLOYMENT_MODE")
            .ok()
            .as_deref()
            .and_then(DeploymentMode::parse)
            .unwrap_or(DeploymentMode::CoLocated);

        Self {
            deployment_mode,
            initial_stock: env_parsed("INITIAL_STOCK", 100),
            cache_ttl: Duration::from_millis(env_parsed("CACHE_TTL_MS", 1_000)),
            vacancy_url: std::env::var("VACANCY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8081".to_string()),
            vacancy_timeout: Duration::from_millis(env_parsed("VACANCY_TIMEOUT_MS", 2_000)),
            http_max_connections: env_parsed("HTTP_MAX_CONNECTIONS", 100),
            http_keepalive_connections: env_parsed("HTTP_KEEPALIVE_CONNECTIONS", 20),
            purchase_port: env_parsed("PURCHASE_PORT", 8080),
            inventory_port: env_parsed("INVENTORY_PORT", 8081),
            combined_port: env_parsed("COMBINED_PORT", 8082),
            engine_replica_count: env_parsed("ENGINE_REPLICA_COUNT", 1),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_defaults_when_env_unset() {
        // SAFETY (test-only): no other test in this process mutates these
        // specific keys concurrently.
        for key in [
            "DEPLOYMENT_MODE",
            "INITIAL_STOCK",
            "CACHE_TTL_MS",
            "VACANCY_TIMEOUT_MS",
        ] {
            unsafe { std::env::remove_var(key) };
        }

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.deployment_mode, DeploymentMode::CoLocated);
        assert_eq!(cfg.cache_ttl, Duration::from_secs(1));
        assert_eq!(cfg.vacancy_timeout, Duration::from_secs(2));
        assert_eq!(cfg.http_max_connections, 100);
        assert_eq!(cfg.http_keepalive_connections, 20);
    }
}

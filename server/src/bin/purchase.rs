//! Purchase process: owns the Reservation Dispatcher, publishes the
//! purchase endpoint. Split mode only — talks to the Engine process over
//! the Remote Vacancy Client's pooled HTTP transport.

use std::sync::Arc;

use common::logger::init_logger;
use corelib::mode::DeploymentMode;
use dispatcher::ReservationDispatcher;
use server::config::AppConfig;
use vacancy::{RemoteVacancyConfig, VacancyTarget, build_vacancy_client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("ticket-purchase");

    let cfg = AppConfig::from_env();

    if cfg.deployment_mode != DeploymentMode::Split {
        anyhow::bail!(
            "the `purchase` binary only makes sense in split deployment mode; \
             co-located mode should run the `combined` binary instead"
        );
    }

    let remote_cfg = RemoteVacancyConfig {
        base_url: cfg.vacancy_url.clone(),
        request_timeout: cfg.vacancy_timeout,
        max_connections: cfg.http_max_connections,
        keepalive_connections: cfg.http_keepalive_connections,
    };

    let client = build_vacancy_client(cfg.deployment_mode, VacancyTarget::Split(remote_cfg))?;
    let dispatcher = Arc::new(ReservationDispatcher::new(client));

    let app = gateway::build_purchase_router(dispatcher);

    let addr = format!("0.0.0.0:{}", cfg.purchase_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr, vacancy_url = %cfg.vacancy_url, "purchase surface listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

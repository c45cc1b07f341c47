//! Combined process: co-located mode only. Assembles both HTTP shapes
//! against one in-process Inventory Service; the Remote Vacancy Client is
//! never instantiated and no client-side transport is created.

use std::sync::Arc;

use common::logger::init_logger;
use corelib::mode::DeploymentMode;
use dispatcher::ReservationDispatcher;
use inventory_engine::InventoryService;
use server::config::AppConfig;
use vacancy::{VacancyTarget, build_vacancy_client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("ticket-combined");

    let cfg = AppConfig::from_env();

    if cfg.deployment_mode != DeploymentMode::CoLocated {
        anyhow::bail!(
            "the `combined` binary only makes sense in co-located deployment \
             mode; split mode should run the `engine` and `purchase` \
             binaries as separate processes instead"
        );
    }

    let service = InventoryService::shared(cfg.initial_stock, cfg.cache_ttl);
    let client = build_vacancy_client(
        cfg.deployment_mode,
        VacancyTarget::CoLocated(Arc::clone(&service)),
    )?;
    let dispatcher = Arc::new(ReservationDispatcher::new(client));

    let app = gateway::build_combined_router(service, dispatcher);

    let addr = format!("0.0.0.0:{}", cfg.combined_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr, initial_stock = cfg.initial_stock, "combined surface listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

//! Engine process: owns the Stock Cell, publishes inventory endpoints
//! only. Used standalone in split mode; the co-located `combined` binary
//! builds its own in-process Inventory Service instead of talking to this.

use std::sync::Arc;

use common::logger::init_logger;
use inventory_engine::InventoryService;
use server::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("inventory-engine");

    let cfg = AppConfig::from_env();

    if cfg.engine_replica_count > 1 {
        tracing::error!(
            replicas = cfg.engine_replica_count,
            "Engine deployed with more than one replica; each replica owns an \
             independent counter and this is a misconfiguration unless an \
             external stock coordinator is in front of them. The core makes \
             no attempt to coordinate across replicas."
        );
    }

    let service = InventoryService::shared(cfg.initial_stock, cfg.cache_ttl);
    let app = gateway::build_inventory_router(Arc::clone(&service));

    let addr = format!("0.0.0.0:{}", cfg.inventory_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr, initial_stock = cfg.initial_stock, "inventory engine listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

use std::sync::Arc;

use corelib::mode::DeploymentMode;
use inventory_engine::InventoryService;
use tracing::info;

use crate::client::VacancyClient;
use crate::error::VacancyError;
use crate::local::LocalVacancyClient;
use crate::remote::{RemoteVacancyClient, RemoteVacancyConfig};

/// Everything the factory needs to build either variant. Only the branch
/// matching `DeploymentMode` is actually consumed; the other is ignored,
/// which is the point — the Dispatcher that receives the result never
/// finds out which branch ran.
pub enum VacancyTarget {
    CoLocated(Arc<InventoryService>),
    Split(RemoteVacancyConfig),
}

/// Reads `DeploymentMode` exactly once and returns the corresponding
/// Vacancy Client. Any leak of this distinction past this function is a
/// design bug.
pub fn build_vacancy_client(
    mode: DeploymentMode,
    target: VacancyTarget,
) -> Result<Arc<dyn VacancyClient>, VacancyError> {
    match (mode, target) {
        (DeploymentMode::CoLocated, VacancyTarget::CoLocated(service)) => {
            info!(mode = %mode, "vacancy client: local, direct in-process call");
            Ok(Arc::new(LocalVacancyClient::new(service)))
        }
        (DeploymentMode::Split, VacancyTarget::Split(cfg)) => {
            info!(mode = %mode, base_url = %cfg.base_url, "vacancy client: remote, pooled HTTP transport");
            Ok(Arc::new(RemoteVacancyClient::new(cfg)?))
        }
        (DeploymentMode::CoLocated, VacancyTarget::Split(_)) => {
            Err(VacancyError::Invalid(
                "co-located deployment mode requires an in-process InventoryService, not a remote config".into(),
            ))
        }
        (DeploymentMode::Split, VacancyTarget::CoLocated(_)) => Err(VacancyError::Invalid(
            "split deployment mode requires a remote vacancy_url, not an in-process InventoryService".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn co_located_mode_builds_local_client() {
        let service = InventoryService::shared(10, Duration::from_secs(1));
        let client = build_vacancy_client(
            DeploymentMode::CoLocated,
            VacancyTarget::CoLocated(service),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn split_mode_builds_remote_client() {
        let client = build_vacancy_client(
            DeploymentMode::Split,
            VacancyTarget::Split(RemoteVacancyConfig::new("http://127.0.0.1:9999")),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn mismatched_mode_and_target_is_rejected() {
        let service = InventoryService::shared(10, Duration::from_secs(1));
        let client =
            build_vacancy_client(DeploymentMode::Split, VacancyTarget::CoLocated(service));
        assert!(client.is_err());
    }
}

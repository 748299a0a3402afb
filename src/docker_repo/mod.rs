// Docker daemon access via bollard

pub mod stats;

use crate::error::ReportError;
use crate::models::ContainerSummary;
use crate::report::StatsSource;
use bollard::Docker;
use bollard::query_parameters::{ListContainersOptions, StatsOptions};
use bollard::models::ContainerStatsResponse;
use futures_util::StreamExt;
use std::collections::HashMap;

const CONNECT_TIMEOUT_SECS: u64 = 120;

pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    /// Connect over the unix socket. A failure here is fatal for the run.
    pub fn connect(socket_path: Option<&str>) -> Result<Self, ReportError> {
        let docker = match socket_path {
            Some(path) => {
                Docker::connect_with_unix(path, CONNECT_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)?
            }
            None => Docker::connect_with_unix_defaults()?,
        };
        Ok(Self { docker })
    }
}

impl StatsSource for DockerRepo {
    async fn list_running(&self) -> Result<Vec<ContainerSummary>, ReportError> {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), vec!["running".to_string()]);

        let filter = ListContainersOptions {
            all: false,
            filters: Some(filters),
            ..Default::default()
        };

        let containers = self.docker.list_containers(Some(filter)).await?;
        Ok(containers
            .iter()
            .map(|c| {
                let id = c.id.as_ref().cloned().unwrap_or_default();
                let name = c
                    .names
                    .as_ref()
                    .and_then(|n| n.first())
                    .cloned()
                    .unwrap_or_else(|| id.clone());
                ContainerSummary {
                    name: name.trim_start_matches('/').to_string(),
                    id,
                }
            })
            .collect())
    }

    /// One-shot stats snapshot. The stream (and its HTTP body) is dropped
    /// when this returns, on success and failure alike.
    async fn memory_snapshot(&self, id: &str) -> Result<ContainerStatsResponse, ReportError> {
        let options = StatsOptions {
            stream: false,
            ..Default::default()
        };
        let mut stream = self.docker.stats(id, Some(options));
        match stream.next().await {
            Some(Ok(snapshot)) => Ok(snapshot),
            Some(Err(e)) => Err(ReportError::StatsUnavailable {
                id: id.to_string(),
                reason: e.to_string(),
            }),
            None => Err(ReportError::StatsUnavailable {
                id: id.to_string(),
                reason: "stats stream ended without a snapshot".to_string(),
            }),
        }
    }
}

// Report domain models

use serde::Serialize;

/// One running container as returned by the listing call. `name` is the
/// first Docker name with the leading `/` stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
}

/// Memory figures for one container within a single report run. Immutable
/// once recorded; discarded when the run ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerMemoryRecord {
    pub name: String,
    /// First 12 characters of the full container ID.
    pub short_id: String,
    pub memory_usage_bytes: u64,
    /// Share of total system memory, in [0, 100]. None when the system
    /// total is unknown or zero.
    pub memory_percentage: Option<f64>,
}

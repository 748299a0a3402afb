// Error taxonomy: only daemon/listing failures abort a run; everything else
// is scoped to one container and skipped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Cannot reach the Docker daemon or enumerate containers. Fatal.
    #[error("docker connection failed: {0}")]
    Connection(#[from] bollard::errors::Error),

    /// Stats fetch failed for one container; that container is skipped.
    #[error("stats unavailable for container {id}: {reason}")]
    StatsUnavailable { id: String, reason: String },

    /// The stats snapshot carried no usable memory figures.
    #[error("no memory figures in stats snapshot for container {id}")]
    Decode { id: String },

    /// Container ID shorter than the 12-character short-ID form.
    #[error("container id {id:?} is shorter than the 12-character short id")]
    InvalidIdentifier { id: String },
}

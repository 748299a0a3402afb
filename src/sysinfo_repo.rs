// System memory via sysinfo

use std::sync::Arc;
use sysinfo::System;
use tracing::instrument;

pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        Self {
            sys: Arc::new(std::sync::Mutex::new(System::new())),
        }
    }

    /// Total physical memory in bytes. The caller treats an error (or a
    /// zero total) as "unknown" and drops the MEM % column.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "total_memory"))]
    pub async fn total_memory(&self) -> anyhow::Result<u64> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();
            Ok(sys.total_memory())
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}

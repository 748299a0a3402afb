// Report assembly: per-run aggregation, sorting, and table rendering.

use crate::docker_repo::stats;
use crate::error::ReportError;
use crate::format::format_bytes;
use crate::models::{ContainerMemoryRecord, ContainerSummary};
use bollard::models::ContainerStatsResponse;
use std::io::Write;
use tracing::{info, warn};

/// Length of the short display form of a container ID.
pub const SHORT_ID_LEN: usize = 12;

/// Collaborator contract the driver walks: container listing plus one-shot
/// stats snapshots. `DockerRepo` is the real implementation; tests
/// substitute a fake.
// The driver processes containers sequentially on one task, so no Send
// bound is needed on these futures.
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    async fn list_running(&self) -> Result<Vec<ContainerSummary>, ReportError>;
    async fn memory_snapshot(&self, id: &str) -> Result<ContainerStatsResponse, ReportError>;
}

/// Accumulated figures for one report run: records in discovery order plus
/// the running total. The total always equals the sum over `records`.
#[derive(Debug, Default)]
pub struct MemoryReport {
    records: Vec<ContainerMemoryRecord>,
    total_bytes: u64,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one container's figures and grow the total. The short ID is
    /// the first 12 characters of the full ID; shorter IDs are rejected
    /// rather than silently truncated. The percentage is only computed when
    /// the system memory total is known and positive.
    pub fn record(
        &mut self,
        name: &str,
        full_id: &str,
        memory_usage_bytes: u64,
        total_system_memory: Option<u64>,
    ) -> Result<(), ReportError> {
        let short_id = full_id
            .get(..SHORT_ID_LEN)
            .ok_or_else(|| ReportError::InvalidIdentifier {
                id: full_id.to_string(),
            })?;

        let memory_percentage = total_system_memory
            .filter(|&total| total > 0)
            .map(|total| memory_usage_bytes as f64 / total as f64 * 100.0);

        self.records.push(ContainerMemoryRecord {
            name: name.to_string(),
            short_id: short_id.to_string(),
            memory_usage_bytes,
            memory_percentage,
        });
        self.total_bytes += memory_usage_bytes;
        Ok(())
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[ContainerMemoryRecord] {
        &self.records
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Write the table and total line to `out`. Rows are sorted by usage
    /// descending with a stable sort, so equal figures keep their discovery
    /// order. The MEM % column only appears when at least one record
    /// carries a percentage.
    pub fn render<W: Write>(&self, out: &mut W, min_padding: usize) -> std::io::Result<()> {
        let mut sorted: Vec<&ContainerMemoryRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.memory_usage_bytes.cmp(&a.memory_usage_bytes));

        let with_percentage = sorted.iter().any(|r| r.memory_percentage.is_some());

        let mut header = vec!["NAME", "ID", "MEMORY USAGE"];
        if with_percentage {
            header.push("MEM %");
        }

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(sorted.len());
        for r in &sorted {
            let mut row = vec![
                r.name.clone(),
                r.short_id.clone(),
                format_bytes(r.memory_usage_bytes),
            ];
            if with_percentage {
                row.push(match r.memory_percentage {
                    Some(p) => format!("{:.2}%", p),
                    None => String::new(),
                });
            }
            rows.push(row);
        }

        let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        writeln!(out, "Docker container memory usage")?;
        let separator: Vec<String> = header.iter().map(|h| "-".repeat(h.len())).collect();
        let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
        write_row(out, &header, &widths, min_padding)?;
        write_row(out, &separator, &widths, min_padding)?;
        for row in &rows {
            write_row(out, row, &widths, min_padding)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Total memory usage (all containers): {}",
            format_bytes(self.total_bytes)
        )?;
        Ok(())
    }
}

fn write_row<W: Write>(
    out: &mut W,
    cells: &[String],
    widths: &[usize],
    padding: usize,
) -> std::io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            for _ in 0..padding {
                line.push(' ');
            }
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            for _ in cell.len()..widths[i] {
                line.push(' ');
            }
        }
    }
    writeln!(out, "{}", line.trim_end())
}

/// Walk every running container, fetch a one-shot stats snapshot, and fold
/// the figures into a `MemoryReport`. Listing failures abort; per-container
/// failures (fetch, decode, short ID) emit one diagnostic each and skip
/// that container, so one bad container never aborts the batch.
pub async fn collect<S: StatsSource>(
    source: &S,
    total_system_memory: Option<u64>,
) -> Result<MemoryReport, ReportError> {
    let containers = source.list_running().await?;
    info!("Containers running: {}", containers.len());

    let mut report = MemoryReport::new();
    for c in &containers {
        let snapshot = match source.memory_snapshot(&c.id).await {
            Ok(s) => s,
            Err(e) => {
                warn!("Skipping container {}: {}", c.name, e);
                continue;
            }
        };
        let usage = match stats::effective_memory_usage(&snapshot) {
            Some(u) => u,
            None => {
                let e = ReportError::Decode { id: c.id.clone() };
                warn!("Skipping container {}: {}", c.name, e);
                continue;
            }
        };
        if let Err(e) = report.record(&c.name, &c.id, usage, total_system_memory) {
            warn!("Skipping container {}: {}", c.name, e);
        }
    }
    Ok(report)
}

// Extract an effective memory figure from a raw Docker stats response.

use bollard::models::ContainerStatsResponse;

/// Effective memory usage for one container: cgroup `usage` minus the
/// `cache` sub-metric when present. Raw usage counts reclaimable kernel
/// page cache attributed to the container's memory controller; subtracting
/// it approximates memory actually held by the application. Returns `None`
/// when the snapshot carries no usage figure at all, which the caller
/// treats as a decode failure.
pub fn effective_memory_usage(s: &ContainerStatsResponse) -> Option<u64> {
    let memory = s.memory_stats.as_ref()?;
    let usage = memory.usage?;
    let cache = memory
        .stats
        .as_ref()
        .and_then(|m| m.get("cache"))
        .copied()
        .unwrap_or(0);
    // cache can transiently exceed usage; clamp instead of wrapping.
    Some(usage.saturating_sub(cache))
}

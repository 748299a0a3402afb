use anyhow::Result;
use docker_memreport::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Diagnostics go to stderr; stdout carries only the report table.
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;

    let docker_repo = docker_repo::DockerRepo::connect(app_config.docker.socket_path.as_deref())
        .map_err(|e| anyhow::anyhow!("could not connect to Docker daemon: {}", e))?;
    tracing::info!(
        "Docker daemon connection established ({} v{})",
        version::NAME,
        version::VERSION
    );

    let sysinfo_repo = sysinfo_repo::SysinfoRepo::new();
    let total_system_memory = match sysinfo_repo.total_memory().await {
        Ok(total) => Some(total),
        Err(e) => {
            tracing::warn!("Could not read system memory total, omitting MEM %: {}", e);
            None
        }
    };

    let report = report::collect(&docker_repo, total_system_memory)
        .await
        .map_err(|e| anyhow::anyhow!("could not list containers: {}", e))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out, app_config.report.min_column_padding)?;

    Ok(())
}

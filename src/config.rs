use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub docker: DockerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    /// Unix socket override; bollard's defaults apply when unset.
    pub socket_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Minimum spaces between table columns.
    pub min_column_padding: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_column_padding: 3,
        }
    }
}

impl AppConfig {
    /// Load from `CONFIG_FILE`, then `config.toml`, then built-in defaults.
    /// An explicitly-set `CONFIG_FILE` that cannot be read is an error; a
    /// missing `config.toml` is not.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => {
                let s = std::fs::read_to_string(&path)?;
                Self::load_from_str(&s)
            }
            Err(_) => match std::fs::read_to_string("config.toml") {
                Ok(s) => Self::load_from_str(&s),
                Err(_) => Ok(Self::default()),
            },
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.report.min_column_padding > 0,
            "report.min_column_padding must be > 0, got {}",
            self.report.min_column_padding
        );
        if let Some(path) = &self.docker.socket_path {
            anyhow::ensure!(
                !path.is_empty(),
                "docker.socket_path must be non-empty when set"
            );
        }
        Ok(())
    }
}

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String,
    pub storage_path: String,
    pub http_server: HttpServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub addr: String,
}

fn default_env() -> String { "production".to_string() }

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.env.trim().is_empty() {
        anyhow::bail!("CONFIG ERROR: env must not be empty");
    }

    if cfg.storage_path.trim().is_empty() {
        anyhow::bail!("CONFIG ERROR: storage_path is required");
    }

    if cfg.http_server.addr.trim().is_empty() {
        anyhow::bail!("CONFIG ERROR: http_server.addr is required");
    }

    // The database file may be created on first start, its directory may not
    if let Some(parent) = Path::new(&cfg.storage_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            anyhow::bail!(
                "CONFIG ERROR: storage directory does not exist: {}",
                parent.display()
            );
        }
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

/// Loads the config file at `path`, layering `STUDENTS_API__*` environment
/// overrides on top of it.
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let path = path.ok_or_else(|| anyhow::anyhow!("config path is not set"))?;

    if !path.exists() {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    let cfg: Config = config::Config::builder()
        .add_source(config::File::from(path.as_path()).required(true))
        .add_source(config::Environment::with_prefix("STUDENTS_API").separator("__"))
        .set_default("env", default_env())?
        .build()
        .map_err(|e| anyhow::anyhow!("can not read config file: {}", e))?
        .try_deserialize()
        .map_err(|e| anyhow::anyhow!("can not read config file: {}", e))?;

    validate(&cfg)?;

    Ok(cfg)
}

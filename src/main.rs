use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use students_api::{api, config, db};

/// HTTP service for student records
#[derive(Parser, Debug)]
#[command(name = "students-api")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("students_api=info".parse()?)
        )
        .init();

    info!("Starting students-api v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load(cli.config)?;
    info!("Configuration loaded, env={}", cfg.env);

    let store = db::init(&cfg).await?;
    info!("storage initialized");

    api::serve(&cfg, Arc::new(store), api::shutdown_signal()).await
}

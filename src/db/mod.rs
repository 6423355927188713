use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use crate::config::Config;

pub mod models;
pub mod sqlite;
pub mod store;

pub use sqlite::SqliteStore;
pub use store::{StoreError, StoreResult, StudentStore};

pub async fn init(cfg: &Config) -> Result<SqliteStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(
            // Taken as a plain file path, never parsed as a URL
            SqliteConnectOptions::new()
                .filename(&cfg.storage_path)
                .create_if_missing(true)
                // WAL lets readers proceed while a write is in flight
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
        )
        .await?;

    let store = SqliteStore::new(pool).await?;

    tracing::info!("Database connected: {}", cfg.storage_path);
    Ok(store)
}

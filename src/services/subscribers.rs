use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{info, warn};

use crate::error::BotResult;

/// Chats that receive the daily price report.
#[derive(Clone)]
pub struct SubscriberStore {
    pool: SqlitePool,
}

impl SubscriberStore {
    pub async fn connect(database_url: &str) -> BotResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        if let Some(dir) = options.get_filename().parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!("Could not create database directory {}: {}", dir.display(), e);
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Connected to sqlite database.");
        Self::with_pool(pool).await
    }

    #[cfg(test)]
    pub async fn in_memory() -> BotResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> BotResult<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS subscribers (
                chat_id INTEGER PRIMARY KEY,
                subscribed_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Returns `false` when the chat was already subscribed.
    pub async fn subscribe(&self, chat_id: i64) -> BotResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO subscribers (chat_id, subscribed_at)
            VALUES (?, ?)
            ON CONFLICT(chat_id) DO NOTHING
            "#,
        )
        .bind(chat_id)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn unsubscribe(&self, chat_id: i64) -> BotResult<bool> {
        let result = sqlx::query("DELETE FROM subscribers WHERE chat_id = ?")
            .bind(chat_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn all(&self) -> BotResult<Vec<i64>> {
        let chat_ids = sqlx::query_scalar::<_, i64>(
            "SELECT chat_id FROM subscribers ORDER BY subscribed_at, chat_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(chat_ids)
    }
}

//! Local key/value storage for the chat and mood histories.
//!
//! Each history is one JSON array stored under a fixed key. A value that no
//! longer parses is logged and treated as an empty history.

use crate::error::AppError;
use crate::models::{ChatMessage, MoodEntry};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{info, warn};

/// Key of the chat history
pub const MESSAGES_KEY: &str = "mindbot-messages";
/// Key of the mood history
pub const MOOD_HISTORY_KEY: &str = "mindbot-mood-history";

pub async fn init_db(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing database at: {}", db_path.display());

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Create the key/value table if missing
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// --- Raw values ---

pub async fn get_value(pool: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
}

pub async fn set_value(pool: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO kv_store (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

// --- Record collections ---

/// Load the records stored under `key`; missing or corrupted values load as empty.
pub async fn load_records<T: DeserializeOwned>(
    pool: &SqlitePool,
    key: &str,
) -> Result<Vec<T>, AppError> {
    let Some(raw) = get_value(pool, key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!(key, error = %e, "Stored records are not valid JSON, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Replace the records stored under `key`.
pub async fn save_records<T: Serialize>(
    pool: &SqlitePool,
    key: &str,
    records: &[T],
) -> Result<(), AppError> {
    let json = serde_json::to_string(records)?;
    set_value(pool, key, &json).await?;
    Ok(())
}

// --- Histories ---

pub async fn load_messages(pool: &SqlitePool) -> Result<Vec<ChatMessage>, AppError> {
    load_records(pool, MESSAGES_KEY).await
}

pub async fn save_messages(pool: &SqlitePool, messages: &[ChatMessage]) -> Result<(), AppError> {
    save_records(pool, MESSAGES_KEY, messages).await
}

pub async fn load_mood_history(pool: &SqlitePool) -> Result<Vec<MoodEntry>, AppError> {
    load_records(pool, MOOD_HISTORY_KEY).await
}

pub async fn save_mood_history(pool: &SqlitePool, history: &[MoodEntry]) -> Result<(), AppError> {
    save_records(pool, MOOD_HISTORY_KEY, history).await
}

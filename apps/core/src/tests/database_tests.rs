//! Database Module Tests
//!
//! Tests for the key/value store and the two persisted histories.

use crate::brain::EmotionAnalyzer;
use crate::database;
use crate::models::{ChatMessage, MoodEntry};
use sqlx::sqlite::SqlitePool;
use tempfile::{tempdir, TempDir};

/// Create a test database in a temporary directory.
///
/// The directory is returned so it outlives the pool.
async fn create_test_pool() -> (SqlitePool, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");

    let pool = database::init_db(&db_path)
        .await
        .expect("Failed to create test pool");

    (pool, dir)
}

#[cfg(test)]
mod kv_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key() {
        let (pool, _dir) = create_test_pool().await;

        let value = database::get_value(&pool, "nothing-here")
            .await
            .expect("Failed to query");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_value_overwrites() {
        let (pool, _dir) = create_test_pool().await;

        database::set_value(&pool, "key", "first").await.expect("Failed to set");
        database::set_value(&pool, "key", "second").await.expect("Failed to set");

        let value = database::get_value(&pool, "key").await.expect("Failed to get");
        assert_eq!(value.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let (pool, _dir) = create_test_pool().await;

        database::set_value(&pool, "key", "kept").await.expect("Failed to set");
        database::migrate(&pool).await.expect("Failed to migrate again");

        let value = database::get_value(&pool, "key").await.expect("Failed to get");
        assert_eq!(value.as_deref(), Some("kept"));
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_histories() {
        let (pool, _dir) = create_test_pool().await;

        let messages = database::load_messages(&pool).await.expect("Failed to load");
        let moods = database::load_mood_history(&pool).await.expect("Failed to load");

        assert!(messages.is_empty());
        assert!(moods.is_empty());
    }

    #[tokio::test]
    async fn test_messages_persist_with_analysis() {
        let (pool, _dir) = create_test_pool().await;
        let analysis = EmotionAnalyzer::new().analyze("I feel so anxious");

        let messages = vec![
            ChatMessage::bot("How are you feeling today?"),
            ChatMessage::user("I feel so anxious", Some(analysis)),
        ];
        database::save_messages(&pool, &messages)
            .await
            .expect("Failed to save");

        let loaded = database::load_messages(&pool).await.expect("Failed to load");
        assert_eq!(loaded, messages);
    }

    #[tokio::test]
    async fn test_mood_history_persists() {
        let (pool, _dir) = create_test_pool().await;

        let history = vec![
            MoodEntry::new(4, ["tired"], None).expect("valid entry"),
            MoodEntry::new(8, ["happy", "calm"], Some("Good walk".to_string()))
                .expect("valid entry"),
        ];
        database::save_mood_history(&pool, &history)
            .await
            .expect("Failed to save");

        let loaded = database::load_mood_history(&pool).await.expect("Failed to load");
        assert_eq!(loaded, history);

        let raw = database::get_value(&pool, database::MOOD_HISTORY_KEY)
            .await
            .expect("Failed to get")
            .expect("value stored");
        assert!(raw.contains("\"date\""));
    }

    #[tokio::test]
    async fn test_corrupted_history_loads_empty() {
        let (pool, _dir) = create_test_pool().await;

        database::set_value(&pool, database::MESSAGES_KEY, "{not json")
            .await
            .expect("Failed to set");
        database::set_value(&pool, database::MOOD_HISTORY_KEY, "[{\"mood\": \"high\"}]")
            .await
            .expect("Failed to set");

        let messages = database::load_messages(&pool).await.expect("Failed to load");
        let moods = database::load_mood_history(&pool).await.expect("Failed to load");

        assert!(messages.is_empty());
        assert!(moods.is_empty());
    }

    #[tokio::test]
    async fn test_histories_are_independent() {
        let (pool, _dir) = create_test_pool().await;

        database::save_messages(&pool, &[ChatMessage::bot("hello")])
            .await
            .expect("Failed to save");

        let moods = database::load_mood_history(&pool).await.expect("Failed to load");
        assert!(moods.is_empty());
    }
}

//! Unit tests for AiConversationRepository.
//!
//! Covers enable/disable/is_enabled semantics, config updates and the enabled listing,
//! all against in-memory SQLite.

use crate::ai_conversation_repo::AiConversationRepository;
use crate::error::StorageError;
use serde_json::json;

async fn repo() -> AiConversationRepository {
    AiConversationRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

async fn row_count(repo: &AiConversationRepository, conversation_id: i64) -> i64 {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM ai_conversations WHERE conversation_id = ?")
            .bind(conversation_id)
            .fetch_one(repo.pool_manager.pool())
            .await
            .expect("count query");
    count.0
}

/// **Test: A conversation without a record reads as disabled.**
#[tokio::test]
async fn test_is_enabled_false_without_record() {
    let repo = repo().await;
    assert!(!repo.is_enabled(42).await.unwrap());
    assert!(repo.find(42).await.unwrap().is_none());
}

/// **Test: First enable creates the record with an empty config.**
#[tokio::test]
async fn test_enable_creates_record_with_defaults() {
    let repo = repo().await;

    let record = repo.enable(7).await.expect("enable");

    assert_eq!(record.conversation_id, 7);
    assert!(record.ai_enabled);
    assert_eq!(record.config(), &json!({}));
    assert!(repo.is_enabled(7).await.unwrap());
}

/// **Test: Enabling twice keeps one record, still enabled.**
#[tokio::test]
async fn test_enable_twice_is_idempotent() {
    let repo = repo().await;

    let first = repo.enable(7).await.unwrap();
    let second = repo.enable(7).await.unwrap();

    assert_eq!(first.id, second.id);
    assert!(second.ai_enabled);
    assert_eq!(row_count(&repo, 7).await, 1);
}

/// **Test: Disabling a never-enabled conversation changes nothing and creates no record.**
#[tokio::test]
async fn test_disable_without_record_is_noop() {
    let repo = repo().await;

    let existed = repo.disable(99).await.expect("disable must not fail");

    assert!(!existed);
    assert!(!repo.is_enabled(99).await.unwrap());
    assert_eq!(row_count(&repo, 99).await, 0);
}

/// **Test: Disable after enable turns the flag off and keeps the record.**
#[tokio::test]
async fn test_disable_after_enable_keeps_record() {
    let repo = repo().await;
    repo.enable(3).await.unwrap();

    let existed = repo.disable(3).await.unwrap();

    assert!(existed);
    assert!(!repo.is_enabled(3).await.unwrap());
    let record = repo.find(3).await.unwrap().expect("record stays");
    assert!(!record.ai_enabled);

    repo.enable(3).await.unwrap();
    assert!(repo.is_enabled(3).await.unwrap());
    assert_eq!(row_count(&repo, 3).await, 1);
}

/// **Test: Re-enabling keeps the stored config.**
#[tokio::test]
async fn test_enable_keeps_existing_config() {
    let repo = repo().await;
    repo.enable(5).await.unwrap();
    repo.update_config(5, json!({"tone": "formal"})).await.unwrap();
    repo.disable(5).await.unwrap();

    let record = repo.enable(5).await.unwrap();

    assert_eq!(record.config(), &json!({"tone": "formal"}));
}

/// **Test: Updating config without a record is NotFound.**
#[tokio::test]
async fn test_update_config_requires_record() {
    let repo = repo().await;
    let err = repo
        .update_config(11, json!({"tone": "casual"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

/// **Test: Config must be a JSON object.**
#[tokio::test]
async fn test_update_config_rejects_non_object() {
    let repo = repo().await;
    repo.enable(12).await.unwrap();
    let err = repo.update_config(12, json!([1, 2])).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));
}

/// **Test: Only enabled conversation ids are listed, ascending.**
#[tokio::test]
async fn test_list_enabled() {
    let repo = repo().await;
    repo.enable(30).await.unwrap();
    repo.enable(10).await.unwrap();
    repo.enable(20).await.unwrap();
    repo.disable(20).await.unwrap();

    assert_eq!(repo.list_enabled().await.unwrap(), vec![10, 30]);
}
